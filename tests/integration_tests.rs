// Integration tests for the placement match pipeline

use placement_match::core::{MatchError, Matcher, SINGLE_SCORE_ID};
use placement_match::models::StudentProfile;

fn create_student(id: &str, skills: &[&str], resume_text: &str) -> StudentProfile {
    StudentProfile {
        id: id.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        resume_text: resume_text.to_string(),
    }
}

fn required(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = Matcher::with_defaults();
    let jd = "We need a backend engineer with rust and sql experience \
              building high throughput services";
    let required_skills = required(&["rust", "sql"]);

    let students = vec![
        create_student(
            "strong",
            &["Rust", "SQL", "Docker"],
            "built rust services with sql backed storage",
        ),
        create_student(
            "partial",
            &["SQL"],
            "database administration and reporting",
        ),
        create_student("unrelated", &["Photoshop"], "graphic design portfolio"),
        create_student("empty", &[], ""),
    ];

    let outcome = matcher
        .match_students(jd, &required_skills, &students)
        .unwrap();

    // Every student gets exactly one result
    assert_eq!(outcome.results.len(), 4);
    assert_eq!(outcome.total, 4);

    // All scores within the presentation band
    for result in &outcome.results {
        assert!(
            result.match_score >= 0.30 && result.match_score <= 0.95,
            "score {} outside [0.30, 0.95]",
            result.match_score
        );
    }

    // Sorted descending
    for pair in outcome.results.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "results not sorted by score"
        );
    }

    // The full match ranks first, the unrelated profiles last
    assert_eq!(outcome.results[0].student_id, "strong");
    assert_eq!(outcome.results[0].matched_skills, vec!["rust", "sql"]);
    assert!(outcome.results[0].missing_skills.is_empty());

    let partial = outcome
        .results
        .iter()
        .find(|r| r.student_id == "partial")
        .unwrap();
    assert_eq!(partial.matched_skills, vec!["sql"]);
    assert_eq!(partial.missing_skills, vec!["rust"]);
}

#[test]
fn test_empty_student_list_is_an_error() {
    let matcher = Matcher::with_defaults();
    let result = matcher.match_students("any jd", &required(&["rust"]), &[]);

    assert!(matches!(result, Err(MatchError::NoStudents)));
}

#[test]
fn test_perfect_alignment_scores_cap() {
    let matcher = Matcher::with_defaults();
    let students = vec![create_student("perfect", &["python", "sql"], "python sql")];

    let outcome = matcher
        .match_students("python sql", &required(&["python", "sql"]), &students)
        .unwrap();

    assert_eq!(outcome.results[0].match_score, 0.95);
}

#[test]
fn test_complete_mismatch_scores_floor() {
    let matcher = Matcher::with_defaults();
    let students = vec![create_student(
        "mismatch",
        &["gardening"],
        "award winning rose gardens",
    )];

    let outcome = matcher
        .match_students(
            "embedded firmware engineer",
            &required(&["c++", "rtos"]),
            &students,
        )
        .unwrap();

    assert!((outcome.results[0].match_score - 0.30).abs() < 1e-9);
}

#[test]
fn test_tie_break_preserves_input_order() {
    let matcher = Matcher::with_defaults();
    let students = vec![
        create_student("first", &["rust"], "rust engineer"),
        create_student("second", &["rust"], "rust engineer"),
        create_student("third", &["rust"], "rust engineer"),
    ];

    let outcome = matcher
        .match_students("rust engineer", &required(&["rust"]), &students)
        .unwrap();

    let order: Vec<&str> = outcome
        .results
        .iter()
        .map(|r| r.student_id.as_str())
        .collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_degenerate_corpus_still_ranks_everyone() {
    let matcher = Matcher::with_defaults();
    // All free text normalizes to nothing
    let students = vec![
        create_student("a", &[], "!!!"),
        create_student("b", &[], "???"),
    ];

    let outcome = matcher.match_students("***", &[], &students).unwrap();

    assert_eq!(outcome.results.len(), 2);
    for result in &outcome.results {
        // neutral similarity 0.5 and neutral skill ratio 0.5:
        // 0.30 + (0.55 * 0.5 + 0.45 * 0.5) * 0.65 = 0.625
        assert!((result.match_score - 0.625).abs() < 1e-9);
    }
}

#[test]
fn test_single_score_equals_batch_of_one() {
    let matcher = Matcher::with_defaults();
    let jd = "data engineer with python and airflow";
    let required_skills = required(&["python", "airflow"]);
    let student_skills = required(&["python"]);
    let resume = "two years building python etl pipelines";

    let single = matcher
        .score_single(jd, &required_skills, &student_skills, resume)
        .unwrap();

    let outcome = matcher
        .match_students(
            jd,
            &required_skills,
            &[create_student(SINGLE_SCORE_ID, &["python"], resume)],
        )
        .unwrap();

    assert_eq!(single, outcome.results[0].match_score);
}
