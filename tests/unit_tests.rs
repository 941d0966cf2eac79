// Unit tests for the placement match pipeline

use placement_match::core::{
    blend_scores, build_jd_document, build_student_document, compute_skill_overlap,
    cosine_similarity, normalize_text, scale_to_band, TfidfVectorizer, VectorizeError,
    NEUTRAL_SCORE,
};
use placement_match::models::{ScoreBand, ScoringWeights, StudentProfile};

fn skills(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_normalize_preserves_tech_terms() {
    assert_eq!(normalize_text("C++/.NET & Node.js"), "c++ .net node.js");
}

#[test]
fn test_normalize_is_total() {
    assert_eq!(normalize_text(""), "");
    assert_eq!(normalize_text("   \t\n  "), "");
    assert_eq!(normalize_text("@@@ ;;; ((("), "");
}

#[test]
fn test_student_document_weights_skills_twice() {
    let student = StudentProfile {
        id: "s1".to_string(),
        skills: skills(&["Python", "SQL"]),
        resume_text: "Data pipelines".to_string(),
    };

    assert_eq!(
        build_student_document(&student),
        "python sql python sql data pipelines"
    );
}

#[test]
fn test_jd_document_weights_skills_twice() {
    assert_eq!(
        build_jd_document("Data engineer role", &skills(&["Python"])),
        "data engineer role python python"
    );
}

#[test]
fn test_skill_overlap_reference_case() {
    // required {python, sql} vs skills {Python, Java}
    let overlap = compute_skill_overlap(&skills(&["python", "sql"]), &skills(&["Python", "Java"]));

    assert_eq!(overlap.matched, vec!["python"]);
    assert_eq!(overlap.missing, vec!["sql"]);
    assert_eq!(overlap.ratio, 0.5);
}

#[test]
fn test_skill_overlap_neutral_without_requirements() {
    let overlap = compute_skill_overlap(&[], &skills(&["anything"]));
    assert_eq!(overlap.ratio, NEUTRAL_SCORE);

    let overlap = compute_skill_overlap(&[], &[]);
    assert_eq!(overlap.ratio, NEUTRAL_SCORE);
}

#[test]
fn test_blend_and_band_composition() {
    let weights = ScoringWeights::default();
    let band = ScoreBand::default();

    // similarity 1.0 and full skill match saturate the band cap
    let combined = blend_scores(1.0, 1.0, &weights);
    assert_eq!(scale_to_band(combined, &band), 0.95);

    // nothing matches: band floor
    let combined = blend_scores(0.0, 0.0, &weights);
    assert!((scale_to_band(combined, &band) - 0.30).abs() < 1e-9);
}

#[test]
fn test_vectorizer_identical_documents() {
    let vectorizer = TfidfVectorizer::default();
    let documents = vec![
        "rust backend engineer".to_string(),
        "rust backend engineer".to_string(),
    ];

    let vectors = vectorizer.fit_transform(&documents).unwrap();
    assert!((cosine_similarity(&vectors[0], &vectors[1]) - 1.0).abs() < 1e-9);
}

#[test]
fn test_vectorizer_rejects_empty_corpus() {
    let vectorizer = TfidfVectorizer::default();
    let documents = vec!["".to_string(), "".to_string()];

    assert!(matches!(
        vectorizer.fit_transform(&documents),
        Err(VectorizeError::EmptyVocabulary)
    ));
}

#[test]
fn test_vectorizer_similarity_in_unit_interval() {
    let vectorizer = TfidfVectorizer::default();
    let documents = vec![
        "rust backend services postgres".to_string(),
        "rust frontend wasm".to_string(),
        "python data science".to_string(),
    ];

    let vectors = vectorizer.fit_transform(&documents).unwrap();
    for vector in &vectors[1..] {
        let similarity = cosine_similarity(&vectors[0], vector);
        assert!((0.0..=1.0).contains(&similarity));
    }
}
