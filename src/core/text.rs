use crate::models::StudentProfile;

/// Normalize raw free text into a canonical document for vectorization.
///
/// Lowercases the input, replaces every character outside
/// `[a-z0-9+#.\s]` with a space, then collapses whitespace runs and
/// trims. Keeping `+`, `#` and `.` preserves tech terms like "c++",
/// "c#", ".net" and "node.js" that naive tokenization would destroy.
///
/// Total over any input: never fails, empty in gives empty out.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();

    let cleaned: String = lowered
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '#' | '.' => c,
            _ => ' ',
        })
        .collect();

    let mut document = String::with_capacity(cleaned.len());
    for token in cleaned.split_whitespace() {
        if !document.is_empty() {
            document.push(' ');
        }
        document.push_str(token);
    }
    document
}

/// Build the weighted document for one student.
///
/// The skills phrase is emitted twice before the resume text so skills
/// contribute double weight to term frequency relative to prose.
pub fn build_student_document(student: &StudentProfile) -> String {
    let skills_phrase = student.skills.join(" ");
    normalize_text(&format!(
        "{} {} {}",
        skills_phrase, skills_phrase, student.resume_text
    ))
}

/// Build the weighted document for the job description.
///
/// Mirrors the student rule: description text followed by the
/// required-skills phrase twice.
pub fn build_jd_document(jd_text: &str, required_skills: &[String]) -> String {
    let skills_phrase = required_skills.join(" ");
    normalize_text(&format!("{} {} {}", jd_text, skills_phrase, skills_phrase))
}
