use crate::models::domain::StudentProfile;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to match a batch of students against one job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    pub jd_text: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[validate(length(min = 1, message = "at least one student is required"))]
    pub students: Vec<StudentProfile>,
}

/// Request to score a single ad-hoc student
///
/// Every field is defaultable so a minimal payload still scores; the
/// student gets a placeholder identifier internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSingleRequest {
    #[serde(default)]
    pub jd_text: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub student_skills: Vec<String>,
    #[serde(default)]
    pub resume_text: String,
}
