use serde::{Deserialize, Serialize};

/// Student profile submitted for matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_text: String,
}

/// Scored match result for one student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub student_id: String,
    pub match_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// Blend weights for text similarity vs exact skill overlap
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub text: f64,
    pub skill: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { text: 0.55, skill: 0.45 }
    }
}

/// Presentation band for final scores
///
/// Raw combined scores are mapped to `floor + combined * span`, capped
/// at `cap`, so nobody is ever shown a 0% or 100% match.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBand {
    pub floor: f64,
    pub span: f64,
    pub cap: f64,
}

impl Default for ScoreBand {
    fn default() -> Self {
        Self { floor: 0.30, span: 0.65, cap: 0.95 }
    }
}
