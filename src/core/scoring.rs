use crate::models::{ScoreBand, ScoringWeights};
use std::collections::BTreeSet;

/// Score used when a signal is absent: no required skills, or a batch
/// that could not be vectorized. Half-credit rather than zero or full.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Exact overlap between required and student skills
#[derive(Debug, Clone)]
pub struct SkillOverlap {
    /// Required skills the student has (lower-cased comparison keys)
    pub matched: Vec<String>,
    /// Required skills the student lacks (lower-cased comparison keys)
    pub missing: Vec<String>,
    /// |matched| / |required|, or `NEUTRAL_SCORE` when nothing is required
    pub ratio: f64,
}

/// Compute the exact skill overlap between the required and student
/// skill lists.
///
/// Both sides are lower-cased and trimmed before comparison, and
/// duplicates collapse. The emitted matched/missing values are the
/// comparison keys themselves, sorted for deterministic output.
pub fn compute_skill_overlap(required: &[String], student: &[String]) -> SkillOverlap {
    let required_set: BTreeSet<String> =
        required.iter().map(|s| s.trim().to_lowercase()).collect();
    let student_set: BTreeSet<String> =
        student.iter().map(|s| s.trim().to_lowercase()).collect();

    let matched: Vec<String> = required_set.intersection(&student_set).cloned().collect();
    let missing: Vec<String> = required_set.difference(&student_set).cloned().collect();

    let ratio = if required_set.is_empty() {
        NEUTRAL_SCORE
    } else {
        matched.len() as f64 / required_set.len() as f64
    };

    SkillOverlap { matched, missing, ratio }
}

/// Blend text similarity and skill ratio into one raw combined score.
///
/// Default weights (0.55 text, 0.45 skill) make exact skill match
/// nearly as important as, but secondary to, overall textual fit.
#[inline]
pub fn blend_scores(text_similarity: f64, skill_ratio: f64, weights: &ScoringWeights) -> f64 {
    text_similarity * weights.text + skill_ratio * weights.skill
}

/// Rescale a raw [0,1] combined score into the presentation band.
///
/// `final = min(floor + combined * span, cap)`, rounded to 4 decimals.
/// With the defaults the band is [0.30, 0.95], so no candidate is ever
/// shown as a 0% or 100% match.
#[inline]
pub fn scale_to_band(combined: f64, band: &ScoreBand) -> f64 {
    round4((band.floor + combined * band.span).min(band.cap))
}

#[inline]
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
