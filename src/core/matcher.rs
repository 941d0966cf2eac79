use crate::core::{
    scoring::{blend_scores, compute_skill_overlap, scale_to_band, NEUTRAL_SCORE},
    text::{build_jd_document, build_student_document},
    tfidf::{cosine_similarity, TfidfVectorizer},
};
use crate::models::{MatchResult, ScoreBand, ScoringWeights, StudentProfile};
use thiserror::Error;

/// Placeholder identifier for the ad-hoc single-score entry point
pub const SINGLE_SCORE_ID: &str = "temp";

/// Errors surfaced by the matching pipeline
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no students provided")]
    NoStudents,
}

/// Result of one matching batch
#[derive(Debug)]
pub struct MatchOutcome {
    pub results: Vec<MatchResult>,
    pub total: usize,
}

/// Main matching orchestrator
///
/// # Pipeline
/// 1. Build the weighted JD document and one document per student
/// 2. Fit a batch-local TF-IDF model and score each student against
///    the JD by cosine similarity
/// 3. Blend text similarity with exact skill overlap
/// 4. Rescale into the presentation band and rank descending
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    band: ScoreBand,
    max_features: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, band: ScoreBand, max_features: usize) -> Self {
        Self { weights, band, max_features }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            band: ScoreBand::default(),
            max_features: crate::core::tfidf::DEFAULT_MAX_FEATURES,
        }
    }

    /// Score every student against the job description and rank the
    /// results by final score, descending. Ties keep input order.
    ///
    /// The vectorizer is fit on exactly this batch: the vector space is
    /// batch-relative and nothing survives the call. If the batch is
    /// degenerate (every document normalizes to nothing) every student
    /// falls back to the neutral text similarity rather than failing
    /// the request.
    ///
    /// # Errors
    /// `MatchError::NoStudents` when `students` is empty; nothing is
    /// computed in that case.
    pub fn match_students(
        &self,
        jd_text: &str,
        required_skills: &[String],
        students: &[StudentProfile],
    ) -> Result<MatchOutcome, MatchError> {
        if students.is_empty() {
            return Err(MatchError::NoStudents);
        }
        let total = students.len();

        let mut documents = Vec::with_capacity(total + 1);
        documents.push(build_jd_document(jd_text, required_skills));
        documents.extend(students.iter().map(build_student_document));

        // Fresh vectorizer per batch: the vocabulary must never be
        // shared across requests.
        let vectorizer = TfidfVectorizer::new(self.max_features);
        let similarities: Vec<f64> = match vectorizer.fit_transform(&documents) {
            Ok(vectors) => {
                let jd_vector = &vectors[0];
                vectors[1..]
                    .iter()
                    .map(|vector| cosine_similarity(jd_vector, vector))
                    .collect()
            }
            Err(e) => {
                tracing::error!(
                    "vectorization failed for batch of {}, using neutral similarity: {}",
                    total,
                    e
                );
                vec![NEUTRAL_SCORE; total]
            }
        };

        let mut results: Vec<MatchResult> = students
            .iter()
            .zip(similarities)
            .map(|(student, text_similarity)| {
                let overlap = compute_skill_overlap(required_skills, &student.skills);
                let combined = blend_scores(text_similarity, overlap.ratio, &self.weights);

                MatchResult {
                    student_id: student.id.clone(),
                    match_score: scale_to_band(combined, &self.band),
                    matched_skills: overlap.matched,
                    missing_skills: overlap.missing,
                }
            })
            .collect();

        // Stable sort: equal scores keep input order
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(MatchOutcome { results, total })
    }

    /// Score a single ad-hoc student. A thin projection of
    /// [`Matcher::match_students`] over a one-student batch, returning
    /// only the final score.
    pub fn score_single(
        &self,
        jd_text: &str,
        required_skills: &[String],
        student_skills: &[String],
        resume_text: &str,
    ) -> Result<f64, MatchError> {
        let student = StudentProfile {
            id: SINGLE_SCORE_ID.to_string(),
            skills: student_skills.to_vec(),
            resume_text: resume_text.to_string(),
        };

        let outcome = self.match_students(jd_text, required_skills, &[student])?;
        Ok(outcome
            .results
            .first()
            .map(|result| result.match_score)
            .unwrap_or(0.0))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
