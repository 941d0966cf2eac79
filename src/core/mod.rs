// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod text;
pub mod tfidf;

pub use matcher::{MatchError, MatchOutcome, Matcher, SINGLE_SCORE_ID};
pub use scoring::{blend_scores, compute_skill_overlap, scale_to_band, SkillOverlap, NEUTRAL_SCORE};
pub use text::{build_jd_document, build_student_document, normalize_text};
pub use tfidf::{cosine_similarity, DocumentVector, TfidfVectorizer, VectorizeError};
