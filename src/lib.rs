//! Placement Match - TF-IDF matching service for campus placement drives
//!
//! This library scores a batch of student profiles against a single job
//! description using TF-IDF cosine similarity blended with exact
//! required-skill overlap, and returns a ranked result set.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{normalize_text, MatchError, MatchOutcome, Matcher};
pub use crate::models::{
    MatchRequest, MatchResponse, MatchResult, ScoreBand, ScoringWeights, StudentProfile,
};
