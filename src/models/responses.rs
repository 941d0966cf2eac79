use crate::models::domain::MatchResult;
use serde::{Deserialize, Serialize};

/// Response for the batch match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
    pub total: usize,
}

/// Response for the single-score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSingleResponse {
    pub match_score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
