// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchResult, ScoreBand, ScoringWeights, StudentProfile};
pub use requests::{MatchRequest, ScoreSingleRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, ScoreSingleResponse};
