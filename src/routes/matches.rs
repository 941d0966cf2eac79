use crate::core::{MatchError, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, MatchResponse, ScoreSingleRequest,
    ScoreSingleResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
///
/// The matcher holds only configuration (weights, band, feature cap);
/// all vectorization state is allocated per request.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_students))
        .route("/score-single", web::post().to(score_single));
}

/// Service banner
async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Placement match service is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Batch match endpoint
///
/// POST /match
///
/// Request body:
/// ```json
/// {
///   "jd_text": "string",
///   "required_skills": ["string"],
///   "students": [{"id": "string", "skills": ["string"], "resume_text": "string"}]
/// }
/// ```
async fn match_students(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Matching {} students against jd ({} required skills)",
        req.students.len(),
        req.required_skills.len()
    );

    match state
        .matcher
        .match_students(&req.jd_text, &req.required_skills, &req.students)
    {
        Ok(outcome) => {
            if let Some(top) = outcome.results.first() {
                tracing::info!(
                    "Matching complete: {} results, top score {}",
                    outcome.total,
                    top.match_score
                );
            }

            HttpResponse::Ok().json(MatchResponse {
                results: outcome.results,
                total: outcome.total,
            })
        }
        Err(e @ MatchError::NoStudents) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid request".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

/// Quick single-student match score
///
/// POST /score-single
///
/// Request body (every field optional):
/// ```json
/// {
///   "jd_text": "string",
///   "required_skills": ["string"],
///   "student_skills": ["string"],
///   "resume_text": "string"
/// }
/// ```
async fn score_single(
    state: web::Data<AppState>,
    req: web::Json<ScoreSingleRequest>,
) -> impl Responder {
    match state.matcher.score_single(
        &req.jd_text,
        &req.required_skills,
        &req.student_skills,
        &req.resume_text,
    ) {
        Ok(match_score) => HttpResponse::Ok().json(ScoreSingleResponse { match_score }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid request".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}
