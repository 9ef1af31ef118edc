use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skillmatch_core::catalog::{default_roles, load_path};
use skillmatch_core::settings::DEFAULT_TOP_N;
use skillmatch_core::{RecommendError, RecommendationResponse, Recommender, RoleRecord};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}
fn default_top_n() -> usize { DEFAULT_TOP_N }

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_ready: bool,
    pub dataset_rows: usize,
    pub vocab_size: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

/// Wraps core errors so handlers can return them directly.
#[derive(Debug)]
pub struct ApiError(pub RecommendError);

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self { ApiError(err) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self.0 {
            RecommendError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg.clone()),
            RecommendError::NotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                "NOT_READY",
                "The recommendation engine is still loading. Please try again in a moment.".to_string(),
            ),
            err @ (RecommendError::EmptyCatalog | RecommendError::Internal(_)) => {
                tracing::error!(error = %err, "recommendation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An error occurred while computing recommendations.".to_string(),
                )
            }
        };
        let body = Json(serde_json::json!({ "error": { "code": code, "message": message } }));
        (status, body).into_response()
    }
}

/// Catalog from `path` when given, otherwise the built-in dataset.
pub fn load_roles(path: Option<&str>) -> Result<Vec<RoleRecord>> {
    match path {
        Some(p) => load_path(p),
        None => {
            tracing::info!("no catalog path given, using built-in dataset");
            Ok(default_roles())
        }
    }
}

pub fn build_app(recommender: Arc<Recommender>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) if val.trim() != "*" => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        _ => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/recommend", post(recommend_handler))
        .with_state(AppState { recommender })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let stats = state.recommender.stats()?;
    Ok(Json(HealthResponse { status: "ok", model_ready: true, dataset_rows: stats.dataset_rows, vocab_size: stats.vocab_size }))
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let Json(req) = payload.map_err(|rej| ApiError(RecommendError::Validation(rej.body_text())))?;
    let response = state.recommender.get_recommendations(&req.skills, req.top_n)?;
    Ok(Json(response))
}
