use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::AnalyzeRequest;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

/// POST /api/analyze
/// Validate and normalize the request, then hand it to the analysis engine.
#[axum::debug_handler]
pub async fn analyze(
    State(state): State<AppState>,
    Json(raw): Json<AnalyzeRequest>,
) -> Result<Json<Value>, AppError> {
    info!("POST /api/analyze");

    let result = services::analysis_service::run_analysis(&state, raw)
        .await
        .map_err(|e| {
            if let AppError::MissingField(field) = &e {
                warn!("Rejected analyze request, missing field: {}", field);
            }
            e
        })?;

    Ok(Json(result))
}
