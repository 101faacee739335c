use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::catalog::{AnalystEntry, ModelEntry};
use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(list_models))
        .route("/analysts", get(list_analysts))
}

/// GET /api/models
/// Available models in the catalog's declared order.
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModelEntry>>, AppError> {
    info!("GET /api/models");
    Ok(Json(state.catalog.list_models()))
}

/// GET /api/analysts
/// Available analysts, sorted for presentation.
pub async fn list_analysts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalystEntry>>, AppError> {
    info!("GET /api/analysts");
    Ok(Json(state.catalog.list_analysts()))
}
