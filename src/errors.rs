use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::external::analysis_engine::EngineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("analysis failed: {0}")]
    Engine(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(value: EngineError) -> Self {
        AppError::Engine(value.to_string())
    }
}
