use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::ModelProvider;
use crate::models::Portfolio;

/// Argument bundle handed to the engine for one run. Serialized verbatim
/// onto the wire for HTTP-backed engines.
#[derive(Debug, Clone, Serialize)]
pub struct EngineRequest {
    pub tickers: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub portfolio: Portfolio,
    pub show_reasoning: bool,
    pub selected_analysts: Vec<String>,
    pub model_name: String,
    pub model_provider: ModelProvider,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("{0}")]
    Engine(String),
}

/// The external analysis engine. Opaque to this service: it receives the
/// normalized request and returns whatever JSON it produces, passed through
/// to the client untouched.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    async fn run(&self, request: EngineRequest) -> Result<Value, EngineError>;
}
