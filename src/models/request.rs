use serde::Deserialize;

use crate::catalog::ModelProvider;

// Raw analyze request as the client sent it. Every field is optional at
// decode time so validation, not deserialization, reports what is missing.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub tickers: Option<Vec<String>>,
    pub model_name: Option<String>,
    pub selected_analysts: Option<Vec<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub show_reasoning: Option<bool>,
}

/// Fully-specified request after validation: dates filled in, provider
/// resolved, required fields guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub tickers: Vec<String>,
    pub model_name: String,
    pub selected_analysts: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub show_reasoning: bool,
    pub model_provider: ModelProvider,
}
