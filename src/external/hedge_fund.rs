use async_trait::async_trait;
use serde_json::Value;

use crate::external::analysis_engine::{AnalysisEngine, EngineError, EngineRequest};

const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8500/run";

/// HTTP client for the hedge-fund engine process. Posts the run request and
/// passes the engine's JSON result through untouched. No request timeout is
/// set; a slow engine run simply keeps its request open.
pub struct HedgeFundClient {
    client: reqwest::Client,
    base_url: String,
}

impl HedgeFundClient {
    pub fn from_env() -> Self {
        let base_url = std::env::var("HEDGE_FUND_ENGINE_URL")
            .unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnalysisEngine for HedgeFundClient {
    async fn run(&self, request: EngineRequest) -> Result<Value, EngineError> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| EngineError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // The engine reports its failure message in the body
            let body = resp.text().await.unwrap_or_default();
            return Err(EngineError::Engine(if body.is_empty() {
                format!("engine returned status {status}")
            } else {
                body
            }));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| EngineError::BadResponse(e.to_string()))
    }
}
