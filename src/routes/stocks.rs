use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stock/:ticker/history", get(stock_history))
}

// Accepted for interface compatibility with the frontends; the placeholder
// data ignores them.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryPoint {
    pub date: &'static str,
    pub price: f64,
    pub volume: u64,
}

#[derive(Debug, Serialize)]
pub struct StockHistory {
    pub ticker: String,
    pub data: Vec<HistoryPoint>,
}

/// GET /api/stock/:ticker/history
// TODO: wire a real price provider; until then this returns fixed sample data
pub async fn stock_history(
    Path(ticker): Path<String>,
    Query(_params): Query<HistoryParams>,
) -> Json<StockHistory> {
    info!("GET /api/stock/{}/history", ticker);

    Json(StockHistory {
        ticker,
        data: vec![
            HistoryPoint {
                date: "2024-01-01",
                price: 150.0,
                volume: 1_000_000,
            },
            HistoryPoint {
                date: "2024-01-02",
                price: 152.5,
                volume: 1_100_000,
            },
            HistoryPoint {
                date: "2024-01-03",
                price: 151.0,
                volume: 950_000,
            },
        ],
    })
}
