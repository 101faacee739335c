use chrono::{Duration, NaiveDate};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::catalog::{Catalog, ModelProvider};
use crate::errors::AppError;
use crate::external::analysis_engine::EngineRequest;
use crate::models::{AnalyzeRequest, NormalizedRequest, Portfolio};
use crate::state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How far back the analysis window reaches when the client omits
/// `start_date`.
const DEFAULT_LOOKBACK_DAYS: i64 = 90;

/// Turns a raw client request into the fully-specified form the engine
/// requires, or reports the first missing required field.
///
/// Dates are filled relative to `today` when absent; supplied date strings
/// pass through unchecked, format and ordering included. An unrecognized
/// model name resolves to the OpenAI provider rather than failing here;
/// only the engine itself may reject it downstream.
pub fn normalize(
    raw: AnalyzeRequest,
    catalog: &Catalog,
    today: NaiveDate,
) -> Result<NormalizedRequest, AppError> {
    let tickers = match raw.tickers {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::MissingField("tickers")),
    };
    let model_name = match raw.model_name {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::MissingField("model_name")),
    };
    let selected_analysts = match raw.selected_analysts {
        Some(a) if !a.is_empty() => a,
        _ => return Err(AppError::MissingField("selected_analysts")),
    };

    let end_date = raw
        .end_date
        .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
    let start_date = raw.start_date.unwrap_or_else(|| {
        (today - Duration::days(DEFAULT_LOOKBACK_DAYS))
            .format(DATE_FORMAT)
            .to_string()
    });

    let model_provider = catalog
        .find_model_provider(&model_name)
        .unwrap_or(ModelProvider::OpenAi);

    Ok(NormalizedRequest {
        tickers,
        model_name,
        selected_analysts,
        start_date,
        end_date,
        show_reasoning: raw.show_reasoning.unwrap_or(false),
        model_provider,
    })
}

/// Full analyze flow: normalize, build the starting portfolio, hand off to
/// the engine, return its JSON verbatim.
pub async fn run_analysis(state: &AppState, raw: AnalyzeRequest) -> Result<Value, AppError> {
    let normalized = normalize(raw, &state.catalog, chrono::Local::now().date_naive())?;
    let portfolio = Portfolio::initial(&normalized.tickers);

    let run_id = Uuid::new_v4();
    info!(
        "run {}: analyzing {:?} with {} ({}) over {}..{}",
        run_id,
        normalized.tickers,
        normalized.model_name,
        normalized.model_provider.as_str(),
        normalized.start_date,
        normalized.end_date,
    );

    let NormalizedRequest {
        tickers,
        model_name,
        selected_analysts,
        start_date,
        end_date,
        show_reasoning,
        model_provider,
    } = normalized;

    let result = state
        .engine
        .run(EngineRequest {
            tickers,
            start_date,
            end_date,
            portfolio,
            show_reasoning,
            selected_analysts,
            model_name,
            model_provider,
        })
        .await
        .map_err(|e| {
            error!("run {}: engine failed: {}", run_id, e);
            AppError::from(e)
        })?;

    info!("run {}: engine finished", run_id);
    Ok(result)
}
