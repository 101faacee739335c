use std::collections::HashMap;

use serde::Serialize;

/// Starting cash for every analysis run. The engine treats the portfolio
/// as a fresh paper-trading account.
pub const INITIAL_CASH: f64 = 100_000.0;

// Per-ticker open position, long and short sides tracked separately.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PositionEntry {
    pub long: i64,
    pub short: i64,
    pub long_cost_basis: f64,
    pub short_cost_basis: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RealizedGains {
    pub long: f64,
    pub short: f64,
}

// The ledger handed to the analysis engine with each run. Built fresh per
// request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub cash: f64,
    pub margin_requirement: f64,
    pub positions: HashMap<String, PositionEntry>,
    pub realized_gains: HashMap<String, RealizedGains>,
}

impl Portfolio {
    /// Zero-filled ledger covering exactly the given tickers. Duplicate
    /// tickers collapse to a single entry.
    pub fn initial(tickers: &[String]) -> Self {
        let positions = tickers
            .iter()
            .map(|t| (t.clone(), PositionEntry::default()))
            .collect();
        let realized_gains = tickers
            .iter()
            .map(|t| (t.clone(), RealizedGains::default()))
            .collect();

        Self {
            cash: INITIAL_CASH,
            margin_requirement: 0.0,
            positions,
            realized_gains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tickers(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_portfolio_covers_all_tickers() {
        let portfolio = Portfolio::initial(&tickers(&["AAPL", "MSFT", "NVDA"]));

        assert_eq!(portfolio.cash, 100_000.0);
        assert_eq!(portfolio.margin_requirement, 0.0);
        assert_eq!(portfolio.positions.len(), 3);
        assert_eq!(portfolio.realized_gains.len(), 3);
        for symbol in ["AAPL", "MSFT", "NVDA"] {
            let position = portfolio.positions.get(symbol).unwrap();
            assert_eq!(position.long, 0);
            assert_eq!(position.short, 0);
            assert_eq!(position.long_cost_basis, 0.0);
            assert_eq!(position.short_cost_basis, 0.0);
            let gains = portfolio.realized_gains.get(symbol).unwrap();
            assert_eq!(gains.long, 0.0);
            assert_eq!(gains.short, 0.0);
        }
    }

    #[test]
    fn test_duplicate_tickers_collapse() {
        let portfolio = Portfolio::initial(&tickers(&["AAPL", "AAPL"]));

        assert_eq!(portfolio.positions.len(), 1);
        assert_eq!(portfolio.realized_gains.len(), 1);
        assert!(portfolio.positions.contains_key("AAPL"));
    }

    #[test]
    fn test_serializes_to_engine_wire_shape() {
        let portfolio = Portfolio::initial(&tickers(&["TSLA"]));
        let json = serde_json::to_value(&portfolio).unwrap();

        assert_eq!(json["cash"], 100_000.0);
        assert_eq!(json["margin_requirement"], 0.0);
        assert_eq!(json["positions"]["TSLA"]["long"], 0);
        assert_eq!(json["positions"]["TSLA"]["short_cost_basis"], 0.0);
        assert_eq!(json["realized_gains"]["TSLA"]["long"], 0.0);
    }
}
