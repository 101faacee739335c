pub mod analysis_engine;
pub mod hedge_fund;
