use std::sync::Arc;

use crate::catalog::Catalog;
use crate::external::analysis_engine::AnalysisEngine;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: Arc<dyn AnalysisEngine>,
}
