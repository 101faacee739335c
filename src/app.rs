use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{analysis, catalog, health, stocks};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let api = analysis::router()
        .merge(catalog::router())
        .merge(stocks::router())
        .merge(health::router());

    Router::<AppState>::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        // The React and Vue frontends are served from other origins
        .layer(CorsLayer::permissive())
        .with_state(state)
}
