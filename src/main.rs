mod app;
mod catalog;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::external::hedge_fund::HedgeFundClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(logging::LoggingConfig::from_env())?;

    let catalog = Arc::new(catalog::Catalog::from_env()?);
    tracing::info!(
        "📚 Catalog loaded: {} models, {} analysts",
        catalog.models().len(),
        catalog.analysts().len()
    );

    let engine = Arc::new(HedgeFundClient::from_env());
    tracing::info!("🧠 Analysis engine at {}", engine.base_url());

    let state = AppState { catalog, engine };
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Hedge fund API running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
