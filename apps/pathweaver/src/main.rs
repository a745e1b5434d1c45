mod config;
mod contracts;
mod errors;
mod gateway;
mod locale;
mod models;
mod oracle;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::Gateway;
use crate::oracle::{gemini, GeminiClient};
use crate::routes::build_router;
use crate::session::controller::Controller;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing oracle credential)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathweaver v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the oracle client
    let oracle = GeminiClient::new(config.gemini_api_key.clone(), config.oracle_timeout);
    match config.oracle_timeout {
        Some(limit) => info!(
            "Oracle client initialized (model: {}, timeout: {}s)",
            gemini::MODEL,
            limit.as_secs()
        ),
        None => info!("Oracle client initialized (model: {}, no timeout)", gemini::MODEL),
    }

    // Build the single in-memory session
    let controller = Controller::new(Gateway::new(Arc::new(oracle)));
    let state = AppState {
        controller: Arc::new(controller),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
