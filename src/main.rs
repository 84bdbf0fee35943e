// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::{debug_requested, default_log_level, load_dashboard_config};
use crate::infrastructure::default_dataset::load_default_dataset;
use crate::infrastructure::memory_store::InMemoryDatasetStore;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_dashboard_config()?;
    let debug_mode = debug_requested(&config, std::env::args());

    // Initialize tracing; RUST_LOG wins over the debug switch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(debug_mode))),
        )
        .init();

    // Seed the store with the bundled dataset
    let dataset = load_default_dataset(&config.data.default_dataset)?;
    let repository = Arc::new(InMemoryDatasetStore::new(dataset));

    // Create application state (services share the store)
    let state = Arc::new(AppState::new(repository));

    let router = build_router(state, config.server.max_upload_bytes);

    // Start server
    let addr: SocketAddr = config.server.bind_address().parse()?;
    tracing::info!("Starting sales dashboard on http://{} (debug: {})", addr, debug_mode);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
