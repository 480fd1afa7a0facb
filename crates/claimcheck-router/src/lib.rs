//! Claimcheck Router
//!
//! HTTP front end for the claim classifier. Loads both datasets at startup,
//! then serves analysis, history and statistics over JSON.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use claimcheck_analyzer::{Analyzer, AnalyzerError};
use config::RouterConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Analyzer could not be built
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state for a configuration
///
/// Missing dataset files leave that tier empty rather than failing.
pub fn build_state(config: &RouterConfig) -> Result<AppState, RouterError> {
    let analyzer = Analyzer::from_config(&config.datasets)?;

    Ok(AppState::new(Arc::new(analyzer), config.recent_results_limit))
}

/// Start the Router HTTP server
///
/// Loads the datasets, builds the analyzer and serves until the process
/// exits. Tracing must already be initialised by the caller.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    info!("Starting Claimcheck Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Corpus feed: {}", config.datasets.corpus_path.display());
    info!("Known facts feed: {}", config.datasets.known_facts_path.display());

    let state = build_state(&config)?;
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
