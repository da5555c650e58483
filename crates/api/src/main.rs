//! Competitor analysis HTTP service.
//!
//! Extracts company names from spreadsheets referenced in an assistant
//! transcript and classifies them against a target company.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use analysis::{AnalysisCache, Analyzer};
use gemini_oracle::GeminiOracle;
use graph_drive::{GraphDrive, GraphDriveConfig};
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting competitor analysis server");

    // The cache lives for the whole process and is shared across requests
    let cache = Arc::new(AnalysisCache::default());

    // Missing credentials do not stop the server; /analyze reports them
    // as a server configuration error instead
    let analyzer = build_analyzer(Arc::clone(&cache));
    if analyzer.is_none() {
        warn!("collaborators not configured; /analyze will return configuration errors");
    }

    // Build application state and router
    let state = AppState { analyzer, cache };
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Competitor analysis server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wire the pipeline from environment credentials, if they are all set.
fn build_analyzer(cache: Arc<AnalysisCache>) -> Option<Arc<Analyzer>> {
    let oracle = match GeminiOracle::from_env() {
        Ok(oracle) => oracle,
        Err(e) => {
            warn!(error = %e, "extraction oracle not configured");
            return None;
        }
    };

    let drive_config = match GraphDriveConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "graph drive not configured");
            return None;
        }
    };

    let drive = match GraphDrive::new(drive_config) {
        Ok(drive) => drive,
        Err(e) => {
            warn!(error = %e, "graph drive client failed to initialize");
            return None;
        }
    };

    Some(Arc::new(Analyzer::new(
        Arc::new(oracle),
        Arc::new(drive),
        cache,
    )))
}
