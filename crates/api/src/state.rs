//! Application state shared across handlers.

use std::sync::Arc;

use analysis::{AnalysisCache, Analyzer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Fully wired pipeline, present only when every credential is
    /// configured.
    pub analyzer: Option<Arc<Analyzer>>,
    /// Result cache, always available for the stats endpoint.
    pub cache: Arc<AnalysisCache>,
}
