//! HTTP routes.

mod analyze;
mod cache;
mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the service router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/cache/stats", get(cache::stats))
        .route("/analyze", post(analyze::analyze))
}
