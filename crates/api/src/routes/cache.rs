//! Cache statistics endpoint.

use analysis::CacheStats;
use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// Report cache occupancy.
pub async fn stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}
