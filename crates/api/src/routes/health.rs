//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Status {
    pub status: String,
    pub service: String,
}

/// Liveness probe.
pub async fn root() -> Json<Status> {
    Json(Status {
        status: "online".to_string(),
        service: "Competitor Analysis API".to_string(),
    })
}
