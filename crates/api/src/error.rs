//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors surfaced to HTTP callers.
///
/// Per-file failures never reach this type; they travel inside the
/// report's `failed_files` list. Only configuration and authentication
/// problems abort a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required configuration is missing.
    #[error("Server configuration error: Missing environment variables.")]
    Configuration,

    /// The pipeline failed before any file was touched.
    #[error("Analysis failed: {0}")]
    Analysis(#[from] analysis::AnalysisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!("request failed: {}", message);

        let body = serde_json::json!({
            "error": message
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
