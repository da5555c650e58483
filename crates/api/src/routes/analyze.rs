//! The analysis endpoint.

use analysis::AnalysisReport;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub copilot_response: String,
    pub target_company: String,
}

/// Run the extraction-and-classification pipeline for one transcript.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let analyzer = state.analyzer.as_ref().ok_or(ApiError::Configuration)?;

    info!(target = %request.target_company, "analysis requested");
    let report = analyzer
        .analyze(&request.copilot_response, &request.target_company)
        .await?;

    Ok(Json(report))
}
