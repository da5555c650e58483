//! Error types for the analysis pipeline.

use analysis_core::SourceError;
use thiserror::Error;

/// Fatal pipeline errors.
///
/// Per-file problems never surface here; they are recorded in the
/// report's failure list instead. The only way a request dies is the
/// file source refusing to open (configuration or token acquisition).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Opening the file source failed; no file was touched.
    #[error("file source unavailable: {0}")]
    Source(#[from] SourceError),
}
