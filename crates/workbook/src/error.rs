//! Error types for workbook loading.

use thiserror::Error;

/// Errors that can occur while loading a workbook.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The byte stream is not a readable spreadsheet.
    #[error("failed to read workbook: {0}")]
    Workbook(String),

    /// CSV input could not be parsed.
    #[error("failed to read CSV: {0}")]
    Csv(String),
}
