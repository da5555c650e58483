//! Error types for oracle and file-source operations.

use thiserror::Error;

/// Errors that can occur while calling a text-generation oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle is misconfigured (missing key, bad URL).
    #[error("oracle configuration error: {0}")]
    Configuration(String),

    /// A network-level failure while reaching the oracle.
    #[error("oracle network error: {0}")]
    Network(String),

    /// The oracle rejected or failed the request.
    #[error("oracle request failed: {0}")]
    RequestFailed(String),
}

/// Errors raised by file sources and sessions.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source is misconfigured (missing credentials).
    #[error("source configuration error: {0}")]
    Configuration(String),

    /// Token acquisition failed. Fatal for the whole request.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The file does not exist, even after the search fallback.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The file exists but could not be downloaded.
    #[error("download failed: {0}")]
    Download(String),
}
