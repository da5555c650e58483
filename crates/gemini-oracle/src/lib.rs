//! Gemini-backed oracle implementation.
//!
//! Implements the `Oracle` trait against the Gemini REST API. The reply
//! text is returned as-is; callers are expected to run it through the
//! tolerant parser in `analysis-core` before trusting it.

mod api_types;
mod config;
mod oracle;

pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use oracle::GeminiOracle;

// Re-export core types for convenience
pub use analysis_core::{Oracle, OracleError};
