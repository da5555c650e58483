//! Core traits and types for the competitor analysis pipeline.
//!
//! This crate provides the shared seams between the pipeline and its
//! collaborators:
//!
//! - [`Oracle`] - the text-generation capability both the extraction and
//!   classification stages call
//! - [`FileSource`] / [`FileSession`] - authenticated document download
//! - [`extract_json`] - the tolerant parser applied to every oracle reply
//! - [`OracleError`] / [`SourceError`] / [`ParseFailure`] - error types
//!
//! # Example
//!
//! ```rust
//! use analysis_core::{async_trait, Oracle, OracleError};
//!
//! struct FixedOracle;
//!
//! #[async_trait]
//! impl Oracle for FixedOracle {
//!     async fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
//!         Ok(r#"{"companies": []}"#.to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FixedOracle"
//!     }
//! }
//! ```

mod error;
mod oracle;
mod parse;
mod source;

pub use error::{OracleError, SourceError};
pub use oracle::Oracle;
pub use parse::{extract_json, ParseFailure};
pub use source::{FileSession, FileSource};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
