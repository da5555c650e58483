//! Stub oracle implementations for testing the analysis pipeline.
//!
//! This crate provides mock implementations of the `Oracle` trait:
//! - `CannedOracle` - always returns the same reply
//! - `SequenceOracle` - returns scripted replies in order
//! - `FailingOracle` - always fails
//!
//! For production processing, use the `gemini-oracle` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_oracle::{CannedOracle, Oracle};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), mock_oracle::OracleError> {
//!     let oracle = CannedOracle::new(r#"{"companies": ["Acme"]}"#);
//!
//!     let reply = oracle.generate("ignored").await?;
//!     assert!(reply.contains("Acme"));
//!     Ok(())
//! }
//! ```

mod canned;
mod failing;
mod sequence;

// Re-export analysis-core types for convenience
pub use analysis_core::{async_trait, Oracle, OracleError};

// Export mock implementations
pub use canned::CannedOracle;
pub use failing::FailingOracle;
pub use sequence::SequenceOracle;
