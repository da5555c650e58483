//! The Oracle trait definition.

use async_trait::async_trait;

use crate::error::OracleError;

/// A text-generation capability.
///
/// The pipeline treats the model behind this trait as an opaque, possibly
/// malformed generator: every reply goes through [`crate::extract_json`]
/// before anything trusts it.
///
/// This trait is object-safe and can be used with `Arc<dyn Oracle>`.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Generate a reply for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;

    /// Get a human-readable name for this oracle implementation.
    fn name(&self) -> &str;
}
