//! Canned oracle implementation - always returns the same reply.

use async_trait::async_trait;

use analysis_core::{Oracle, OracleError};

/// A simple oracle that returns a fixed reply for every prompt.
///
/// Useful for testing the pipeline without any model behind it.
#[derive(Debug, Clone, Default)]
pub struct CannedOracle {
    reply: String,
}

impl CannedOracle {
    /// Create a new CannedOracle with the given reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Oracle for CannedOracle {
    async fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "CannedOracle"
    }
}
