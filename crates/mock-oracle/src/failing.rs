//! Failing oracle implementation - every call errors.

use async_trait::async_trait;

use analysis_core::{Oracle, OracleError};

/// An oracle whose calls always fail.
///
/// Useful for testing fallback paths and failure accounting.
#[derive(Debug, Clone)]
pub struct FailingOracle {
    message: String,
}

impl FailingOracle {
    /// Create a new FailingOracle with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingOracle {
    fn default() -> Self {
        Self::new("oracle unavailable")
    }
}

#[async_trait]
impl Oracle for FailingOracle {
    async fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::RequestFailed(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingOracle"
    }
}
