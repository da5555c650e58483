//! Scripted oracle implementation - returns queued replies in order.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use analysis_core::{Oracle, OracleError};

/// An oracle that returns a scripted sequence of replies.
///
/// Each call pops the next reply from the queue. Once the queue is
/// exhausted, further calls fail, which makes unexpected extra oracle
/// calls visible in tests.
pub struct SequenceOracle {
    replies: Mutex<VecDeque<String>>,
}

impl SequenceOracle {
    /// Create a new SequenceOracle from the given replies.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of replies still queued.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl Oracle for SequenceOracle {
    async fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
        let mut replies = self.replies.lock().await;
        replies
            .pop_front()
            .ok_or_else(|| OracleError::RequestFailed("no scripted replies left".to_string()))
    }

    fn name(&self) -> &str {
        "SequenceOracle"
    }
}
