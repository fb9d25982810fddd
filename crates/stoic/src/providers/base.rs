use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::StoicResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// Base trait for chat-completion backends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for a single user turn. No conversation
    /// history is carried between calls.
    async fn complete(&self, prompt: &str) -> StoicResult<(String, Usage)>;
}
