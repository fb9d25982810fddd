use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::base::{CompletionProvider, Usage};
use crate::errors::StoicResult;

/// A mock provider that returns pre-configured completions for testing and
/// records the prompts it was asked to complete.
pub struct MockProvider {
    responses: Arc<Mutex<Vec<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of completions.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> StoicResult<(String, Usage)> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok((String::new(), Usage::default()))
        } else {
            Ok((responses.remove(0), Usage::default()))
        }
    }
}
