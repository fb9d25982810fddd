use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use super::base::{CompletionProvider, Usage};
use super::configs::GithubModelsConfig;
use crate::errors::{StoicError, StoicResult};

/// Chat-completions client for GitHub Models (OpenAI-compatible schema).
pub struct GithubModelsProvider {
    client: Client,
    config: GithubModelsConfig,
}

impl GithubModelsProvider {
    pub fn new(config: GithubModelsConfig) -> StoicResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self { client, config })
    }

    /// A response without a usage object yields empty counts rather than
    /// an error; token counts never fail the run.
    fn get_usage(data: &Value) -> Usage {
        let Some(usage) = data.get("usage") else {
            return Usage::default();
        };

        let input_tokens = usage
            .get("prompt_tokens")
            .and_then(|v| v.as_i64())
            .map(|v| v as i32);

        let output_tokens = usage
            .get("completion_tokens")
            .and_then(|v| v.as_i64())
            .map(|v| v as i32);

        let total_tokens = usage
            .get("total_tokens")
            .and_then(|v| v.as_i64())
            .map(|v| v as i32)
            .or_else(|| match (input_tokens, output_tokens) {
                (Some(input), Some(output)) => Some(input + output),
                _ => None,
            });

        Usage::new(input_tokens, output_tokens, total_tokens)
    }

    async fn post(&self, payload: Value) -> StoicResult<Value> {
        let response = self
            .client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoicError::Generation {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CompletionProvider for GithubModelsProvider {
    async fn complete(&self, prompt: &str) -> StoicResult<(String, Usage)> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature
        });

        let response = self.post(payload).await?;

        let content = response
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                StoicError::MalformedResponse(
                    "missing choices[0].message.content in completion response".to_string(),
                )
            })?;

        let usage = Self::get_usage(&response);

        Ok((content.to_string(), usage))
    }
}
