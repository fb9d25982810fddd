use std::env;

use crate::errors::{StoicError, StoicResult};

/// Word budget the reflection prompt asks the model to stay near.
pub const MAX_REFLECTION_WORDS: usize = 120;

/// Runtime configuration for one bot run.
///
/// Endpoints and the model name can be overridden through the environment;
/// the sampling knobs are fixed.
#[derive(Debug, Clone)]
pub struct Settings {
    pub quote_url: String,
    pub models_url: String,
    pub model: String,
    pub models_token: String,
    pub webhooks: Vec<String>,
    pub temperature: f32,
    pub max_tokens: i32,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// Both required variables are validated here, before any network
    /// activity happens anywhere in the pipeline.
    pub fn from_env() -> StoicResult<Self> {
        let models_token = env::var("MODELS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                StoicError::Config("MODELS_TOKEN environment variable is not set".to_string())
            })?;

        let webhooks_raw = env::var("DISCORD_WEBHOOKS").map_err(|_| {
            StoicError::Config("DISCORD_WEBHOOKS environment variable is not set".to_string())
        })?;
        let webhooks = parse_webhooks(&webhooks_raw)?;

        Ok(Self {
            quote_url: env::var("STOIC_QUOTE_URL").unwrap_or_else(|_| default_quote_url()),
            models_url: env::var("STOIC_MODELS_URL").unwrap_or_else(|_| default_models_url()),
            model: env::var("STOIC_MODEL").unwrap_or_else(|_| default_model()),
            models_token,
            webhooks,
            temperature: 0.8,
            max_tokens: 250,
        })
    }
}

/// Split a comma-separated webhook list, dropping surrounding whitespace and
/// empty entries. Order is preserved.
pub fn parse_webhooks(raw: &str) -> StoicResult<Vec<String>> {
    let webhooks: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if webhooks.is_empty() {
        return Err(StoicError::Config(
            "No Discord webhooks configured".to_string(),
        ));
    }

    Ok(webhooks)
}

fn default_quote_url() -> String {
    "https://stoic.tekloon.net/stoic-quote".to_string()
}

fn default_models_url() -> String {
    "https://models.inference.ai.azure.com/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
