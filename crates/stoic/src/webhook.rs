use reqwest::Client;
use std::time::Duration;

use crate::errors::{StoicError, StoicResult};
use crate::message::OutboundMessage;

/// Client for delivering the formatted message to Discord webhooks.
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    pub fn new() -> StoicResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client })
    }

    /// Deliver the message to one destination. The caller decides what a
    /// failure means for the remaining destinations.
    pub async fn publish(&self, url: &str, message: &OutboundMessage) -> StoicResult<()> {
        let response = self.client.post(url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoicError::Publish {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
