use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::{StoicError, StoicResult};

/// A quotation and its attribution, exactly as returned by the quote
/// service.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Client for the Stoic quote service.
pub struct QuoteClient {
    client: Client,
    url: String,
}

impl QuoteClient {
    pub fn new(url: impl Into<String>) -> StoicResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch a single quote. No retries.
    pub async fn fetch(&self) -> StoicResult<Quote> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoicError::Fetch {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let data: Value = response.json().await?;
        extract_quote(&data)
    }
}

/// The service nests the pair under a `data` object:
/// `{"data": {"quote": "...", "author": "..."}}`.
fn extract_quote(data: &Value) -> StoicResult<Quote> {
    let text = data
        .get("data")
        .and_then(|d| d.get("quote"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            StoicError::MalformedResponse("missing data.quote in quote response".to_string())
        })?;

    let author = data
        .get("data")
        .and_then(|d| d.get("author"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            StoicError::MalformedResponse("missing data.author in quote response".to_string())
        })?;

    Ok(Quote {
        text: text.to_string(),
        author: author.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup_mock_server(response: ResponseTemplate) -> (MockServer, QuoteClient) {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stoic-quote"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let client = QuoteClient::new(format!("{}/stoic-quote", mock_server.uri())).unwrap();
        (mock_server, client)
    }

    #[tokio::test]
    async fn test_fetch_returns_fields_untransformed() {
        let body = json!({
            "data": {
                "quote": "We suffer more often in imagination than in reality.",
                "author": "Seneca"
            }
        });
        let (_server, client) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let quote = client.fetch().await.unwrap();
        assert_eq!(
            quote.text,
            "We suffer more often in imagination than in reality."
        );
        assert_eq!(quote.author, "Seneca");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let (_server, client) = setup_mock_server(ResponseTemplate::new(503)).await;

        let err = client.fetch().await.unwrap_err();
        match err {
            StoicError::Fetch {
                status,
                status_text,
            } => {
                assert_eq!(status, 503);
                assert_eq!(status_text, "Service Unavailable");
            }
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_quote_field() {
        let body = json!({ "data": { "author": "Seneca" } });
        let (_server, client) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, StoicError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_missing_author_field() {
        let body = json!({ "data": { "quote": "Q" } });
        let (_server, client) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, StoicError::MalformedResponse(_)));
    }
}
