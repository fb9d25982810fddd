use crate::config::Settings;
use crate::errors::StoicResult;
use crate::message::format_message;
use crate::providers::configs::GithubModelsConfig;
use crate::providers::github_models::GithubModelsProvider;
use crate::quotes::QuoteClient;
use crate::reflection::generate_reflection;
use crate::webhook::WebhookClient;

/// Run the pipeline once: fetch a quote, generate a reflection, format the
/// message, deliver it to every configured webhook in order. The first
/// failing stage aborts the run, including the remaining deliveries.
pub async fn run(settings: &Settings) -> StoicResult<()> {
    println!("Fetching Stoic quote...");
    let quote = QuoteClient::new(&settings.quote_url)?.fetch().await?;
    println!("Quote received: \"{}\" — {}", quote.text, quote.author);

    println!("Generating modern reflection...");
    let provider = GithubModelsProvider::new(GithubModelsConfig {
        url: settings.models_url.clone(),
        token: settings.models_token.clone(),
        model: settings.model.clone(),
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    })?;
    let (reflection, usage) = generate_reflection(&provider, &quote).await?;
    println!("Reflection generated ({} words)", reflection.word_count());
    if let Some(total_tokens) = usage.total_tokens {
        println!("Tokens used: {total_tokens}");
    }

    let message = format_message(&quote, &reflection);

    println!(
        "\nPosting to {} Discord webhook(s)...",
        settings.webhooks.len()
    );
    let publisher = WebhookClient::new()?;
    for url in &settings.webhooks {
        publisher.publish(url, &message).await?;
        println!("Posted to Discord webhook: {}...", truncate(url, 50));
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_limit() {
        assert_eq!(truncate("https://x", 50), "https://x");
    }

    #[test]
    fn test_truncate_caps_length() {
        let url = "a".repeat(80);
        assert_eq!(truncate(&url, 50).len(), 50);
    }
}
