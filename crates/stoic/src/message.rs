use serde::Serialize;

use crate::quotes::Quote;
use crate::reflection::Reflection;

/// The Discord message payload: `{"content": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMessage {
    pub content: String,
}

/// Compose the Discord message. Pure and deterministic.
pub fn format_message(quote: &Quote, reflection: &Reflection) -> OutboundMessage {
    OutboundMessage {
        content: format!(
            "**Daily Stoic**\n\"{}\" — {}\n\n{}",
            quote.text, quote.author, reflection.text
        ),
    }
}
