use indoc::formatdoc;

use crate::config::MAX_REFLECTION_WORDS;
use crate::errors::StoicResult;
use crate::providers::base::{CompletionProvider, Usage};
use crate::quotes::Quote;

/// Model-generated commentary on a quotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflection {
    pub text: String,
}

impl Reflection {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Ask the provider for a modern reflection on the quote. The completion is
/// returned trimmed of surrounding whitespace, together with the token
/// usage so the caller can log it.
pub async fn generate_reflection(
    provider: &dyn CompletionProvider,
    quote: &Quote,
) -> StoicResult<(Reflection, Usage)> {
    let prompt = build_prompt(quote);
    let (completion, usage) = provider.complete(&prompt).await?;

    let reflection = Reflection {
        text: completion.trim().to_string(),
    };

    Ok((reflection, usage))
}

fn build_prompt(quote: &Quote) -> String {
    formatdoc! {r#"
        You are a modern Stoic philosopher. Write a brief, practical reflection on this Stoic quote:

        "{text}" — {author}

        Your reflection should:
        - Be conversational and contemporary in style
        - Offer practical wisdom for modern life
        - Connect the ancient insight to today's challenges
        - Be concise (around {words} words)
        - Avoid clichés and generic advice
        - Feel authentic, not preachy

        Write only the reflection text, no introduction or conclusion."#,
        text = quote.text,
        author = quote.author,
        words = MAX_REFLECTION_WORDS,
    }
}
