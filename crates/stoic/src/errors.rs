use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StoicError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to fetch quote: {status} {status_text}")]
    Fetch { status: u16, status_text: String },

    #[error("Malformed quote response: {0}")]
    MalformedResponse(String),

    #[error("Completion API error: {status} {body}")]
    Generation { status: u16, body: String },

    #[error("Discord webhook error for {url}: {status} {body}")]
    Publish {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type StoicResult<T> = Result<T, StoicError>;
