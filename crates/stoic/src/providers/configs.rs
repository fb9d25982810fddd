/// Connection and sampling parameters for the GitHub Models
/// chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct GithubModelsConfig {
    pub url: String,
    pub token: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: i32,
}
