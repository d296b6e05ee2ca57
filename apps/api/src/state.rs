use crate::articles::fetcher::NewsClient;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both clients are cheap `Clone` wrappers over a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct AppState {
    pub news: NewsClient,
    pub llm: LlmClient,
}
