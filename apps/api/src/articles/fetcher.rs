//! News fetcher — queries NewsData.io and degrades to the curated set.
//!
//! `fetch_articles` cannot fail observably: any error is logged, recorded on
//! the feed as a diagnostic, and replaced with the fallback articles. Use
//! `try_fetch` to see the typed cause. No caching, no retries.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::articles::category::query_for;
use crate::articles::fallback::fallback_articles;
use crate::articles::models::{Article, ArticleFeed, NewsItem, NewsResponse};
use crate::config::Config;

/// Only the first results of a response become articles.
pub const MAX_ARTICLES: usize = 6;
/// Descriptions longer than this many characters are truncated.
pub const SUMMARY_MAX_CHARS: usize = 150;
pub const SUMMARY_ELLIPSIS: &str = "...";
pub const SUMMARY_PLACEHOLDER: &str = "Click to read the full article.";
pub const DEFAULT_AUTHOR: &str = "News Source";

const NEWS_PATH: &str = "/api/1/news";
const LANGUAGE: &str = "en";
const CATEGORY: &str = "health";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("NewsData API key is not configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News API returned HTTP {0}")]
    Status(u16),

    #[error("News API returned unsuccessful status '{0}'")]
    Unsuccessful(String),

    #[error("News API response has no results collection")]
    MissingResults,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl NewsClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.newsdata_api_key.clone(),
            config.newsdata_api_url.clone(),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches articles for `filter`, substituting the curated set on any failure.
    pub async fn fetch_articles(&self, filter: &str) -> ArticleFeed {
        match self.try_fetch(filter).await {
            Ok(articles) => {
                info!(
                    "Fetched {} live articles for filter '{filter}'",
                    articles.len()
                );
                ArticleFeed::live(articles)
            }
            Err(e) => {
                warn!("News API failed for filter '{filter}', using fallback data: {e}");
                ArticleFeed::fallback(fallback_articles(), e.to_string())
            }
        }
    }

    /// Performs the live fetch, surfacing the failure cause.
    pub async fn try_fetch(&self, filter: &str) -> Result<Vec<Article>, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::Unconfigured)?;
        let query = query_for(filter);
        debug!("Querying news API: q='{query}'");

        let url = format!("{}{}", self.base_url.trim_end_matches('/'), NEWS_PATH);
        // without_url keeps the api key out of error messages and logs.
        let response = self
            .client
            .get(url)
            .query(&[
                ("apikey", api_key),
                ("q", query),
                ("language", LANGUAGE),
                ("category", CATEGORY),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;
        let parsed: NewsResponse = serde_json::from_str(&body)?;

        if parsed.status != "success" {
            return Err(FetchError::Unsuccessful(parsed.status));
        }

        let results = parsed.results.ok_or(FetchError::MissingResults)?;

        Ok(results
            .into_iter()
            .take(MAX_ARTICLES)
            .enumerate()
            .map(|(index, item)| to_article(index as u32, item))
            .collect())
    }
}

fn to_article(id: u32, item: NewsItem) -> Article {
    Article {
        id,
        title: item.title.unwrap_or_default(),
        author: non_empty(item.source_id).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        summary: summarize(item.description.as_deref()),
        source: item.link,
        image: item.image_url,
    }
}

/// Truncates a description to `SUMMARY_MAX_CHARS` characters plus an ellipsis,
/// or returns the placeholder when there is nothing to show.
pub fn summarize(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => {
            if text.chars().count() > SUMMARY_MAX_CHARS {
                let head: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
                format!("{head}{SUMMARY_ELLIPSIS}")
            } else {
                text.to_string()
            }
        }
        _ => SUMMARY_PLACEHOLDER.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NewsClient {
        NewsClient::new(Some("test-news-key".to_string()), server.uri())
    }

    async fn mock_news(body: Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(NEWS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn result(n: usize) -> Value {
        json!({
            "title": format!("Title {n}"),
            "source_id": format!("source{n}"),
            "description": format!("Description {n}"),
            "link": format!("https://news.example/{n}"),
            "image_url": format!("https://img.example/{n}.jpg")
        })
    }

    #[test]
    fn test_summarize_short_text_unchanged() {
        assert_eq!(summarize(Some("short")), "short");
    }

    #[test]
    fn test_summarize_exactly_limit_unchanged() {
        let text = "a".repeat(SUMMARY_MAX_CHARS);
        assert_eq!(summarize(Some(&text)), text);
    }

    #[test]
    fn test_summarize_long_text_truncated_with_ellipsis() {
        let text = "b".repeat(SUMMARY_MAX_CHARS + 1);
        let summary = summarize(Some(&text));
        assert_eq!(summary, format!("{}...", "b".repeat(SUMMARY_MAX_CHARS)));
    }

    #[test]
    fn test_summarize_counts_characters_not_bytes() {
        let text = "é".repeat(SUMMARY_MAX_CHARS + 10);
        let summary = summarize(Some(&text));
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + SUMMARY_ELLIPSIS.len());
    }

    #[test]
    fn test_summarize_missing_or_empty_uses_placeholder() {
        assert_eq!(summarize(None), SUMMARY_PLACEHOLDER);
        assert_eq!(summarize(Some("")), SUMMARY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_sleep_filter_single_short_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(NEWS_PATH))
            .and(query_param("q", "sleep health"))
            .and(query_param("language", "en"))
            .and(query_param("category", "health"))
            .and(query_param("apikey", "test-news-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "results": [{ "title": "T", "description": "short" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let feed = client_for(&server).fetch_articles("sleep").await;

        assert!(!feed.using_fallback);
        assert_eq!(
            feed.articles,
            vec![Article {
                id: 0,
                title: "T".to_string(),
                author: DEFAULT_AUTHOR.to_string(),
                summary: "short".to_string(),
                source: None,
                image: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_results_capped_at_six_and_mapped() {
        let results: Vec<Value> = (0..10).map(result).collect();
        let server = mock_news(json!({ "status": "success", "results": results })).await;

        let feed = client_for(&server).fetch_articles("anxiety").await;

        assert!(!feed.using_fallback);
        assert_eq!(feed.articles.len(), MAX_ARTICLES);
        let third = &feed.articles[2];
        assert_eq!(third.id, 2);
        assert_eq!(third.title, "Title 2");
        assert_eq!(third.author, "source2");
        assert_eq!(third.source.as_deref(), Some("https://news.example/2"));
        assert_eq!(third.image.as_deref(), Some("https://img.example/2.jpg"));
    }

    #[tokio::test]
    async fn test_long_description_truncated_in_feed() {
        let long = "x".repeat(400);
        let server = mock_news(json!({
            "status": "success",
            "results": [{ "title": "Long", "description": long }]
        }))
        .await;

        let feed = client_for(&server).fetch_articles("stress").await;
        assert_eq!(
            feed.articles[0].summary,
            format!("{}...", "x".repeat(SUMMARY_MAX_CHARS))
        );
    }

    #[tokio::test]
    async fn test_empty_results_is_live_and_empty() {
        let server = mock_news(json!({ "status": "success", "results": [] })).await;
        let feed = client_for(&server).fetch_articles("all").await;
        assert!(!feed.using_fallback);
        assert!(feed.articles.is_empty());
        assert!(feed.fallback_reason.is_none());
    }

    #[tokio::test]
    async fn test_http_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let feed = client.fetch_articles("depression").await;
        assert!(feed.using_fallback);
        assert_eq!(feed.articles, fallback_articles());

        let err = client.try_fetch("depression").await.unwrap_err();
        assert!(matches!(err, FetchError::Status(429)));
    }

    #[tokio::test]
    async fn test_unsuccessful_status_falls_back() {
        let server = mock_news(json!({ "status": "error", "results": { "message": "bad key" } })).await;
        let client = client_for(&server);

        let feed = client.fetch_articles("all").await;
        assert!(feed.using_fallback);
        assert_eq!(feed.articles.len(), 6);

        let err = client.try_fetch("all").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_) | FetchError::Unsuccessful(_)));
    }

    #[tokio::test]
    async fn test_error_status_value_is_reported() {
        let server = mock_news(json!({ "status": "error" })).await;
        let err = client_for(&server).try_fetch("all").await.unwrap_err();
        match err {
            FetchError::Unsuccessful(status) => assert_eq!(status, "error"),
            other => panic!("expected Unsuccessful, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_results_falls_back() {
        let server = mock_news(json!({ "status": "success" })).await;
        let client = client_for(&server);

        assert!(client.fetch_articles("all").await.using_fallback);
        let err = client.try_fetch("all").await.unwrap_err();
        assert!(matches!(err, FetchError::MissingResults));
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let feed = client.fetch_articles("all").await;
        assert!(feed.using_fallback);
        assert!(feed.fallback_reason.unwrap().contains("JSON parse error"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_without_leaking_key() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let feed = client.fetch_articles("all").await;
        assert!(feed.using_fallback);
        assert!(!feed.fallback_reason.unwrap().contains("test-news-key"));
    }

    #[tokio::test]
    async fn test_unconfigured_falls_back_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = NewsClient::new(None, server.uri());
        let feed = client.fetch_articles("sleep").await;
        assert!(feed.using_fallback);
        assert_eq!(feed.articles, fallback_articles());
        assert!(matches!(
            client.try_fetch("sleep").await.unwrap_err(),
            FetchError::Unconfigured
        ));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(NEWS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "results": [result(1)] })),
            )
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.fetch_articles("stress").await;
        client.fetch_articles("stress").await;
    }
}
