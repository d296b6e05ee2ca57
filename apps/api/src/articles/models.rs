use serde::{Deserialize, Serialize};

pub const LIVE_ATTRIBUTION: &str = "Powered by NewsData.io";
pub const FALLBACK_ATTRIBUTION: &str = "Curated Wellness Resources";
pub const FALLBACK_NOTICE: &str = "Displaying curated resources. (Live news feed unavailable).";

/// A normalized article. `id` is unique within one feed only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub source: Option<String>,
    pub image: Option<String>,
}

/// A homogeneous set of articles: either all live or all fallback.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleFeed {
    pub articles: Vec<Article>,
    pub using_fallback: bool,
    pub attribution: &'static str,
    pub notice: Option<&'static str>,
    /// Why the live fetch failed. Diagnostic only, never serialized.
    #[serde(skip)]
    pub fallback_reason: Option<String>,
}

impl ArticleFeed {
    pub fn live(articles: Vec<Article>) -> Self {
        Self {
            articles,
            using_fallback: false,
            attribution: LIVE_ATTRIBUTION,
            notice: None,
            fallback_reason: None,
        }
    }

    pub fn fallback(articles: Vec<Article>, reason: String) -> Self {
        Self {
            articles,
            using_fallback: true,
            attribution: FALLBACK_ATTRIBUTION,
            notice: Some(FALLBACK_NOTICE),
            fallback_reason: Some(reason),
        }
    }
}

/// Raw NewsData.io response envelope.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub status: String,
    pub results: Option<Vec<NewsItem>>,
}

/// A single NewsData.io result. Every field may be null upstream.
#[derive(Debug, Deserialize)]
pub struct NewsItem {
    pub title: Option<String>,
    pub source_id: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}
