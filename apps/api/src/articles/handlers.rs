use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::articles::models::ArticleFeed;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticlesQuery {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "all".to_string()
}

/// GET /api/v1/articles?filter=<category>
///
/// Always 200. `using_fallback` tells the caller whether the curated set was served.
pub async fn handle_get_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> Json<ArticleFeed> {
    Json(state.news.fetch_articles(&params.filter).await)
}
