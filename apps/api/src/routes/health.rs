use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus which upstreams have credentials configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "wellness-api",
        "upstreams": {
            "news": state.news.is_configured(),
            "assistant": state.llm.is_configured()
        }
    }))
}
