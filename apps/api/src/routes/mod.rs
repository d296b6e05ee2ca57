pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::articles::handlers as articles;
use crate::assistant::handlers as assistant;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/articles", get(articles::handle_get_articles))
        .route("/api/v1/assistant/chat", post(assistant::handle_chat))
        .route(
            "/api/v1/assistant/meal-plan",
            post(assistant::handle_meal_plan),
        )
        .fallback(not_found)
        .with_state(state)
}
