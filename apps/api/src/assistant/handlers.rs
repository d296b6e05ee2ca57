//! Axum route handlers for the Assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::chat::{generate_health_response, AssistantReply};
use crate::assistant::meal_plan::{generate_meal_plan, MealPlan, UserProfile};
use crate::assistant::persona::Persona;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    /// Free-form key; unknown values fall back to the general persona.
    pub persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    pub meal_plan: Option<MealPlan>,
}

/// POST /api/v1/assistant/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<AssistantReply>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let persona = request
        .persona
        .as_deref()
        .map(Persona::from_key)
        .unwrap_or_default();

    let reply = generate_health_response(&state.llm, &request.prompt, persona).await;
    Ok(Json(reply))
}

/// POST /api/v1/assistant/meal-plan
///
/// Always 200: `meal_plan` is null when no well-formed plan could be produced.
pub async fn handle_meal_plan(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<MealPlanResponse> {
    let meal_plan = generate_meal_plan(&state.llm, &profile).await;
    Json(MealPlanResponse { meal_plan })
}
