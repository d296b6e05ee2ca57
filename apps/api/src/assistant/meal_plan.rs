//! Meal planning — asks the model for a 7-day plan as JSON and parses it.
//!
//! The reply is accepted whole or not at all: a parse failure or a plan with
//! the wrong shape discards the response rather than salvaging fields.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assistant::prompts::build_meal_plan_prompt;
use crate::llm_client::{LlmClient, LlmError};

pub const DAYS_PER_WEEK: usize = 7;
pub const MEALS_PER_DAY: usize = 4;

/// Input profile. Values are forwarded into the prompt as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: f64,
    pub gender: String,
    /// kg
    pub weight: f64,
    /// cm
    pub height: f64,
    pub goal: String,
    pub diet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub menu: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub kcal: f64,
    pub week: Vec<DayPlan>,
}

impl MealPlan {
    /// True when the plan has 7 days of exactly 4 meals each.
    pub fn is_well_formed(&self) -> bool {
        self.week.len() == DAYS_PER_WEEK
            && self.week.iter().all(|d| d.meals.len() == MEALS_PER_DAY)
    }
}

/// Requests a weekly meal plan for `profile`.
///
/// Returns `None` when the client is unconfigured, the call fails, or the
/// reply is not a well-formed plan. The cause is logged, never returned.
pub async fn generate_meal_plan(llm: &LlmClient, profile: &UserProfile) -> Option<MealPlan> {
    let prompt = build_meal_plan_prompt(profile);

    let plan = match llm.call_json::<MealPlan>(&prompt).await {
        Ok(plan) => plan,
        Err(LlmError::Unconfigured) => {
            warn!("Meal plan skipped: Gemini API key is not configured");
            return None;
        }
        Err(e) => {
            warn!("Meal plan generation failed: {e}");
            return None;
        }
    };

    if !plan.is_well_formed() {
        warn!(
            "Meal plan rejected: expected {DAYS_PER_WEEK} days of {MEALS_PER_DAY} meals, got {} days",
            plan.week.len()
        );
        return None;
    }

    info!("Meal plan generated: {} kcal/day", plan.kcal);
    Some(plan)
}
