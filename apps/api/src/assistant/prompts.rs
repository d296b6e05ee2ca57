// All LLM prompt templates for the Assistant module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::assistant::meal_plan::UserProfile;
use crate::assistant::persona::Persona;
use crate::llm_client::prompts::{critical_rules, render_template, JSON_ONLY_INSTRUCTION};

/// Health chat prompt template.
/// Replace: {persona_instruction}, {critical_rules}, {prompt}
pub const HEALTH_PROMPT_TEMPLATE: &str = r#"{persona_instruction}

{critical_rules}

User Query: {prompt}"#;

/// Meal plan prompt template.
/// Replace: {age}, {gender}, {weight}, {height}, {goal}, {diet}, {json_only}
pub const MEAL_PLAN_PROMPT_TEMPLATE: &str = r#"Generate a 7-day meal plan for a {age} year old {gender}, {weight}kg, {height}cm.
Goal: {goal}. Diet: {diet}.

{json_only}
{
    "kcal": 2000,
    "week": [
        {
            "day": "Mon",
            "meals": [
                {"name": "Breakfast", "menu": "Food item"},
                {"name": "Lunch", "menu": "Food item"},
                {"name": "Snack", "menu": "Food item"},
                {"name": "Dinner", "menu": "Food item"}
            ]
        }
    ]
}

The "week" array MUST contain exactly 7 days (Mon through Sun) and every day MUST contain exactly these 4 meals in this order: Breakfast, Lunch, Snack, Dinner."#;

/// Builds the full health chat prompt. The user's prompt is embedded verbatim.
pub fn build_health_prompt(persona: Persona, prompt: &str) -> String {
    let rules = critical_rules();
    render_template(
        HEALTH_PROMPT_TEMPLATE,
        &[
            ("persona_instruction", persona.instruction()),
            ("critical_rules", rules.as_str()),
            ("prompt", prompt),
        ],
    )
}

/// Builds the meal plan prompt. Profile values are passed through unvalidated.
pub fn build_meal_plan_prompt(profile: &UserProfile) -> String {
    let age = profile.age.to_string();
    let weight = profile.weight.to_string();
    let height = profile.height.to_string();
    render_template(
        MEAL_PLAN_PROMPT_TEMPLATE,
        &[
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("age", age.as_str()),
            ("weight", weight.as_str()),
            ("height", height.as_str()),
            ("gender", profile.gender.as_str()),
            ("goal", profile.goal.as_str()),
            ("diet", profile.diet.as_str()),
        ],
    )
}
