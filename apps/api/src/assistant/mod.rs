// Assistant: persona-shaped health chat and structured meal planning.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod chat;
pub mod handlers;
pub mod meal_plan;
pub mod persona;
pub mod prompts;
