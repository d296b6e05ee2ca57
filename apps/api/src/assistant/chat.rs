//! Health chat — persona instruction + safety rules + the user's query.
//!
//! Rule compliance (disclaimer, emergency protocol) is left to the model;
//! the reply text is returned unverified.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::assistant::persona::Persona;
use crate::assistant::prompts::build_health_prompt;
use crate::llm_client::{LlmClient, LlmError};

pub const UNCONFIGURED_REPLY: &str = "I'm sorry, but I can't connect to my AI brain right now. \
    Please check if the API Key is configured.";

pub const FAILURE_REPLY: &str = "I'm having trouble thinking right now. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
    pub is_error: bool,
}

impl AssistantReply {
    fn ok(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: true,
        }
    }
}

/// Sends `prompt` to the model under `persona`. Never fails: every error is
/// converted into an apologetic reply with `is_error = true`.
pub async fn generate_health_response(
    llm: &LlmClient,
    prompt: &str,
    persona: Persona,
) -> AssistantReply {
    let full_prompt = build_health_prompt(persona, prompt);

    match llm.call_text(&full_prompt).await {
        Ok(text) => {
            info!("Health response generated (persona={})", persona.key());
            AssistantReply::ok(text)
        }
        Err(LlmError::Unconfigured) => {
            warn!("Health chat unavailable: Gemini API key is not configured");
            AssistantReply::error(UNCONFIGURED_REPLY)
        }
        Err(e) => {
            error!("Gemini API error: {e}");
            AssistantReply::error(FAILURE_REPLY)
        }
    }
}
