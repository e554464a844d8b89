//! Assembly of a complete, self-contained recommendation request.

use serde_json::Value;

use super::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use super::schema::response_schema;
use crate::constants::{GEMINI_MODEL, GENERATION_TEMPERATURE};

/// A complete request description for the generation service.
///
/// Everything the invocation boundary needs is carried here: the model and
/// sampling temperature are fixed, the schema constrains the output shape,
/// and the prompt embeds the user's diary context. The credential is NOT part
/// of the request; it is injected at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    /// Model identifier, fixed per release
    pub model: &'static str,
    /// System instruction establishing the guide persona
    pub system_instruction: &'static str,
    /// Natural-language instruction block with the user's diary context
    pub prompt: String,
    /// Schema the response must follow
    pub response_schema: Value,
    /// Sampling temperature, fixed per release
    pub temperature: f32,
}

/// Builds a recommendation request from diary state.
///
/// Purely a transformation from structured input to a structured request: no
/// side effects, and deterministic given identical inputs. The caller must
/// only invoke this with diary text that is non-empty after trimming.
///
/// # Arguments
///
/// * `diary_text` - The user's diary entry
/// * `emotions` - Selected emotion tags, possibly empty
/// * `gratitude` - Optional gratitude note
pub fn build_request(
    diary_text: &str,
    emotions: &[String],
    gratitude: Option<&str>,
) -> RecommendationRequest {
    RecommendationRequest {
        model: GEMINI_MODEL,
        system_instruction: SYSTEM_INSTRUCTION,
        prompt: build_prompt(diary_text, emotions, gratitude),
        response_schema: response_schema(),
        temperature: GENERATION_TEMPERATURE,
    }
}
