//! Gemini HTTP client for schema-constrained content generation.
//!
//! This module provides a simple client for the `generateContent` endpoint of
//! the Gemini API. It performs exactly one request per call and returns the
//! raw response text; parsing the text into a recommendation is the
//! validator's job, not the client's.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::GEMINI_BASE_URL;
use crate::errors::RecommendationError;
use crate::recommend::RecommendationRequest;

/// Marker the service puts in its error body when the API key is rejected.
const API_KEY_INVALID_MARKER: &str = "API_KEY_INVALID";

/// A block of content parts in the Gemini wire format.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Generation parameters sent with the request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    temperature: f32,
}

/// Request body for content generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

/// Response from content generation.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the Gemini generation API.
pub struct GeminiClient {
    base_url: String,
    client: Client,
}

impl GeminiClient {
    /// Creates a client against the production API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(GEMINI_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g. "http://127.0.0.1:8080/v1beta")
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Sends one generation request and returns the raw response text.
    ///
    /// The credential is injected per call; the client holds no credential
    /// state. The call is awaited to completion with no timeout, retry, or
    /// cancellation.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API credential supplied by the caller
    /// * `request` - The complete request description to send
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::InvalidCredential`] if the service
    /// rejects the key, and [`RecommendationError::TransportFailure`] for any
    /// other network, HTTP, or response-envelope failure.
    pub fn generate(
        &self,
        api_key: &str,
        request: &RecommendationRequest,
    ) -> Result<String, RecommendationError> {
        debug!("Sending generation request with model: {}", request.model);

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, request.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: request.system_instruction.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.response_schema.clone(),
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| RecommendationError::TransportFailure(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            if credential_rejected(status.as_u16(), &error_text) {
                return Err(RecommendationError::InvalidCredential);
            }

            return Err(RecommendationError::TransportFailure(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let generate_response: GenerateContentResponse = response.json().map_err(|e| {
            RecommendationError::TransportFailure(format!(
                "Failed to parse generation response: {}",
                e
            ))
        })?;

        let candidate = generate_response.candidates.into_iter().next().ok_or_else(|| {
            RecommendationError::TransportFailure(
                "Generation response contained no candidates".to_string(),
            )
        })?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<String>();

        debug!("Received generation response ({} bytes)", text.len());
        Ok(text)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether an error response means the credential was rejected.
///
/// The service reports key rejection as a client error carrying the
/// `API_KEY_INVALID` reason (older deployments spell it out in the message).
fn credential_rejected(status: u16, error_text: &str) -> bool {
    matches!(status, 400 | 401 | 403)
        && (error_text.contains(API_KEY_INVALID_MARKER)
            || error_text.contains("API key not valid"))
}
