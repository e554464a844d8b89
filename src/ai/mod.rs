//! External generation service integration.
//!
//! This module provides the HTTP boundary to the Gemini API. It is the sole
//! suspension point of a recommendation: one request in, one text blob out,
//! no streaming, no cancellation, no multi-turn state.
//!
//! # Example
//!
//! ```no_run
//! use solace::ai::GeminiClient;
//! use solace::recommend::build_request;
//!
//! let client = GeminiClient::new();
//! let request = build_request("오늘의 일기", &[], None);
//! let raw = client.generate("my-api-key", &request)?;
//! # Ok::<(), solace::errors::RecommendationError>(())
//! ```

pub mod gemini;

// Re-export commonly used types
pub use gemini::GeminiClient;
