//! The recommendation pipeline: request construction and response validation.
//!
//! This module turns diary state into a structured recommendation request for
//! the Gemini API, and validates the structured text the service returns
//! before it enters application state.
//!
//! # Module Structure
//!
//! - `types`: Verse, Hymn and Recommendation data model
//! - `emotions`: the fixed emotion tag vocabulary and its display labels
//! - `prompt`: the prompt template and system instruction
//! - `schema`: the JSON schema constraining the model's output shape
//! - `request`: assembly of a complete, self-contained request
//! - `validate`: parsing and shape-checking of the returned text
//!
//! # Example
//!
//! ```
//! use solace::recommend::{build_request, parse_recommendation};
//!
//! let request = build_request("오늘은 감사한 하루였다.", &["joy".to_string()], None);
//! assert!(request.prompt.contains("오늘은 감사한 하루였다."));
//!
//! let raw = r#"{"verses":[],"traditionalHymns":[],"ccms":[]}"#;
//! let recommendation = parse_recommendation(raw).unwrap();
//! assert!(recommendation.verses.is_empty());
//! ```

pub mod emotions;
pub mod prompt;
pub mod request;
pub mod schema;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use emotions::{display_label, Emotion};
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
pub use request::{build_request, RecommendationRequest};
pub use schema::{response_schema, REQUIRED_FIELDS};
pub use types::{Hymn, Recommendation, Verse};
pub use validate::parse_recommendation;
