//! Parsing and shape-checking of the text returned by the generation service.

use serde_json::Value;
use tracing::debug;

use super::schema::REQUIRED_FIELDS;
use super::types::Recommendation;
use crate::errors::RecommendationError;

/// Parses the raw text of a generation response into a [`Recommendation`].
///
/// Two failure modes stay distinguishable for the caller:
///
/// - text that is not a parseable JSON document fails with
///   [`RecommendationError::MalformedResponse`];
/// - a document that parses but lacks one of the three required top-level
///   lists fails with [`RecommendationError::IncompleteRecommendation`],
///   naming the first missing field.
///
/// On success the value is returned unmodified, with no normalization beyond
/// the shape check. Missing optional sub-fields (a hymn without a number or
/// search query) are tolerated. No retries and no repair happen here; the
/// caller decides whether to surface the error or submit again.
///
/// # Examples
///
/// ```
/// use solace::errors::RecommendationError;
/// use solace::recommend::parse_recommendation;
///
/// let err = parse_recommendation(r#"{"verses":[],"traditionalHymns":[]}"#).unwrap_err();
/// assert!(matches!(
///     err,
///     RecommendationError::IncompleteRecommendation { field: "ccms" }
/// ));
/// ```
pub fn parse_recommendation(raw: &str) -> Result<Recommendation, RecommendationError> {
    let document: Value =
        serde_json::from_str(raw.trim()).map_err(RecommendationError::MalformedResponse)?;

    for field in REQUIRED_FIELDS {
        if document.get(field).is_none() {
            return Err(RecommendationError::IncompleteRecommendation { field });
        }
    }

    // All three lists are present; anything that still fails to fit the
    // typed model does not encode a recommendation at all.
    let recommendation: Recommendation =
        serde_json::from_value(document).map_err(RecommendationError::MalformedResponse)?;

    debug!(
        verses = recommendation.verses.len(),
        hymns = recommendation.traditional_hymns.len(),
        ccms = recommendation.ccms.len(),
        "Parsed recommendation"
    );
    Ok(recommendation)
}
