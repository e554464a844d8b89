//! Request a recommendation for one diary entry.

use tracing::{debug, info};

use crate::ai::GeminiClient;
use crate::config::SettingsStore;
use crate::constants::API_KEY_SETTING;
use crate::errors::{AppError, AppResult, RecommendationError};
use crate::journal::DiaryEntry;
use crate::recommend::{build_request, parse_recommendation, Recommendation};

/// Runs the single logical recommendation operation for one entry.
///
/// # Flow
///
/// 1. Fetch the credential; absent → `MissingCredential` before anything else
/// 2. Guard against empty diary text (the builder itself never checks)
/// 3. Build the request
/// 4. Invoke the generation service, once
/// 5. Validate the response and return it
///
/// The operation is stateless: nothing is persisted here, and a failure at
/// any step surfaces immediately with no retry.
///
/// # Arguments
///
/// * `settings` - Settings store holding the API credential
/// * `client` - Gemini client to invoke
/// * `entry` - The diary entry to analyze
///
/// # Errors
///
/// Returns an error if:
/// - No credential is configured
/// - The entry text is empty after trimming
/// - The call fails or the service rejects the credential
/// - The response is malformed or structurally incomplete
pub fn recommend_for_entry(
    settings: &SettingsStore,
    client: &GeminiClient,
    entry: &DiaryEntry,
) -> AppResult<Recommendation> {
    let api_key = settings
        .get(API_KEY_SETTING)
        .ok_or(RecommendationError::MissingCredential)?;

    if entry.text.trim().is_empty() {
        return Err(AppError::Diary(
            "Diary entry has no text to analyze. Write something first with `solace write`."
                .to_string(),
        ));
    }

    info!("Requesting recommendation ({} chars of diary text)", entry.text.len());
    let request = build_request(&entry.text, &entry.emotions, entry.gratitude.as_deref());

    let raw = client.generate(api_key, &request)?;
    debug!("Validating generation response");
    let recommendation = parse_recommendation(&raw)?;

    info!(
        "Received recommendation: {} verses, {} hymns, {} CCM",
        recommendation.verses.len(),
        recommendation.traditional_hymns.len(),
        recommendation.ccms.len()
    );
    Ok(recommendation)
}
