//! Diary entry editing operations.

use chrono::NaiveDate;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::journal::EntryStore;
use crate::recommend::{Recommendation, Verse};

/// One edit to a diary entry; absent fields are left untouched.
#[derive(Debug, Default)]
pub struct EntryUpdate {
    /// Replacement diary text
    pub text: Option<String>,
    /// Replacement emotion tag selection
    pub emotions: Option<Vec<String>>,
    /// Replacement gratitude note
    pub gratitude: Option<String>,
}

impl EntryUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.emotions.is_none() && self.gratitude.is_none()
    }
}

/// Applies an update to the entry for a date, creating it if needed.
///
/// # Errors
///
/// Returns `AppError::Diary` for an empty update, and store errors if the
/// diary cannot be persisted.
pub fn apply_update(store: &mut EntryStore, date: NaiveDate, update: EntryUpdate) -> AppResult<()> {
    if update.is_empty() {
        return Err(AppError::Diary(
            "Nothing to update: pass --text, --emotions or --gratitude".to_string(),
        ));
    }

    debug!("Updating entry for {}", date);
    store.update(date, |entry| {
        if let Some(text) = update.text {
            entry.text = text;
        }
        if let Some(emotions) = update.emotions {
            entry.emotions = emotions;
        }
        if let Some(gratitude) = update.gratitude {
            entry.gratitude = if gratitude.trim().is_empty() {
                None
            } else {
                Some(gratitude)
            };
        }
    })
}

/// Persists one verse of a recommendation into the entry for a date.
///
/// `index` is 1-based, matching the numbering the rendering uses.
///
/// # Errors
///
/// Returns `AppError::Diary` if the index does not point at a recommended
/// verse, and store errors if the diary cannot be persisted.
pub fn save_recommended_verse(
    store: &mut EntryStore,
    date: NaiveDate,
    recommendation: &Recommendation,
    index: usize,
) -> AppResult<Verse> {
    let verse = index
        .checked_sub(1)
        .and_then(|i| recommendation.verses.get(i))
        .ok_or_else(|| {
            AppError::Diary(format!(
                "No verse number {} in this recommendation (it has {})",
                index,
                recommendation.verses.len()
            ))
        })?
        .clone();

    store.save_verse(date, verse.clone())?;
    Ok(verse)
}
