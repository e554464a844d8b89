//! Diary entries and their persistent store.
//!
//! One diary entry exists per calendar date, keyed by its ISO date string.
//! Entries hold the user's free text, selected emotion tags, an optional
//! gratitude note, and at most one saved verse. The on-disk document is a
//! single JSON object mapping date keys to entries; optional fields may be
//! absent, so documents written by older releases keep loading.

pub mod store;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use crate::errors::{AppError, AppResult};
use crate::recommend::Verse;

// Re-export the store type
pub use store::EntryStore;

/// A user's diary entry for one calendar date.
///
/// Created lazily on the first write for a date and mutated in place by
/// later edits. The saved verse is the only piece of a recommendation that
/// is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiaryEntry {
    /// Free-text diary content
    #[serde(default)]
    pub text: String,
    /// The one verse the user chose to keep, if any
    #[serde(rename = "savedVerse")]
    pub saved_verse: Option<Verse>,
    /// Selected emotion tags, in selection order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emotions: Vec<String>,
    /// Optional gratitude note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gratitude: Option<String>,
}

impl DiaryEntry {
    /// Returns true if the given verse is the entry's saved verse.
    ///
    /// Comparison uses the verse's reference identity (book, chapter, verse),
    /// so a re-recommended passage with different wording still reads as
    /// already saved.
    pub fn has_saved(&self, verse: &Verse) -> bool {
        self.saved_verse
            .as_ref()
            .is_some_and(|saved| saved.same_reference(verse))
    }
}

/// Formats a date as the entry key (YYYY-MM-DD).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Parses a date argument in YYYY-MM-DD or YYYYMMDD form.
///
/// # Errors
///
/// Returns `AppError::Diary` if the string fits neither format.
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(input, DATE_FORMAT_COMPACT))
        .map_err(|_| {
            AppError::Diary(format!(
                "Invalid date '{}': expected YYYY-MM-DD or YYYYMMDD",
                input
            ))
        })
}
