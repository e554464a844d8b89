//! The date-keyed diary document on disk.
//!
//! The whole diary is one JSON object mapping ISO date keys to entries,
//! loaded once at startup and written back after every change. That keeps
//! the lifecycle explicit: nothing else in the application touches the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use super::{date_key, DiaryEntry};
use crate::errors::{AppResult, StoreError};
use crate::recommend::Verse;

/// Persistent store of diary entries, keyed by date.
pub struct EntryStore {
    path: PathBuf,
    entries: BTreeMap<String, DiaryEntry>,
}

impl EntryStore {
    /// Loads the diary document, or starts empty if none exists yet.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the diary JSON document
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the file exists but cannot be
    /// read, and `StoreError::Corrupted` if it does not parse.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| StoreError::ReadFailed {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupted {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };

        debug!("Loaded {} diary entries from {:?}", entries.len(), path);
        Ok(EntryStore { path, entries })
    }

    /// Returns the entry for a date, if one exists.
    pub fn entry(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.entries.get(&date_key(date))
    }

    /// Number of entries in the diary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the diary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies an edit to the entry for a date and persists the diary.
    ///
    /// The entry is created lazily on the first edit for its date.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the document cannot be written
    /// back.
    pub fn update<F>(&mut self, date: NaiveDate, edit: F) -> AppResult<()>
    where
        F: FnOnce(&mut DiaryEntry),
    {
        let entry = self.entries.entry(date_key(date)).or_default();
        edit(entry);
        self.persist()?;
        Ok(())
    }

    /// Persists a verse into the entry for a date, replacing any previous
    /// saved verse.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the document cannot be written
    /// back.
    pub fn save_verse(&mut self, date: NaiveDate, verse: Verse) -> AppResult<()> {
        debug!("Saving verse {} for {}", verse.reference(), date);
        self.update(date, |entry| entry.saved_verse = Some(verse))
    }

    /// Path of the underlying document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .expect("diary entries always serialize");
        fs::write(&self.path, raw).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn verse() -> Verse {
        Verse {
            book: "시편".to_string(),
            chapter: 23,
            verse: "1".to_string(),
            text: "여호와는 나의 목자시니".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = EntryStore::load(dir.path().join("diary.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_entries_created_lazily_on_first_edit() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::load(dir.path().join("diary.json")).unwrap();

        assert!(store.entry(date()).is_none());

        store
            .update(date(), |entry| entry.text = "오".to_string())
            .unwrap();

        assert_eq!(store.entry(date()).unwrap().text, "오");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_changes_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.json");

        let mut store = EntryStore::load(&path).unwrap();
        store
            .update(date(), |entry| {
                entry.text = "오늘의 일기".to_string();
                entry.emotions = vec!["joy".to_string()];
                entry.gratitude = Some("가족".to_string());
            })
            .unwrap();
        drop(store);

        let reloaded = EntryStore::load(&path).unwrap();
        let entry = reloaded.entry(date()).unwrap();
        assert_eq!(entry.text, "오늘의 일기");
        assert_eq!(entry.emotions, vec!["joy"]);
        assert_eq!(entry.gratitude.as_deref(), Some("가족"));
    }

    #[test]
    fn test_save_verse_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::load(dir.path().join("diary.json")).unwrap();

        store
            .update(date(), |entry| {
                entry.text = "일기".to_string();
                entry.emotions = vec!["peace".to_string()];
            })
            .unwrap();
        store.save_verse(date(), verse()).unwrap();

        let entry = store.entry(date()).unwrap();
        assert_eq!(entry.text, "일기");
        assert_eq!(entry.emotions, vec!["peace"]);
        assert_eq!(entry.saved_verse.as_ref().unwrap().book, "시편");
    }

    #[test]
    fn test_save_verse_replaces_previous() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::load(dir.path().join("diary.json")).unwrap();

        store.save_verse(date(), verse()).unwrap();
        let second = Verse {
            book: "빌립보서".to_string(),
            chapter: 4,
            verse: "6".to_string(),
            text: "아무 것도 염려하지 말고".to_string(),
        };
        store.save_verse(date(), second.clone()).unwrap();

        assert_eq!(store.entry(date()).unwrap().saved_verse, Some(second));
    }

    #[test]
    fn test_entries_keyed_per_date() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::load(dir.path().join("diary.json")).unwrap();

        let other_date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        store
            .update(date(), |entry| entry.text = "첫째 날".to_string())
            .unwrap();
        store
            .update(other_date, |entry| entry.text = "둘째 날".to_string())
            .unwrap();

        assert_eq!(store.entry(date()).unwrap().text, "첫째 날");
        assert_eq!(store.entry(other_date).unwrap().text, "둘째 날");
    }

    #[test]
    fn test_corrupted_document_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.json");
        fs::write(&path, "not json at all").unwrap();

        let result = EntryStore::load(&path);
        assert!(matches!(result, Err(StoreError::Corrupted { .. })));
    }

    #[test]
    fn test_loads_minimal_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.json");
        fs::write(
            &path,
            r#"{"2024-03-07": {"text": "일기", "savedVerse": null}}"#,
        )
        .unwrap();

        let store = EntryStore::load(&path).unwrap();
        assert_eq!(store.entry(date()).unwrap().text, "일기");
    }
}
