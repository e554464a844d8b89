//! The persisted settings store.
//!
//! A small string-to-string map with explicit get/set/delete operations,
//! loaded once at startup and written back on every change. The API
//! credential lives here under [`crate::constants::API_KEY_SETTING`]; core
//! components never read the store themselves, values are injected as
//! parameters by the operations layer.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::StoreError;

/// Persistent key-value settings, one JSON document on disk.
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Loads the settings document, or starts empty if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the file exists but cannot be
    /// read, and `StoreError::Corrupted` if it does not parse.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = if path.exists() {
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

        debug!("Loaded {} settings from {:?}", values.len(), path);
        Ok(SettingsStore { path, values })
    }

    /// Returns the value stored under a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores a value under a key and persists the document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the document cannot be written
    /// back.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        self.values.insert(key.into(), value.into());
        self.persist()
    }

    /// Removes a key and persists the document.
    ///
    /// Removing an absent key is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the document cannot be written
    /// back.
    pub fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        self.persist()
    }

    /// Path of the underlying document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string_pretty(&self.values).expect("settings always serialize");
        fs::write(&self.path, raw).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
