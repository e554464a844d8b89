//! Configuration management for the solace application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults, plus the persisted settings
//! store that holds the API credential.
//!
//! # Environment Variables
//!
//! - `SOLACE_DIR`: Path to the data directory (defaults to ~/.solace)
//! - `HOME`: Used for expanding the default data directory path

pub mod settings;

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DIARY_FILE_NAME, ENV_VAR_HOME, ENV_VAR_SOLACE_DIR, SETTINGS_FILE_NAME,
};
use crate::errors::{AppError, AppResult};

pub use settings::SettingsStore;

/// Configuration for the solace application.
///
/// Holds the data directory where the diary and settings documents live.
///
/// # Examples
///
/// ```
/// use solace::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.diary_path().ends_with("diary.json"));
/// ```
pub struct Config {
    /// Directory where the diary and settings documents are stored.
    ///
    /// Loaded from the SOLACE_DIR environment variable with a fallback to
    /// ~/.solace if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_SOLACE_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or not
    /// absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    /// Path of the diary document.
    pub fn diary_path(&self) -> PathBuf {
        self.data_dir.join(DIARY_FILE_NAME)
    }

    /// Path of the settings document.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }
}
