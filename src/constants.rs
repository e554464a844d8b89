//! Constants used throughout the application.
//!
//! This module contains all constants used in the Solace application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "solace";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A diary companion that prescribes scripture and songs for your day";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Solace data directory.
pub const ENV_VAR_SOLACE_DIR: &str = "SOLACE_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for Solace data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".solace";

// File System Parameters
/// File name of the diary document inside the data directory.
pub const DIARY_FILE_NAME: &str = "diary.json";
/// File name of the settings document inside the data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD), used as the entry key.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Generation Service Parameters
/// Base URL of the Gemini generation API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model identifier used for recommendation requests.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Sampling temperature used for recommendation requests.
pub const GENERATION_TEMPERATURE: f32 = 0.9;
/// Settings key under which the Gemini API credential is stored.
pub const API_KEY_SETTING: &str = "GEMINI_API_KEY";
