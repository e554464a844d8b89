/*!
# Solace

Solace is a personal diary companion. The user keeps one free-text entry per
calendar date, tagged with emotions and an optional gratitude note; on
request, Solace asks the Gemini API for comforting Bible passages and song
suggestions matched to the entry, and lets the user keep one recommended
verse alongside the diary.

## Core Features

- Write and edit one diary entry per date (text, emotion tags, gratitude note)
- Request a recommendation: 2-3 Bible verses, 2 traditional hymns, 2 CCM songs
- Save one recommended verse into the owning entry
- Manage the API credential from the command line

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and the persisted settings store
- `errors`: Error handling infrastructure
- `recommend`: Request construction and response validation
- `ai`: The Gemini HTTP boundary
- `journal`: Diary entries and their persistent store
- `ops`: High-level operations tying the pieces together

## Usage Example

```no_run
use solace::ai::GeminiClient;
use solace::config::{Config, SettingsStore};
use solace::journal::EntryStore;
use solace::ops;
use chrono::Local;

fn main() -> solace::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let settings = SettingsStore::load(config.settings_path())?;
    let store = EntryStore::load(config.diary_path())?;

    let today = Local::now().date_naive();
    if let Some(entry) = store.entry(today) {
        let client = GeminiClient::new();
        let recommendation = ops::recommend_for_entry(&settings, &client, entry)?;
        print!("{}", ops::render_recommendation(&recommendation, entry.saved_verse.as_ref()));
    }
    Ok(())
}
```
*/

/// The Gemini HTTP boundary
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and the persisted settings store
pub mod config;
/// Centralized constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Diary entries and their persistent store
pub mod journal;
/// High-level user-facing operations
pub mod ops;
/// Request construction and response validation
pub mod recommend;

// Re-export important types for convenience
pub use ai::GeminiClient;
pub use cli::Cli;
pub use config::{Config, SettingsStore};
pub use errors::{AppError, AppResult, RecommendationError};
pub use journal::{DiaryEntry, EntryStore};
pub use recommend::{Hymn, Recommendation, Verse};
