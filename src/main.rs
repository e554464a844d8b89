/*!
# Solace - A Scripture-Prescribing Diary Companion

Solace is a command-line diary. One entry exists per calendar date, carrying
free text, emotion tags, and a gratitude note; the `recommend` command asks
the Gemini API for comforting Bible passages and song suggestions matched to
the entry, and can keep one recommended verse alongside the diary.

## Usage

```text
solace write [-d DATE] [-t TEXT] [-e EMOTIONS] [-g GRATITUDE]
solace show [-d DATE]
solace recommend [-d DATE] [-s N]
solace key <set VALUE|clear|status>
solace emotions
```

## Configuration

The application can be configured with the following environment variables:
- `SOLACE_DIR`: The directory for the diary and settings documents
  (defaults to "~/.solace")
- The Gemini API credential is stored via `solace key set`, not the
  environment.
*/

use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use solace::ai::GeminiClient;
use solace::cli::{parse_emotions, Cli, Command, KeyAction};
use solace::config::{Config, SettingsStore};
use solace::constants::API_KEY_SETTING;
use solace::errors::{AppError, AppResult};
use solace::journal::{date_key, parse_date, EntryStore};
use solace::ops::{self, EntryUpdate};
use solace::recommend::Emotion;

fn main() {
    // Logs go to stderr so command output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Coordinates the overall application flow.
///
/// 1. Parses command-line arguments
/// 2. Loads and validates configuration, creating the data directory
/// 3. Dispatches to the requested operation
///
/// All failures propagate here and are rendered as a single message.
fn run() -> AppResult<()> {
    let cli = Cli::parse();

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    config.ensure_data_dir()?;
    debug!("Data directory ready");

    match cli.command {
        Command::Write {
            date,
            text,
            emotions,
            gratitude,
        } => {
            let date = resolve_date(date.as_deref())?;
            let mut store = EntryStore::load(config.diary_path())?;

            let update = EntryUpdate {
                text,
                emotions: emotions.as_deref().map(parse_emotions),
                gratitude,
            };
            ops::apply_update(&mut store, date, update)?;
            println!("Saved entry for {}", date_key(date));
        }

        Command::Show { date } => {
            let date = resolve_date(date.as_deref())?;
            let store = EntryStore::load(config.diary_path())?;

            match store.entry(date) {
                Some(entry) => print!("{}", ops::render_entry(date, entry)),
                None => println!("No entry for {}", date_key(date)),
            }
        }

        Command::Recommend { date, save } => {
            let date = resolve_date(date.as_deref())?;
            let settings = SettingsStore::load(config.settings_path())?;
            let mut store = EntryStore::load(config.diary_path())?;

            let entry = store.entry(date).cloned().ok_or_else(|| {
                AppError::Diary(format!(
                    "No entry for {}. Write one first with `solace write`.",
                    date_key(date)
                ))
            })?;

            let client = GeminiClient::new();
            let recommendation = ops::recommend_for_entry(&settings, &client, &entry)?;
            print!(
                "{}",
                ops::render_recommendation(&recommendation, entry.saved_verse.as_ref())
            );

            if let Some(index) = save {
                let verse = ops::save_recommended_verse(&mut store, date, &recommendation, index)?;
                println!("\nSaved {} to {}", verse.reference(), date_key(date));
            }
        }

        Command::Key { action } => {
            let mut settings = SettingsStore::load(config.settings_path())?;
            match action {
                KeyAction::Set { value } => {
                    settings.set(API_KEY_SETTING, value)?;
                    println!("API credential saved.");
                }
                KeyAction::Clear => {
                    settings.delete(API_KEY_SETTING)?;
                    println!("API credential removed.");
                }
                KeyAction::Status => match settings.get(API_KEY_SETTING) {
                    Some(_) => println!("An API credential is configured."),
                    None => println!(
                        "No API credential is configured. Set one with `solace key set <KEY>`."
                    ),
                },
            }
        }

        Command::Emotions => {
            for emotion in Emotion::ALL {
                println!("{:<16} {}", emotion.tag(), emotion.label());
            }
        }
    }

    Ok(())
}

/// Resolves an optional date argument, defaulting to today.
fn resolve_date(arg: Option<&str>) -> AppResult<chrono::NaiveDate> {
    match arg {
        Some(raw) => parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}
