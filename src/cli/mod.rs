use clap::{Parser, Subcommand};

use crate::constants::{APP_DESCRIPTION, APP_NAME};

/// A diary companion that prescribes scripture and songs for your day
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write or edit the diary entry for a date
    Write {
        /// Date of the entry (format: YYYY-MM-DD or YYYYMMDD, default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Diary text
        #[arg(short, long)]
        text: Option<String>,

        /// Comma-separated emotion tags (see `solace emotions`)
        #[arg(short, long)]
        emotions: Option<String>,

        /// Gratitude note (pass an empty string to clear)
        #[arg(short, long)]
        gratitude: Option<String>,
    },

    /// Show the diary entry for a date
    Show {
        /// Date of the entry (format: YYYY-MM-DD or YYYYMMDD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Request scripture and song recommendations for a date's entry
    Recommend {
        /// Date of the entry (format: YYYY-MM-DD or YYYYMMDD, default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Save the Nth recommended verse into the entry (1-based)
        #[arg(short, long)]
        save: Option<usize>,
    },

    /// Manage the Gemini API credential
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// List the emotion tag vocabulary
    Emotions,
}

#[derive(Subcommand, Debug)]
pub enum KeyAction {
    /// Store the API credential
    Set {
        /// The credential value
        value: String,
    },

    /// Remove the stored credential
    Clear,

    /// Report whether a credential is configured
    Status,
}

/// Splits a comma-separated emotion argument into tags.
///
/// Whitespace around tags is trimmed and empty segments are dropped, so
/// `"joy, sadness,"` parses the same as `"joy,sadness"`.
pub fn parse_emotions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
