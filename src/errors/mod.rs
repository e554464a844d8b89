//! Error handling utilities for the solace application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents the ways a recommendation request can fail.
///
/// Each variant corresponds to one distinguishable failure of the
/// build-invoke-validate pipeline. All of them are raised synchronously at the
/// point of detection; nothing in the pipeline retries or repairs a failure.
/// The caller decides whether to surface the error or submit again.
///
/// # Examples
///
/// ```
/// use solace::errors::RecommendationError;
///
/// let error = RecommendationError::IncompleteRecommendation { field: "ccms" };
/// assert!(format!("{}", error).contains("ccms"));
/// ```
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// No API credential is configured, detected before any call is attempted.
    #[error("No API credential is configured. Set one with `solace key set <KEY>`.")]
    MissingCredential,

    /// The generation service rejected the configured credential.
    #[error("The generation service rejected the configured API credential. Check the key with `solace key status` and set a valid one with `solace key set <KEY>`.")]
    InvalidCredential,

    /// The returned text is not a parseable JSON document.
    #[error("Recommendation response is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The returned document parses but lacks one of the required lists.
    #[error("Recommendation is missing the required '{field}' list")]
    IncompleteRecommendation {
        /// Name of the missing top-level field
        field: &'static str,
    },

    /// The call itself failed: network, HTTP status, quota, or an
    /// unusable response envelope.
    #[error("Recommendation request failed: {0}")]
    TransportFailure(String),
}

/// Represents errors from the on-disk JSON document stores.
///
/// Both the diary store and the settings store persist a single JSON document;
/// the failure modes are shared: the file cannot be read, it does not parse,
/// or it cannot be written back.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document exists but could not be read.
    #[error("Failed to read {path}: {source}. Check file permissions and that the data directory is accessible.")]
    ReadFailed {
        /// Path of the document that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document exists but does not contain valid JSON.
    #[error("{path} is not a valid JSON document: {source}. The file may have been edited by hand or truncated.")]
    Corrupted {
        /// Path of the unparseable document
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written back to disk.
    #[error("Failed to write {path}: {source}. Check file permissions and available disk space.")]
    WriteFailed {
        /// Path of the document that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the solace application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use solace::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use solace::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors in diary entry logic (e.g., invalid date formats, empty entries).
    #[error("Diary error: {0}")]
    Diary(String),

    /// Errors from the persisted JSON document stores.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the recommendation pipeline.
    ///
    /// This variant uses the dedicated RecommendationError type so that the
    /// five failure kinds of the pipeline stay distinguishable at the caller.
    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use solace::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Diary("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
