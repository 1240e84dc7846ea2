//! Unified error type for unsplash-random.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching, persisting or downloading a random photo.
#[derive(Debug, Error)]
pub enum UnsplashError {
    /// The HTTP exchange could not be completed.
    #[error("Network error: {0}")]
    NetworkFailure(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error ({status}): {message}")]
    HttpStatusFailure {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// The response body was not the expected JSON document.
    #[error("Failed to parse response: {0}")]
    ParseFailure(String),

    /// A document-dependent operation was called before a successful `init()`.
    #[error("Client not initialized. Call init() first.")]
    NotInitialized,

    /// The cached document lacks a required field.
    #[error("Missing field '{field}' in photo document")]
    MissingField {
        /// Dotted path of the field.
        field: String,
    },

    /// A field is present but has the wrong shape.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Dotted path of the field.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Persisting the JSON document or the image failed.
    #[error("Failed to write {}: {source}", path.display())]
    FileWriteFailure {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// No access key configured.
    #[error("No Unsplash access key. Set {env_var} or add it to config file.")]
    MissingApiKey {
        /// The environment variable name.
        env_var: String,
    },

    /// Cassette loading or recording error.
    #[error("Cassette error: {0}")]
    Cassette(String),
}

impl UnsplashError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField { field: field.to_string() }
    }

    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidField { field: field.to_string(), reason: reason.into() }
    }
}
