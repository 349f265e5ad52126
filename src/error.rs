//! Error types for rs-index-tickers.
//!
//! Extraction never fails: an empty page is an empty `SymbolSet`. These
//! errors only come from the collaborators around the engine (fetching,
//! configuration and reading or writing the list files).

use std::path::PathBuf;

/// Error type for fetch, configuration and persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page could not be retrieved (transport failure or non-success status).
    #[error("HTTP request for {url} failed: {reason}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport error or status line.
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing or reading a JSON list failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No saved list was found in any of the searched locations.
    #[error("no saved ticker list under {}", dir.display())]
    NoSavedList {
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The configuration is invalid (bad TOML file, or settings the HTTP
    /// client refuses).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
