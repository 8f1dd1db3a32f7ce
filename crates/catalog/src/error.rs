//! Error types for the catalog crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog fixture
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be read
    #[error("failed to read catalog fixture {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture contents were not a valid show list
    #[error("invalid catalog fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture parsed but failed a sanity check
    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
