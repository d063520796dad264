//! Error types for core module

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file I/O error
    #[error("settings I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings serialization/deserialization error
    #[error("settings format error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
