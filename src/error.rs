//! Custom error types for the preference and profile stores.
//!
//! Read-side failures are resolved to defaults inside the stores and only
//! show up in logs. Write-side failures are surfaced where the caller needs
//! to react (profile saves, backup export).

use thiserror::Error;

/// Main error type for persistence operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading a key from the backend failed.
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// A stored value exists but could not be decoded.
    #[error("Stored value for '{key}' is malformed: {message}")]
    Decode { key: String, message: String },

    /// Writing or removing a key failed (storage unavailable, disk full, ...).
    #[error("Failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded before writing.
    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// No platform data directory and no override was configured.
    #[error("Could not find a data directory. Set UPSC_PREP_DATA_DIR or pass --data-dir.")]
    DataDirUnavailable,

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    /// Whether retrying the same operation can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Write { .. } | StoreError::Read { .. })
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
