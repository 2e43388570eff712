//! Error types for window persistence

use maintwatch_core::WindowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored timestamp {value:?} is not valid: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("stored window is invalid: {0}")]
    InvalidWindow(#[from] WindowError),

    #[error("store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;
