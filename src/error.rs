//! Error types for spellmend.
//!
//! The suggestion pipeline itself never fails: degenerate input simply yields
//! empty output. Errors only arise at the edges, when configuration or input
//! files are read and parsed. All of them are represented by
//! [`SpellmendError`].
//!
//! # Examples
//!
//! ```
//! use spellmend::error::{Result, SpellmendError};
//!
//! fn load() -> Result<()> {
//!     Err(SpellmendError::config("limit must be a number"))
//! }
//!
//! assert!(load().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellmend operations.
#[derive(Error, Debug)]
pub enum SpellmendError {
    /// I/O errors (reading config or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with SpellmendError.
pub type Result<T> = std::result::Result<T, SpellmendError>;

impl SpellmendError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellmendError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellmendError::InvalidArgument(msg.into())
    }
}
