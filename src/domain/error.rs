//! Error types for Spares Hub.
//!
//! This module defines the centralized error type [`SparesError`] and a type alias
//! [`Result`] used by every fallible operation in the crate. Only operations that
//! touch the filesystem or parse external input can fail; the funnel reducer,
//! query engine and presenter are total and never return errors.

use thiserror::Error;

/// The main error type for Spares Hub operations.
///
/// Most variants carry a human-readable description. I/O failures convert
/// automatically from `std::io::Error` via `#[from]`.
///
/// # Examples
///
/// ```
/// use spareshub::SparesError;
///
/// fn write_store() -> Result<(), SparesError> {
///     Err(SparesError::Storage("disk full".to_string()))
/// }
///
/// assert_eq!(write_store().unwrap_err().to_string(), "Storage error: disk full");
/// ```
#[derive(Debug, Error)]
pub enum SparesError {
    /// Storage operation failed.
    ///
    /// Occurs when the listing collection cannot be serialized or written.
    /// Reads never produce this error: unreadable data falls back to the seed set.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A photo could not be turned into an embeddable data URL.
    #[error("Photo encoding error: {0}")]
    Encode(String),
}

/// A specialized `Result` type for Spares Hub operations.
pub type Result<T> = std::result::Result<T, SparesError>;
