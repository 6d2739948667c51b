//! Error types for quill-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quill-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Color string is not 6 or 8 hex digits
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Serial number cannot be mapped onto a calendar date
    #[error("Serial number {0} is outside the representable date range")]
    InvalidSerial(f64),
}
