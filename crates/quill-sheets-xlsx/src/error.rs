//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while reading XLSX styles
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid file format
    #[error("Invalid XLSX format: {0}")]
    InvalidFormat(String),

    /// A required attribute is absent
    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute is present but its value cannot be parsed
    #[error("<{element}> has invalid `{attribute}` value {value:?}")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// A section or element does not have the expected shape
    #[error("Structural violation: {0}")]
    StructuralViolation(String),

    /// A cell style references a font/fill that was never declared
    #[error("{kind} index {index} out of range (declared: {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: u32,
        len: usize,
    },

    /// Style index beyond the declared cell styles
    #[error("Style index {index} not found (declared: {count})")]
    StyleNotFound { index: u32, count: usize },

    /// Style has no resolvable number format code
    #[error("Style index {0} has no number format code")]
    FormatCodeNotFound(u32),

    /// An earlier extraction pass failed; the resolver stays failed
    #[error("Styles extraction failed: {0}")]
    ExtractionFailed(String),
}
