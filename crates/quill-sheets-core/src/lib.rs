//! # quill-sheets-core
//!
//! Core style model for the quill-sheets spreadsheet library.
//!
//! This crate provides the format-independent types produced by style
//! resolution:
//! - [`Style`] - A resolved cell style (font, background, format code)
//! - [`FontStyle`], [`FillStyle`], [`Color`] - Its components
//! - [`NumberFormat`] - Number formats and date-format classification
//! - [`DateSystem`] - Serial number to calendar conversion
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_core::{is_date_format_code, Color, Style};
//!
//! let style = Style::new().bold(true).background(Color::rgb(255, 255, 0));
//! assert!(style.font.bold);
//!
//! assert!(is_date_format_code("yyyy-mm-dd"));
//! assert!(!is_date_format_code("[Red]0.00"));
//! ```

pub mod date;
pub mod error;
pub mod style;

pub use date::DateSystem;
pub use error::{Error, Result};

// Re-export all style types for convenience
pub use style::{
    builtin_date_format, is_builtin_date_format, is_date_format_code, Color, FillStyle, FontStyle,
    NumberFormat, Style,
};
