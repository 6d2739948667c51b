//! # quill-sheets-xlsx
//!
//! Style resolution for XLSX (Office Open XML) packages.
//!
//! The styles part of a workbook is read once, on first use, into a
//! [`StyleRegistry`]. A [`StyleResolver`] then answers the per-cell
//! questions a reader asks: which [`Style`](quill_sheets_core::Style) does a
//! style index denote, and is a numeric value under it a date.
//!
//! ## Example
//!
//! ```no_run
//! use quill_sheets_xlsx::{ResolverOptions, StyleResolver, XlsxPackage};
//!
//! let package = XlsxPackage::open_file("book.xlsx")?;
//! let resolver = StyleResolver::with_options(package, ResolverOptions::default());
//!
//! for index in 0..resolver.style_count()? as u32 {
//!     let style = resolver.resolve_style(index)?;
//!     println!("{index}: bold={} date={}", style.font.bold, resolver.is_date_style(index)?);
//! }
//! # Ok::<(), quill_sheets_xlsx::XlsxError>(())
//! ```

pub mod cursor;
pub mod error;
pub mod package;
pub mod resolver;
pub mod styles;

pub use cursor::{NodeCursor, NodeKind, XmlNode};
pub use error::{XlsxError, XlsxResult};
pub use package::{PartSource, XlsxPackage, CONTENT_TYPES_PART, STYLES_PART};
pub use resolver::{ResolverOptions, StyleResolver};
pub use styles::{CellStyleRecord, DateFormatClassifier, StyleRegistry};
