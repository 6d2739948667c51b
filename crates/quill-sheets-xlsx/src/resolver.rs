//! Style query facade
//!
//! [`StyleResolver`] owns a [`PartSource`] and reads its styles part at
//! most once, on the first query. Every later query is answered from the
//! resulting [`StyleRegistry`].

use std::cell::RefCell;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use chrono::NaiveDateTime;
use log::debug;
use once_cell::unsync::OnceCell;
use quill_sheets_core::{DateSystem, NumberFormat, Style};

use crate::cursor::NodeCursor;
use crate::error::{XlsxError, XlsxResult};
use crate::package::{PartSource, XlsxPackage, STYLES_PART};
use crate::styles::{read_styles, StyleRegistry};

/// Options for a [`StyleResolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Path of the styles part inside the package
    pub styles_part: String,
    /// Date system used to convert serial numbers in [`StyleResolver::date_value`]
    pub date_system: DateSystem,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            styles_part: STYLES_PART.to_string(),
            date_system: DateSystem::default(),
        }
    }
}

impl ResolverOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Read styles from a different part
    pub fn with_styles_part<S: Into<String>>(mut self, path: S) -> Self {
        self.styles_part = path.into();
        self
    }

    /// Set the workbook date system
    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }
}

/// Terminal outcome of the extraction pass
enum StylesState {
    Ready(StyleRegistry),
    /// The package has no styles part
    Absent { default: Style },
    /// Extraction failed; holds the rendered original error
    Failed(String),
}

/// Answers style and date queries for one package
///
/// The styles part is extracted on the first query that needs it. If that
/// pass fails, the first caller gets the underlying error and every later
/// query fails with [`XlsxError::ExtractionFailed`].
///
/// # Example
///
/// ```no_run
/// use quill_sheets_xlsx::StyleResolver;
///
/// let resolver = StyleResolver::open_file("book.xlsx")?;
/// if resolver.is_date(3, 45000.5)? {
///     println!("{:?}", resolver.date_value(3, 45000.5)?);
/// }
/// # Ok::<(), quill_sheets_xlsx::XlsxError>(())
/// ```
pub struct StyleResolver<S> {
    source: RefCell<S>,
    options: ResolverOptions,
    state: OnceCell<StylesState>,
}

impl StyleResolver<XlsxPackage<File>> {
    /// Open an `.xlsx` file and resolve styles from it
    pub fn open_file<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        Ok(Self::new(XlsxPackage::open_file(path)?))
    }
}

impl<R: Read + Seek> StyleResolver<XlsxPackage<R>> {
    /// Open a package from a reader and resolve styles from it
    pub fn open(reader: R) -> XlsxResult<Self> {
        Ok(Self::new(XlsxPackage::open(reader)?))
    }
}

impl<S: PartSource> StyleResolver<S> {
    /// Create a resolver with default options
    pub fn new(source: S) -> Self {
        Self::with_options(source, ResolverOptions::default())
    }

    /// Create a resolver with the given options
    pub fn with_options(source: S, options: ResolverOptions) -> Self {
        Self {
            source: RefCell::new(source),
            options,
            state: OnceCell::new(),
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Run the extraction pass now instead of on the first query
    pub fn load(&self) -> XlsxResult<()> {
        self.state().map(|_| ())
    }

    /// The extracted registry, or `None` if the package has no styles part
    pub fn registry(&self) -> XlsxResult<Option<&StyleRegistry>> {
        Ok(match self.state()? {
            StylesState::Ready(registry) => Some(registry),
            _ => None,
        })
    }

    /// Check whether values under `style_index` are dates
    ///
    /// Undeclared style indices are not dates. Only a failed extraction
    /// produces an error.
    pub fn is_date_style(&self, style_index: u32) -> XlsxResult<bool> {
        Ok(self
            .registry()?
            .is_some_and(|registry| registry.is_date_style(style_index)))
    }

    /// Check whether a cell value should be read as a date
    ///
    /// The style must be a date style and the value a finite, non-negative
    /// serial number.
    pub fn is_date(&self, style_index: u32, value: f64) -> XlsxResult<bool> {
        Ok(value.is_finite() && value >= 0.0 && self.is_date_style(style_index)?)
    }

    /// Calendar value of a date-styled cell
    ///
    /// `None` when the style is not a date style or the serial has no
    /// calendar date in the configured date system.
    pub fn date_value(&self, style_index: u32, value: f64) -> XlsxResult<Option<NaiveDateTime>> {
        if !self.is_date(style_index, value)? {
            return Ok(None);
        }
        Ok(self.options.date_system.to_datetime(value).ok())
    }

    /// Resolved style at `style_index`
    ///
    /// Without a styles part every index resolves to the default style.
    pub fn resolve_style(&self, style_index: u32) -> XlsxResult<&Style> {
        match self.state()? {
            StylesState::Ready(registry) => registry.style(style_index),
            StylesState::Absent { default } => Ok(default),
            StylesState::Failed(msg) => Err(XlsxError::ExtractionFailed(msg.clone())),
        }
    }

    /// Display format code of the style at `style_index`
    ///
    /// Fails with [`XlsxError::FormatCodeNotFound`] when the style carries
    /// no resolvable format code. Without a styles part every index uses
    /// `General`.
    pub fn format_code_for(&self, style_index: u32) -> XlsxResult<&str> {
        match self.state()? {
            StylesState::Ready(registry) => registry.format_code_for(style_index),
            StylesState::Absent { .. } => Ok(NumberFormat::GENERAL),
            StylesState::Failed(msg) => Err(XlsxError::ExtractionFailed(msg.clone())),
        }
    }

    /// Number of declared cell styles (0 without a styles part)
    pub fn style_count(&self) -> XlsxResult<usize> {
        Ok(self.registry()?.map_or(0, StyleRegistry::style_count))
    }

    /// Consume the resolver and return its source
    pub fn into_inner(self) -> S {
        self.source.into_inner()
    }

    /// Terminal state, running the extraction pass if it has not run yet
    fn state(&self) -> XlsxResult<&StylesState> {
        let mut first_error = None;
        let state = self.state.get_or_init(|| match self.extract() {
            Ok(state) => state,
            Err(e) => {
                let msg = e.to_string();
                first_error = Some(e);
                StylesState::Failed(msg)
            }
        });

        if let Some(e) = first_error {
            return Err(e);
        }
        match state {
            StylesState::Failed(msg) => Err(XlsxError::ExtractionFailed(msg.clone())),
            state => Ok(state),
        }
    }

    fn extract(&self) -> XlsxResult<StylesState> {
        let part = self.options.styles_part.as_str();
        let mut source = self.source.borrow_mut();

        let Some(stream) = source.open_part(part)? else {
            debug!("{} not found, using default styles", part);
            return Ok(StylesState::Absent {
                default: Style::default(),
            });
        };

        debug!("extracting styles from {}", part);
        let registry = read_styles(&mut NodeCursor::from_read(stream))?;
        debug!(
            "extracted {} number formats, {} fonts, {} fills, {} cell styles",
            registry.number_format_count(),
            registry.font_count(),
            registry.fill_count(),
            registry.style_count()
        );

        Ok(StylesState::Ready(registry))
    }
}

impl<S> std::fmt::Debug for StyleResolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state.get() {
            None => "uninitialized",
            Some(StylesState::Ready(_)) => "ready",
            Some(StylesState::Absent { .. }) => "absent",
            Some(StylesState::Failed(_)) => "failed",
        };
        f.debug_struct("StyleResolver")
            .field("options", &self.options)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
