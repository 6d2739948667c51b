//! Resolved cell styles and their components
//!
//! A [`Style`] is what a style index resolves to: a [`FontStyle`], an
//! optional background taken from a [`FillStyle`], and an optional display
//! format code taken from a [`NumberFormat`] or the built-in date table.

mod color;
mod fill;
mod font;
mod number_format;

pub use color::Color;
pub use fill::FillStyle;
pub use font::{FontStyle, DEFAULT_FONT_FAMILY, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
pub use number_format::{
    builtin_date_format, is_builtin_date_format, is_date_format_code, NumberFormat,
    BUILTIN_DATE_FORMATS,
};

/// Resolved cell style
///
/// A style is self-contained: the font, background and format code have been
/// copied out of the registries they were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Copied from the referenced font when `applyFont` is set
    pub font: FontStyle,
    /// Background color (`None` when no solid fill applies)
    pub background: Option<Color>,
    /// Display format code, if the style carries a resolvable number format
    pub format_code: Option<String>,
}

impl Style {
    /// Unstyled default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = name.into();
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set number format code
    pub fn format_code<S: Into<String>>(mut self, code: S) -> Self {
        self.format_code = Some(code.into());
        self
    }

    /// Check if this is the unstyled default
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }
}
