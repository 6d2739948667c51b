//! Font component of a resolved style

use std::hash::{Hash, Hasher};

use super::Color;

/// Font name used when a font declares none
pub const DEFAULT_FONT_NAME: &str = "Arial";
/// Font size in points used when a font declares none
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
/// Font family classification used when a font declares none (2 = swiss)
pub const DEFAULT_FONT_FAMILY: u32 = 2;

/// A declared font
///
/// Fonts have no id of their own; cell styles refer to them by position
/// within the `fonts` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    pub name: String,
    /// Size in points
    pub size: f64,
    /// OOXML family classification (1 = roman, 2 = swiss, ...)
    pub family: u32,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    /// Any underline variant
    pub underline: bool,
    pub strikethrough: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.into(),
            size: DEFAULT_FONT_SIZE,
            family: DEFAULT_FONT_FAMILY,
            color: Color::BLACK,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
        }
    }
}

impl FontStyle {
    /// Default font
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

// Sizes come from parsed attributes and are never NaN
impl Eq for FontStyle {}

impl Hash for FontStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (&self.name, self.size.to_bits(), self.family, self.color).hash(state);
        [self.bold, self.italic, self.underline, self.strikethrough].hash(state);
    }
}
