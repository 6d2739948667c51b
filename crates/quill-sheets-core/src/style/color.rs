//! Color representation

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Color as it appears in a styles part
///
/// Explicit `rgb` values are kept as ARGB; theme and indexed references are
/// carried through unresolved since no theme part is consulted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// `auto="1"`
    #[default]
    Auto,
    /// `rgb="AARRGGBB"`
    Argb { a: u8, r: u8, g: u8, b: u8 },
    /// `theme="n"` with `tint` scaled to whole percent
    Theme { index: u8, tint: i8 },
    /// `indexed="n"` into the legacy 64-entry palette
    Indexed(u8),
}

impl Color {
    /// Fully opaque black, the font color used when none is declared
    pub const BLACK: Color = Color::Argb {
        a: 0xFF,
        r: 0,
        g: 0,
        b: 0,
    };

    /// Create an opaque RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a: 0xFF, r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (`RRGGBB` or `AARRGGBB`, optional `#`)
    ///
    /// Six-digit values are treated as fully opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// The `AARRGGBB` string for explicit colors, `None` for references
    pub fn argb_hex(&self) -> Option<String> {
        matches!(self, Color::Argb { .. }).then(|| self.to_string())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Argb { a, r, g, b } => write!(f, "{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {}%)", index, tint),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}
