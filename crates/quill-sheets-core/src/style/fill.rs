//! Fill component of a resolved style

use super::Color;

/// Background contribution of a declared fill
///
/// Only a solid pattern with an explicit foreground color produces a
/// background; every other pattern collapses to [`FillStyle::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    #[default]
    None,
    Solid { color: Color },
}

impl FillStyle {
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Background color carried by this fill, if any
    pub fn color(&self) -> Option<Color> {
        match *self {
            FillStyle::None => None,
            FillStyle::Solid { color } => Some(color),
        }
    }
}
