//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Any color string understood by `Color::from_str`
/// line_color = "#111111"
/// shade_color = "rgba(0, 0, 0, 0.7)"
/// fill_color = "white"
///
/// # Custom RGB color (0-255 per component)
/// circle_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex (`#rgb`, `#rrggbb`, ...), `rgb()`/`rgba()` or a named color
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings that fail to parse fall back to `fallback` with a warning. RGB
    /// arrays are converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|err| {
                warn!("{}, using {}", err, fallback);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true if this spec resolves to a color without falling back.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => name.parse::<Color>().is_ok(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}
