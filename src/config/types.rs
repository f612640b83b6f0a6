//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::color::{INK, SHADE, WHITE};
use crate::draw::{ArcStyle, Color, LineStyle, OutlineStyle, TextAlign, TextStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default styles handed to the drawing primitives.
///
/// Every field defaults to the value the primitives use on their own, so an
/// empty `[drawing]` table changes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Line color
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Line width in pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f64,

    /// Rectangle outline color
    #[serde(default = "default_white")]
    pub outline_color: ColorSpec,

    /// Rectangle outline width in pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_outline_thickness")]
    pub outline_thickness: f64,

    /// Filled rectangle color
    #[serde(default = "default_white")]
    pub fill_color: ColorSpec,

    /// Overlay drawn around a spotlighted rectangle
    #[serde(default = "default_shade_color")]
    pub shade_color: ColorSpec,

    /// Filled circle color
    #[serde(default = "default_white")]
    pub circle_color: ColorSpec,

    /// Arc stroke color
    #[serde(default = "default_white")]
    pub arc_color: ColorSpec,

    /// Arc stroke width in pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_arc_thickness")]
    pub arc_thickness: f64,

    /// Text color
    #[serde(default = "default_white")]
    pub text_color: ColorSpec,

    /// Font family name for text rendering (e.g., "Arial", "Sans")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Text size in pixels (valid range: 4.0 - 512.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Render text in bold
    #[serde(default)]
    pub font_bold: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            line_color: default_line_color(),
            line_thickness: default_line_thickness(),
            outline_color: default_white(),
            outline_thickness: default_outline_thickness(),
            fill_color: default_white(),
            shade_color: default_shade_color(),
            circle_color: default_white(),
            arc_color: default_white(),
            arc_thickness: default_arc_thickness(),
            text_color: default_white(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_bold: false,
        }
    }
}

impl DrawingConfig {
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            color: self.line_color.to_color(INK),
            thickness: self.line_thickness,
        }
    }

    pub fn outline_style(&self) -> OutlineStyle {
        OutlineStyle {
            color: self.outline_color.to_color(WHITE),
            thickness: self.outline_thickness,
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color.to_color(WHITE)
    }

    pub fn shade_color(&self) -> Color {
        self.shade_color.to_color(SHADE)
    }

    pub fn circle_color(&self) -> Color {
        self.circle_color.to_color(WHITE)
    }

    pub fn arc_style(&self) -> ArcStyle {
        ArcStyle {
            color: self.arc_color.to_color(WHITE),
            thickness: self.arc_thickness,
        }
    }

    /// Text style with the given alignment.
    pub fn text_style(&self, align: TextAlign) -> TextStyle {
        TextStyle {
            color: self.text_color.to_color(WHITE),
            bold: self.font_bold,
            align,
            font_family: self.font_family.clone(),
        }
    }
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("#111111".to_string())
}

fn default_line_thickness() -> f64 {
    25.0
}

fn default_white() -> ColorSpec {
    ColorSpec::Name("#ffffff".to_string())
}

fn default_outline_thickness() -> f64 {
    1.0
}

fn default_shade_color() -> ColorSpec {
    ColorSpec::Name("rgba(0, 0, 0, 0.7)".to_string())
}

fn default_arc_thickness() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f64 {
    16.0
}
