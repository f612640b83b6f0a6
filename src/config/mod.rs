//! Configuration file support for pixdraw.
//!
//! This module handles loading and validating default drawing styles from the
//! configuration file located at `~/.config/pixdraw/config.toml`.
//!
//! If no config file exists, the built-in defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::DrawingConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const THICKNESS_RANGE: (f64, f64) = (0.5, 200.0);
const FONT_SIZE_RANGE: (f64, f64) = (4.0, 512.0);

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// line_color = "#111111"
/// line_thickness = 25.0
/// shade_color = "rgba(0, 0, 0, 0.7)"
/// font_family = "Arial"
/// font_size = 16.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Default styles for the drawing primitives
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. Non-finite numbers (TOML allows `nan` and `inf`) are replaced by
    /// the field's default before clamping. Unparseable colors are reported here
    /// and replaced by their built-in default when resolved.
    ///
    /// Validated ranges:
    /// - `line_thickness`, `outline_thickness`, `arc_thickness`: 0.5 - 200.0
    /// - `font_size`: 4.0 - 512.0
    fn validate_and_clamp(&mut self) {
        let defaults = DrawingConfig::default();
        let drawing = &mut self.drawing;
        for (name, value, default) in [
            (
                "line_thickness",
                &mut drawing.line_thickness,
                defaults.line_thickness,
            ),
            (
                "outline_thickness",
                &mut drawing.outline_thickness,
                defaults.outline_thickness,
            ),
            (
                "arc_thickness",
                &mut drawing.arc_thickness,
                defaults.arc_thickness,
            ),
        ] {
            clamp_field(name, value, default, THICKNESS_RANGE);
        }
        clamp_field(
            "font_size",
            &mut drawing.font_size,
            defaults.font_size,
            FONT_SIZE_RANGE,
        );

        if drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Arial'");
            drawing.font_family = "Arial".to_string();
        }

        for (name, spec) in [
            ("line_color", &drawing.line_color),
            ("outline_color", &drawing.outline_color),
            ("fill_color", &drawing.fill_color),
            ("shade_color", &drawing.shade_color),
            ("circle_color", &drawing.circle_color),
            ("arc_color", &drawing.arc_color),
            ("text_color", &drawing.text_color),
        ] {
            if !spec.is_valid() {
                log::warn!("Invalid {} {:?}, the default will be used", name, spec);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixdraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_field(name: &str, value: &mut f64, default: f64, (min, max): (f64, f64)) {
    if !value.is_finite() {
        log::warn!("Invalid {} {}, using default {:.1}", name, *value, default);
        *value = default;
    }
    if !(min..=max).contains(value) {
        log::warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name,
            *value,
            min,
            max
        );
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{LineStyle, OutlineStyle, TextAlign, TextStyle};
    use std::io::Write;

    fn load_str(contents: &str) -> Result<Config> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        Config::load_from(file.path())
    }

    #[test]
    fn defaults_match_primitive_defaults() {
        let drawing = Config::default().drawing;
        assert_eq!(drawing.line_style(), LineStyle::default());
        assert_eq!(drawing.outline_style(), OutlineStyle::default());
        assert_eq!(drawing.text_style(TextAlign::Center), TextStyle::default());
        assert_eq!(drawing.shade_color().to_string(), "rgba(0,0,0,0.7)");
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(load_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = load_str(
            r#"
            [drawing]
            line_color = [255, 0, 0]
            font_family = "DejaVu Sans"
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.line_style().color.to_string(), "rgb(255,0,0)");
        assert_eq!(config.drawing.line_thickness, 25.0);
        assert_eq!(config.drawing.font_family, "DejaVu Sans");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = load_str(
            r#"
            [drawing]
            line_thickness = 1000.0
            outline_thickness = 0.0
            font_size = 1.0
            font_family = "  "
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.line_thickness, 200.0);
        assert_eq!(config.drawing.outline_thickness, 0.5);
        assert_eq!(config.drawing.font_size, 4.0);
        assert_eq!(config.drawing.font_family, "Arial");
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let config = load_str(
            r#"
            [drawing]
            line_thickness = nan
            arc_thickness = inf
            outline_thickness = -inf
            font_size = -nan
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.line_thickness, 25.0);
        assert_eq!(config.drawing.arc_thickness, 20.0);
        assert_eq!(config.drawing.outline_thickness, 1.0);
        assert_eq!(config.drawing.font_size, 16.0);
    }

    #[test]
    fn invalid_color_falls_back_to_default() {
        let config = load_str("[drawing]\nshade_color = \"smoke\"\n").unwrap();
        assert_eq!(config.drawing.shade_color(), crate::draw::SHADE);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = load_str("[drawing\nline_thickness = 3").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_drawing_fields() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("line_thickness"));
        assert!(schema.contains("shade_color"));
    }
}
