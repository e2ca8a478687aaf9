//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::BrushSize;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the initial style of the surface. Users change color and width at
/// runtime through the command interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial stroke color - either a named color (red, green, blue, yellow, orange,
    /// pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Background color restored by clear and undo
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,

    /// Maximum number of paths kept on the surface (0 = unlimited)
    #[serde(default)]
    pub max_paths: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            background_color: default_background(),
            max_paths: 0,
        }
    }
}

/// Pixel widths of the brush size presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SizeConfig {
    /// Width of the small brush (valid range: 1.0 - 100.0)
    #[serde(default = "default_small")]
    pub small: f64,

    /// Width of the normal brush (valid range: 1.0 - 100.0)
    #[serde(default = "default_normal")]
    pub normal: f64,

    /// Width of the big brush (valid range: 1.0 - 100.0)
    #[serde(default = "default_big")]
    pub big: f64,
}

impl SizeConfig {
    /// Returns the configured width of a preset.
    pub fn width_for(&self, size: BrushSize) -> f64 {
        match size {
            BrushSize::Small => self.small,
            BrushSize::Normal => self.normal,
            BrushSize::Big => self.big,
        }
    }
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            small: default_small(),
            normal: default_normal(),
            big: default_big(),
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported drawings are written to (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers; `.png` is appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_width() -> f64 {
    20.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_small() -> f64 {
    5.0
}

fn default_normal() -> f64 {
    10.0
}

fn default_big() -> f64 {
    15.0
}

fn default_save_directory() -> String {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join("Inkpad")
        .to_string_lossy()
        .into_owned()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
