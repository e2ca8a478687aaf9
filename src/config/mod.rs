//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkpad/config.toml`. Settings include the initial stroke style,
//! brush size presets, the background color and the export destination.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig, SizeConfig};

use crate::draw::style::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 20.0
/// background_color = "white"
/// max_paths = 0
///
/// [sizes]
/// small = 5.0
/// normal = 10.0
/// big = 15.0
///
/// [export]
/// save_directory = "~/Pictures/Inkpad"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial stroke style and background
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Brush size presets
    #[serde(default)]
    pub sizes: SizeConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width` and every size preset: 1.0 - 100.0
    /// - colors: known names or RGB triples
    /// - `filename_template`: non-empty
    pub fn validate_and_clamp(&mut self) {
        clamp_width("drawing.default_width", &mut self.drawing.default_width, 20.0);
        clamp_width("sizes.small", &mut self.sizes.small, 5.0);
        clamp_width("sizes.normal", &mut self.sizes.normal, 10.0);
        clamp_width("sizes.big", &mut self.sizes.big, 15.0);

        let defaults = DrawingConfig::default();
        if !self.drawing.default_color.is_known() {
            log::warn!(
                "Invalid default_color {:?}, falling back to {:?}",
                self.drawing.default_color,
                defaults.default_color
            );
            self.drawing.default_color = defaults.default_color;
        }
        if !self.drawing.background_color.is_known() {
            log::warn!(
                "Invalid background_color {:?}, falling back to {:?}",
                self.drawing.background_color,
                defaults.background_color
            );
            self.drawing.background_color = defaults.background_color;
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to the default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
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
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_width(name: &str, value: &mut f64, default: f64) {
    if !value.is_finite() {
        log::warn!("Invalid {name} {value}, falling back to {default:.1}");
        *value = default;
    } else if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&*value) {
        log::warn!(
            "Invalid {name} {value:.1}, clamping to {MIN_STROKE_WIDTH:.1}-{MAX_STROKE_WIDTH:.1} range"
        );
        *value = value.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }
}
