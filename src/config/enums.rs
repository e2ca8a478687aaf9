//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to an opaque [`Color`].
    ///
    /// Unknown color names resolve to `fallback` with a warning.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true for RGB triples and known color names.
    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}
