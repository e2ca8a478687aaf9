//! Stroke style attached to every recorded path.

use super::color::{Color, RED};
use serde::{Deserialize, Serialize};

/// Initial stroke width before any size is selected.
pub const DEFAULT_STROKE_WIDTH: f64 = 20.0;

/// Smallest accepted stroke width in pixels.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Largest accepted stroke width in pixels.
pub const MAX_STROKE_WIDTH: f64 = 100.0;

/// Post-processing effect applied to a stroke's mask when compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    /// Crisp stroke
    #[default]
    None,
    /// Directional relief lit from a fixed light vector
    Emboss,
    /// Fixed-radius normal blur
    Blur,
}

/// Preset brush sizes offered by the size menu.
///
/// The pixel width of each preset comes from [`crate::config::SizeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrushSize {
    Small,
    Normal,
    Big,
}

/// Color, width and filter of a single path.
///
/// A copy of the surface's current style is taken at gesture start; changing the
/// selection afterwards never touches paths that already exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color (always opaque)
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
    /// Mask filter applied when compositing
    pub filter: Filter,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: RED,
            width: DEFAULT_STROKE_WIDTH,
            filter: Filter::None,
        }
    }
}

/// Clamps a stroke width into the accepted range.
///
/// Returns `None` for NaN or infinite input.
pub fn clamp_width(width: f64) -> Option<f64> {
    if width.is_finite() {
        Some(width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_red_twenty_pixels_unfiltered() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, RED);
        assert_eq!(style.width, 20.0);
        assert_eq!(style.filter, Filter::None);
    }

    #[test]
    fn clamp_width_limits_range_and_rejects_nan() {
        assert_eq!(clamp_width(0.0), Some(MIN_STROKE_WIDTH));
        assert_eq!(clamp_width(12.5), Some(12.5));
        assert_eq!(clamp_width(1e6), Some(MAX_STROKE_WIDTH));
        assert_eq!(clamp_width(f64::NAN), None);
        assert_eq!(clamp_width(f64::INFINITY), None);
    }
}
