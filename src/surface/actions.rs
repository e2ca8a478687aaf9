use crate::draw::style::clamp_width;
use crate::draw::{BrushSize, Color, Filter, PathEntry, ShapeKind};
use log::{debug, warn};

use super::DrawingSurface;

impl DrawingSurface {
    /// Sets the color of subsequent paths. Alpha is forced to opaque.
    pub fn select_color(&mut self, color: Color) {
        self.style.color = color.opaque();
        self.needs_redraw = true;
        debug!("Selected color {:?}", self.style.color);
    }

    /// Sets the stroke width of subsequent paths.
    ///
    /// Widths outside 1.0-100.0 are clamped. NaN and infinite widths are ignored.
    pub fn select_stroke_width(&mut self, width: f64) {
        let Some(clamped) = clamp_width(width) else {
            warn!("Ignoring invalid stroke width {}", width);
            return;
        };
        if clamped != width {
            warn!("Stroke width {:.1} clamped to {:.1}", width, clamped);
        }

        self.style.width = clamped;
        self.needs_redraw = true;
        debug!("Selected width {:.1}", clamped);
    }

    /// Selects one of the configured brush size presets.
    pub fn select_size(&mut self, size: BrushSize) {
        let width = self.sizes.width_for(size);
        debug!("Selected size {:?}", size);
        self.select_stroke_width(width);
    }

    pub fn select_filter(&mut self, filter: Filter) {
        self.style.filter = filter;
        self.needs_redraw = true;
        debug!("Selected filter {:?}", filter);
    }

    pub fn select_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
        self.needs_redraw = true;
        debug!("Selected shape {:?}", shape);
    }

    /// Changes the background color until the next clear or undo.
    pub fn select_background(&mut self, color: Color) {
        self.background = color.opaque();
        self.needs_redraw = true;
        debug!("Selected background {:?}", self.background);
    }

    /// Resets the filter to none and the shape to freehand. Color and width are kept.
    pub fn reset_to_defaults(&mut self) {
        self.style.filter = Filter::None;
        self.shape = ShapeKind::Freehand;
        self.needs_redraw = true;
    }

    /// Removes every path and restores the default background, filter and shape.
    ///
    /// An active gesture is abandoned along with its path.
    pub fn clear(&mut self) {
        if self.tracker.cancel() {
            debug!("Clear abandoned the active gesture");
        }
        self.frame.clear();
        self.background = self.default_background;
        self.reset_to_defaults();
        debug!("Surface cleared");
    }

    /// Removes the most recent path and restores the default background, filter and
    /// shape.
    ///
    /// Does nothing at all when there are no paths. If a gesture is active, its path
    /// is the one removed and the gesture is abandoned.
    ///
    /// # Returns
    /// The removed path, if any.
    pub fn undo_last(&mut self) -> Option<PathEntry> {
        let removed = self.frame.undo()?;
        if self.tracker.cancel() {
            debug!("Undo abandoned the active gesture");
        }
        self.background = self.default_background;
        self.reset_to_defaults();
        debug!("Undid last path, {} remaining", self.frame.len());
        Some(removed)
    }
}
