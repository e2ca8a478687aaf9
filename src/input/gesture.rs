//! Gesture state machine: pointer events to path edits.

use crate::draw::{
    Geometry, PathCommand, PathEntry, Point, ShapeKind, StrokeStyle, check_geometry,
    derive_geometry,
};
use crate::surface::SurfaceError;

/// Pointer movements smaller than this on both axes are ignored as jitter.
pub const TOUCH_TOLERANCE: f64 = 4.0;

/// Current gesture state.
///
/// A gesture is `Active` from pointer-down until pointer-up; at most one gesture is
/// ever active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer is down
    #[default]
    Idle,
    /// A gesture is drawing into the top-most path
    Active {
        /// Shape captured at gesture start
        shape: ShapeKind,
        /// Where the pointer went down; fixed for the whole gesture
        anchor: Point,
        /// Last accepted pointer position (stays at the anchor for parametric shapes)
        last: Point,
    },
}

impl GestureState {
    fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Active { .. } => "active",
        }
    }
}

/// Converts pointer events into edits of the path being drawn.
///
/// The tracker never owns the path: the surface keeps it in its frame and hands the
/// tracker a mutable reference for each `motion` and `end` call.
#[derive(Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    /// Begins a gesture and returns the path it will draw into.
    ///
    /// The path starts as a single `MoveTo(point)`. The caller is expected to append it
    /// to the frame straight away so it is visible while being drawn.
    ///
    /// # Errors
    /// `UnexpectedState` if a gesture is already active; the tracker is unchanged.
    pub fn start(
        &mut self,
        point: Point,
        style: StrokeStyle,
        shape: ShapeKind,
    ) -> Result<PathEntry, SurfaceError> {
        if self.is_active() {
            return Err(self.unexpected("gesture start"));
        }

        self.state = GestureState::Active {
            shape,
            anchor: point,
            last: point,
        };
        log::debug!("Gesture started at ({:.1}, {:.1}) with {:?}", point.x, point.y, shape);

        Ok(PathEntry {
            style,
            shape,
            geometry: Geometry::starting_at(point),
        })
    }

    /// Handles a pointer move of the active gesture.
    ///
    /// Returns `Ok(true)` when the path changed and `Ok(false)` when the move was
    /// filtered out by [`TOUCH_TOLERANCE`].
    ///
    /// # Errors
    /// `UnexpectedState` if no gesture is active.
    pub fn motion(&mut self, point: Point, path: &mut PathEntry) -> Result<bool, SurfaceError> {
        let GestureState::Active {
            shape,
            anchor,
            last,
        } = &mut self.state
        else {
            return Err(self.unexpected("gesture move"));
        };

        let dx = (point.x - last.x).abs();
        let dy = (point.y - last.y).abs();
        if dx < TOUCH_TOLERANCE && dy < TOUCH_TOLERANCE {
            return Ok(false);
        }

        if shape.is_parametric() {
            path.geometry = derive_geometry(*shape, *anchor, point);
        } else {
            path.geometry.push(PathCommand::QuadTo {
                control: *last,
                end: last.midpoint(point),
            });
            *last = point;
        }

        Ok(true)
    }

    /// Finishes the active gesture.
    ///
    /// Parametric shapes are rebuilt one last time from the release point, so the
    /// committed outline matches it even when the final move was filtered. Freehand
    /// strokes are left as they are.
    ///
    /// # Errors
    /// `UnexpectedState` if no gesture is active.
    pub fn end(&mut self, point: Point, path: &mut PathEntry) -> Result<(), SurfaceError> {
        let GestureState::Active { shape, anchor, .. } = self.state else {
            return Err(self.unexpected("gesture end"));
        };

        if shape.is_parametric() {
            path.geometry = derive_geometry(shape, anchor, point);
            if let Err(err) = check_geometry(shape, anchor, point) {
                log::debug!("Committing degenerate shape: {err}");
            }
        }

        self.state = GestureState::Idle;
        log::debug!(
            "Gesture ended at ({:.1}, {:.1}), {} path commands",
            point.x,
            point.y,
            path.geometry.len()
        );
        Ok(())
    }

    /// Abandons the active gesture without touching any path.
    ///
    /// Returns whether a gesture was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = GestureState::Idle;
        was_active
    }

    fn unexpected(&self, operation: &'static str) -> SurfaceError {
        SurfaceError::UnexpectedState {
            operation,
            state: self.state.name(),
        }
    }
}
