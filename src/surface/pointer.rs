use crate::draw::Point;
use crate::input::GestureEvent;
use log::warn;

use super::{DrawingSurface, SurfaceError};

impl DrawingSurface {
    /// Processes a pointer-down event.
    ///
    /// Appends a new path carrying a copy of the current style and shape, so it is
    /// visible while being drawn.
    ///
    /// # Errors
    /// - `UnexpectedState` if a gesture is already active
    /// - `PathLimit` if the configured path limit is reached
    ///
    /// Either way, nothing is modified.
    pub fn on_gesture_start(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let path = self
            .tracker
            .start(Point::new(x, y), self.style, self.shape)
            .inspect_err(|err| warn!("Rejected pointer down: {err}"))?;

        if !self.frame.try_add_path(path, self.max_paths) {
            self.tracker.cancel();
            let err = SurfaceError::PathLimit {
                max: self.max_paths,
            };
            warn!("Rejected pointer down: {err}");
            return Err(err);
        }

        self.needs_redraw = true;
        Ok(())
    }

    /// Processes a pointer move of the active gesture.
    ///
    /// # Returns
    /// `Ok(true)` if the path changed, `Ok(false)` if the move was within the touch
    /// tolerance.
    ///
    /// # Errors
    /// `UnexpectedState` if no gesture is active.
    pub fn on_gesture_move(&mut self, x: f64, y: f64) -> Result<bool, SurfaceError> {
        let point = Point::new(x, y);
        let changed = match self.frame.last_mut() {
            Some(path) => self.tracker.motion(point, path),
            None => Err(SurfaceError::UnexpectedState {
                operation: "gesture move",
                state: "idle",
            }),
        }
        .inspect_err(|err| warn!("Rejected pointer move: {err}"))?;

        if changed {
            self.needs_redraw = true;
        }
        Ok(changed)
    }

    /// Processes a pointer-up event, finishing the active gesture.
    ///
    /// # Errors
    /// `UnexpectedState` if no gesture is active.
    pub fn on_gesture_end(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let point = Point::new(x, y);
        match self.frame.last_mut() {
            Some(path) => self.tracker.end(point, path),
            None => Err(SurfaceError::UnexpectedState {
                operation: "gesture end",
                state: "idle",
            }),
        }
        .inspect_err(|err| warn!("Rejected pointer up: {err}"))?;

        self.needs_redraw = true;
        Ok(())
    }

    /// Dispatches a pointer event to the matching gesture handler.
    pub fn handle_event(&mut self, event: GestureEvent) -> Result<(), SurfaceError> {
        let Point { x, y } = event.point();
        match event {
            GestureEvent::Down(_) => self.on_gesture_start(x, y),
            GestureEvent::Move(_) => self.on_gesture_move(x, y).map(|_| ()),
            GestureEvent::Up(_) => self.on_gesture_end(x, y),
        }
    }
}
