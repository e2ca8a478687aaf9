//! Pointer input handling and the gesture state machine.
//!
//! This module turns a stream of pointer down/move/up events into edits of the
//! path being drawn: it filters jitter, smooths freehand strokes, and rebuilds
//! parametric shapes from the gesture anchor on every move.

pub mod events;
pub mod gesture;

// Re-export commonly used types at module level
pub use events::GestureEvent;
pub use gesture::{GestureState, GestureTracker, TOUCH_TOLERANCE};
