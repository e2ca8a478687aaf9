use crate::draw::{RenderError, ShapeKind};
use thiserror::Error;

/// Errors reported by [`super::DrawingSurface`] and the gesture tracker.
///
/// None of these leave the surface half-modified: a rejected call changes nothing.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Degenerate input for a parametric shape. Diagnostic only, the shape is still
    /// derived and stored.
    #[error("Degenerate {kind:?}: {reason}")]
    InvalidGeometry {
        kind: ShapeKind,
        reason: &'static str,
    },

    /// A gesture call arrived out of sequence.
    #[error("Unexpected {operation} while gesture is {state}")]
    UnexpectedState {
        operation: &'static str,
        state: &'static str,
    },

    /// The viewport has not been sized, or has no area.
    #[error("Cannot render a {width}x{height} viewport")]
    ExportUnavailable { width: u32, height: u32 },

    /// The configured path limit is reached.
    #[error("Path limit of {max} reached")]
    PathLimit { max: usize },

    #[error(transparent)]
    Render(#[from] RenderError),
}
