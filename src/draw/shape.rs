//! Shape kinds and the pure geometry derivation for parametric shapes.

use super::path::{Bounds, Geometry, PathCommand, Point};
use crate::surface::SurfaceError;
use serde::{Deserialize, Serialize};

/// What a gesture draws.
///
/// Freehand strokes grow with every accepted pointer move. Every other kind is
/// rebuilt from the gesture anchor and the live pointer position on each move, which
/// gives a rubber-band preview without a separate preview layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Smoothed stroke following the pointer (default)
    #[default]
    Freehand,
    /// Axis-aligned rectangle spanning anchor and pointer
    Rectangle,
    /// Circle centered on the anchor through the pointer
    Circle,
    /// Right triangle with the right angle at `(pointer.x, anchor.y)`
    Triangle,
    /// Straight segment from anchor to pointer
    Line,
}

impl ShapeKind {
    /// Returns true for shapes rebuilt from scratch on every move.
    pub fn is_parametric(self) -> bool {
        !matches!(self, ShapeKind::Freehand)
    }
}

/// Derives the outline of `kind` from the gesture anchor and the current point.
///
/// Identical inputs always produce identical geometry. Degenerate input (equal
/// points, or points sharing a coordinate) yields a degenerate outline rather than
/// an error; see [`check_geometry`] for a diagnostic.
///
/// Freehand strokes are built incrementally by the gesture tracker, so for
/// [`ShapeKind::Freehand`] this only returns the starting `MoveTo`.
pub fn derive_geometry(kind: ShapeKind, anchor: Point, current: Point) -> Geometry {
    match kind {
        ShapeKind::Freehand => Geometry::starting_at(anchor),
        ShapeKind::Rectangle => {
            [PathCommand::AddRect(Bounds::from_corners(anchor, current))]
                .into_iter()
                .collect()
        }
        ShapeKind::Circle => [PathCommand::AddCircle {
            center: anchor,
            radius: anchor.distance(current),
        }]
        .into_iter()
        .collect(),
        ShapeKind::Triangle => [
            PathCommand::MoveTo(anchor),
            PathCommand::LineTo(Point::new(current.x, anchor.y)),
            PathCommand::LineTo(current),
            PathCommand::LineTo(anchor),
            PathCommand::Close,
        ]
        .into_iter()
        .collect(),
        ShapeKind::Line => [PathCommand::MoveTo(anchor), PathCommand::LineTo(current)]
            .into_iter()
            .collect(),
    }
}

/// Reports whether `derive_geometry` would produce a degenerate outline.
///
/// This is purely diagnostic: the derived geometry is still valid to store and
/// render.
pub fn check_geometry(kind: ShapeKind, anchor: Point, current: Point) -> Result<(), SurfaceError> {
    let same_x = anchor.x == current.x;
    let same_y = anchor.y == current.y;

    let degenerate = match kind {
        ShapeKind::Freehand => false,
        ShapeKind::Circle | ShapeKind::Line => same_x && same_y,
        ShapeKind::Rectangle | ShapeKind::Triangle => same_x || same_y,
    };

    if degenerate {
        Err(SurfaceError::InvalidGeometry {
            kind,
            reason: if same_x && same_y {
                "anchor and release point coincide"
            } else {
                "anchor and release point share a coordinate"
            },
        })
    } else {
        Ok(())
    }
}
