//! Frame container for the ordered list of recorded paths.

use super::path::Geometry;
use super::shape::ShapeKind;
use super::style::StrokeStyle;

/// A recorded path: its style, the shape that produced it, and its outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// Style captured when the gesture started
    pub style: StrokeStyle,
    /// Shape kind captured when the gesture started
    pub shape: ShapeKind,
    /// Drawing commands making up the outline
    pub geometry: Geometry,
}

/// Container for all paths on the surface.
///
/// Insertion order is z-order: the first path is the bottom layer, the last one is
/// drawn on top. The path being built by an active gesture is already part of the
/// frame, as its last element.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    paths: Vec<PathEntry>,
}

impl Frame {
    /// Creates a new empty frame with no paths.
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Removes all paths from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Attempts to add a path, enforcing a maximum path count when `max` > 0.
    ///
    /// Returns `true` if the path was added, `false` if the limit would be exceeded.
    pub fn try_add_path(&mut self, path: PathEntry, max: usize) -> bool {
        if max == 0 || self.paths.len() < max {
            self.paths.push(path);
            true
        } else {
            false
        }
    }

    /// Removes and returns the most recently added path, if any.
    pub fn undo(&mut self) -> Option<PathEntry> {
        self.paths.pop()
    }

    /// Mutable access to the top-most path.
    pub fn last_mut(&mut self) -> Option<&mut PathEntry> {
        self.paths.last_mut()
    }

    pub fn paths(&self) -> &[PathEntry] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
