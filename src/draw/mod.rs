//! Rendering primitives, path geometry and shape derivation (Cairo-based).
//!
//! This module defines the core drawing types of the surface:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StrokeStyle`]: color, width and [`Filter`] attached to each path
//! - [`ShapeKind`] and [`derive_geometry`]: parametric shapes from two points
//! - [`Frame`]: ordered list of [`PathEntry`] values, back to front
//! - [`render_frame`] and [`Raster`]: compositing and owned frame snapshots

pub mod color;
pub mod filter;
pub mod frame;
pub mod path;
pub mod raster;
pub mod render;
pub mod shape;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::{Frame, PathEntry};
pub use path::{Bounds, Geometry, PathCommand, Point};
pub use raster::Raster;
pub use render::{RenderError, render_frame};
pub use shape::{ShapeKind, check_geometry, derive_geometry};
pub use style::{BrushSize, Filter, StrokeStyle};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
