//! Library exports for the inkpad drawing surface.
//!
//! The drawing core lives in [`surface`]: it records pointer gestures as styled
//! paths, derives parametric shapes from gesture endpoints, and composites the
//! path list into a raster frame. The remaining modules carry configuration,
//! PNG export and the replay script format used by the command-line driver.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod surface;

pub use config::Config;
pub use surface::{DrawingSurface, SurfaceError};
