//! Drawing surface: the ordered path list, the current selection and the render step.
//!
//! [`DrawingSurface`] is the single owner of everything drawn. Platform glue talks to
//! it through the command methods (`select_*`, `clear`, `undo_last`), forwards pointer
//! events to it, and pulls composited frames back with `render` or `export_frame`.

mod actions;
mod error;
mod pointer;
mod render;
mod state;

pub use error::SurfaceError;
pub use state::DrawingSurface;
