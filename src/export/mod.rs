//! PNG export of rendered frames.
//!
//! Turns a [`Raster`](crate::draw::Raster) snapshot into a PNG file in the
//! configured export directory.

pub mod file;
pub mod types;

pub use file::{ensure_directory_exists, expand_tilde, generate_filename, save_png, write_png};
pub use types::ExportError;
