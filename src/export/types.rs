//! Error type for frame export.

use thiserror::Error;

/// Errors that can occur while encoding or saving an exported frame.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not wrap frame pixels: {0}")]
    Surface(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save drawing: {0}")]
    Io(#[from] std::io::Error),
}
