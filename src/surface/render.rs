use crate::draw::{Raster, render_frame};
use log::{debug, info};

use super::{DrawingSurface, SurfaceError};

impl DrawingSurface {
    /// Composites the current frame and clears the redraw flag.
    ///
    /// Paints the background, then every path in insertion order, including the path
    /// of an active gesture.
    ///
    /// # Errors
    /// `ExportUnavailable` if the viewport has not been given a usable size.
    pub fn render(&mut self) -> Result<Raster, SurfaceError> {
        let raster = self.compose()?;
        self.needs_redraw = false;
        Ok(raster)
    }

    /// Composites the current frame into an owned raster for saving or sharing.
    ///
    /// Unlike [`DrawingSurface::render`] this leaves the redraw flag alone; no drawing
    /// state changes.
    pub fn export_frame(&mut self) -> Result<Raster, SurfaceError> {
        let raster = self.compose()?;
        info!(
            "Exported {}x{} frame with {} paths",
            raster.width(),
            raster.height(),
            self.frame.len()
        );
        Ok(raster)
    }

    fn compose(&mut self) -> Result<Raster, SurfaceError> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(SurfaceError::ExportUnavailable {
                width: self.width,
                height: self.height,
            });
        };

        render_frame(canvas, self.background, self.frame.paths())?;
        let raster = Raster::from_surface(canvas)?;
        debug!("Composited {} paths", self.frame.len());
        Ok(raster)
    }
}
