//! Owned snapshot of a rendered frame.

use super::render::RenderError;
use crate::export::ExportError;

/// Immutable copy of a composited frame.
///
/// Pixels are cairo ARGB32: one native-endian `u32` per pixel with premultiplied
/// color, rows `stride` bytes apart. A `Raster` owns its pixels, so it can outlive
/// the surface that produced it or be handed to another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Copies the pixels of a cairo image surface.
    ///
    /// The surface must not be referenced by a live `cairo::Context`.
    pub fn from_surface(surface: &mut cairo::ImageSurface) -> Result<Self, RenderError> {
        let width = surface.width().max(0) as u32;
        let height = surface.height().max(0) as u32;
        let stride = surface.stride().max(0) as usize;
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw premultiplied ARGB32 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the un-premultiplied `[r, g, b, a]` value of a pixel.
    ///
    /// Returns `None` for coordinates outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let i = y as usize * self.stride + x as usize * 4;
        let bytes = self.data.get(i..i + 4)?;
        let argb = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let a = (argb >> 24) as u8;
        if a == 0 {
            return Some([0, 0, 0, 0]);
        }

        let unpremultiply = |c: u32| ((c & 0xff) * 255 + a as u32 / 2) / a as u32;
        Some([
            unpremultiply(argb >> 16) as u8,
            unpremultiply(argb >> 8) as u8,
            unpremultiply(argb) as u8,
            a,
        ])
    }

    /// Encodes the raster as a PNG image.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let surface = cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::ARgb32,
            self.width as i32,
            self.height as i32,
            self.stride as i32,
        )?;

        let mut png = Vec::new();
        surface.write_to_png(&mut png)?;
        Ok(png)
    }
}
