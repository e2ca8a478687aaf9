//! Surface state and construction.

use super::SurfaceError;
use crate::config::{Config, SizeConfig};
use crate::draw::style::{DEFAULT_STROKE_WIDTH, clamp_width};
use crate::draw::{Color, Frame, PathEntry, RED, ShapeKind, StrokeStyle, WHITE};
use crate::input::{GestureState, GestureTracker};
use log::{info, warn};

/// The drawing surface.
///
/// Holds the committed paths (back to front), the style and shape the next gesture
/// will use, the background color and the gesture tracker. The path being drawn by an
/// active gesture is always the last entry of the frame.
pub struct DrawingSurface {
    /// All paths, in insertion (and z) order
    pub(crate) frame: Frame,
    /// Current background color
    pub(crate) background: Color,
    /// Background restored by clear and undo
    pub(crate) default_background: Color,
    /// Style copied into the next path
    pub(crate) style: StrokeStyle,
    /// Shape used by the next gesture
    pub(crate) shape: ShapeKind,
    /// Widths of the brush size presets
    pub(crate) sizes: SizeConfig,
    /// Maximum number of paths (0 = unlimited)
    pub(crate) max_paths: usize,
    /// Pointer gesture state machine
    pub(crate) tracker: GestureTracker,
    /// Viewport width in pixels (0 until sized)
    pub(crate) width: u32,
    /// Viewport height in pixels (0 until sized)
    pub(crate) height: u32,
    /// Render target, allocated by `set_viewport_size`
    pub(crate) canvas: Option<cairo::ImageSurface>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl DrawingSurface {
    /// Creates a surface with the built-in defaults: red, 20 px, no filter, freehand,
    /// on white.
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::default(), WHITE, SizeConfig::default(), 0)
    }

    /// Creates a surface from user configuration.
    ///
    /// The configuration is expected to be validated already; an unusable width
    /// still falls back to the default.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let width = clamp_width(drawing.default_width).unwrap_or(DEFAULT_STROKE_WIDTH);
        let style = StrokeStyle {
            color: drawing.default_color.to_color(RED),
            width,
            ..StrokeStyle::default()
        };
        let background = drawing.background_color.to_color(WHITE);

        Self::with_style(style, background, config.sizes.clone(), drawing.max_paths)
    }

    /// Creates a surface with an explicit initial style.
    ///
    /// # Arguments
    /// * `style` - Style of the first gesture
    /// * `background` - Background color, also the one clear and undo restore
    /// * `sizes` - Widths of the brush size presets
    /// * `max_paths` - Maximum number of paths kept (0 = unlimited)
    pub fn with_style(
        style: StrokeStyle,
        background: Color,
        sizes: SizeConfig,
        max_paths: usize,
    ) -> Self {
        Self {
            frame: Frame::new(),
            background: background.opaque(),
            default_background: background.opaque(),
            style: StrokeStyle {
                color: style.color.opaque(),
                ..style
            },
            shape: ShapeKind::Freehand,
            sizes,
            max_paths,
            tracker: GestureTracker::new(),
            width: 0,
            height: 0,
            canvas: None,
            needs_redraw: true,
        }
    }

    /// Sets the viewport size and allocates the render target.
    ///
    /// Must be called before the first render. A zero dimension releases the target,
    /// so rendering fails with [`SurfaceError::ExportUnavailable`] until a usable size
    /// is set again. Paths are kept across resizes.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.width = width;
        self.height = height;
        self.canvas = None;
        self.needs_redraw = true;

        if width == 0 || height == 0 {
            warn!("Viewport resized to {}x{}, nothing can be rendered", width, height);
            return Ok(());
        }

        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(SurfaceError::ExportUnavailable { width, height });
        };
        let canvas = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)
            .map_err(crate::draw::RenderError::from)?;
        self.canvas = Some(canvas);

        info!("Viewport set to {}x{}", width, height);
        Ok(())
    }

    /// Returns the viewport size as `(width, height)`.
    pub fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All paths, back to front. Includes the path of an active gesture.
    pub fn paths(&self) -> &[PathEntry] {
        self.frame.paths()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Style the next gesture will use.
    pub fn current_style(&self) -> StrokeStyle {
        self.style
    }

    /// Shape the next gesture will draw.
    pub fn current_shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn gesture_state(&self) -> GestureState {
        self.tracker.state()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Brush size preset widths in use.
    pub fn sizes(&self) -> &SizeConfig {
        &self.sizes
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}
