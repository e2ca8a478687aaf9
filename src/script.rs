//! Replay scripts: a scripted sequence of commands and pointer events.
//!
//! A script stands in for the interactive front end. It sizes the viewport, then
//! feeds each step into a [`DrawingSurface`] in order:
//!
//! ```toml
//! width = 320
//! height = 240
//!
//! [[steps]]
//! action = "select-shape"
//! shape = "circle"
//!
//! [[steps]]
//! action = "stroke"
//! points = [[10.0, 10.0], [50.0, 10.0]]
//! ```

use crate::config::{ColorSpec, Config};
use crate::draw::{BrushSize, Color, Filter, Raster, ShapeKind, WHITE};
use crate::surface::{DrawingSurface, SurfaceError};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A parsed replay script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Steps replayed in order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One replay step, tagged by its `action` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    SelectColor { color: ColorSpec },
    SelectWidth { width: f64 },
    SelectSize { size: BrushSize },
    SelectFilter { filter: Filter },
    SelectShape { shape: ShapeKind },
    SelectBackground { color: ColorSpec },
    /// Filter back to none, shape back to freehand
    Reset,
    Clear,
    Undo,
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// A whole gesture: down at the first point, moves through the rest, up at the last
    Stroke { points: Vec<[f64; 2]> },
}

impl FromStr for Script {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Invalid replay script")
    }
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let script: Script = contents
            .parse()
            .with_context(|| format!("Failed to parse script {}", path.display()))?;

        info!(
            "Loaded script {} ({} steps, {}x{})",
            path.display(),
            script.steps.len(),
            script.width,
            script.height
        );
        Ok(script)
    }

    /// Feeds every step into `surface`.
    ///
    /// Steps the surface rejects (out-of-sequence pointer events, the path limit,
    /// unknown colors) are logged and skipped, the same way an interactive front end
    /// drops events it cannot use.
    ///
    /// # Returns
    /// The number of skipped steps.
    pub fn replay(&self, surface: &mut DrawingSurface) -> usize {
        let mut skipped = 0;
        for (index, step) in self.steps.iter().enumerate() {
            debug!("Step {}: {:?}", index + 1, step);
            if let Err(err) = apply_step(surface, step) {
                warn!("Skipping step {} ({:?}): {}", index + 1, step, err);
                skipped += 1;
            }
        }
        skipped
    }

    /// Replays the script on a fresh surface built from `config` and exports the
    /// resulting frame.
    pub fn render(&self, config: &Config) -> Result<Raster> {
        let mut surface = DrawingSurface::from_config(config);
        surface
            .set_viewport_size(self.width, self.height)
            .context("Failed to size the drawing surface")?;

        let skipped = self.replay(&mut surface);
        if skipped > 0 {
            warn!("{} of {} steps were skipped", skipped, self.steps.len());
        }
        if surface.is_gesture_active() {
            warn!("Script ended with an unfinished gesture; it is exported as drawn so far");
        }

        surface
            .export_frame()
            .context("Failed to export the drawing")
    }
}

#[derive(Debug, thiserror::Error)]
enum StepError {
    #[error("unknown color {0:?}")]
    UnknownColor(ColorSpec),
    #[error("stroke has no points")]
    EmptyStroke,
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

fn resolve_color(spec: &ColorSpec) -> Result<Color, StepError> {
    if spec.is_known() {
        Ok(spec.to_color(WHITE))
    } else {
        Err(StepError::UnknownColor(spec.clone()))
    }
}

fn apply_step(surface: &mut DrawingSurface, step: &Step) -> Result<(), StepError> {
    match step {
        Step::SelectColor { color } => surface.select_color(resolve_color(color)?),
        Step::SelectWidth { width } => surface.select_stroke_width(*width),
        Step::SelectSize { size } => surface.select_size(*size),
        Step::SelectFilter { filter } => surface.select_filter(*filter),
        Step::SelectShape { shape } => surface.select_shape(*shape),
        Step::SelectBackground { color } => surface.select_background(resolve_color(color)?),
        Step::Reset => surface.reset_to_defaults(),
        Step::Clear => surface.clear(),
        Step::Undo => {
            surface.undo_last();
        }
        Step::Down { x, y } => surface.on_gesture_start(*x, *y)?,
        Step::Move { x, y } => {
            surface.on_gesture_move(*x, *y)?;
        }
        Step::Up { x, y } => surface.on_gesture_end(*x, *y)?,
        Step::Stroke { points } => {
            let (&[x0, y0], rest) = points.split_first().ok_or(StepError::EmptyStroke)?;
            surface.on_gesture_start(x0, y0)?;
            for &[x, y] in rest {
                surface.on_gesture_move(x, y)?;
            }
            let [x1, y1] = rest.last().copied().unwrap_or([x0, y0]);
            surface.on_gesture_end(x1, y1)?;
        }
    }
    Ok(())
}
