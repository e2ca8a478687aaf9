//! Cairo-based compositing of recorded paths.

use super::color::Color;
use super::filter;
use super::frame::PathEntry;
use super::path::{Geometry, PathCommand, Point};
use super::style::Filter;
use thiserror::Error;

/// Errors raised while compositing a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo drawing failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are not accessible: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Composites a full frame onto `surface`.
///
/// Paints `background` over the whole surface, then draws every path in order so
/// later paths land on top of earlier ones.
pub fn render_frame(
    surface: &cairo::ImageSurface,
    background: Color,
    paths: &[PathEntry],
) -> Result<(), RenderError> {
    let ctx = cairo::Context::new(surface)?;
    render_background(&ctx, background)?;

    let (width, height) = (surface.width(), surface.height());
    for path in paths {
        match path.style.filter {
            Filter::None => render_path(&ctx, path),
            filter => render_filtered_path(&ctx, path, filter, width, height)?,
        }
    }

    Ok(())
}

/// Fills the whole target with an opaque background color.
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), RenderError> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.paint()?;
    ctx.restore()?;
    Ok(())
}

/// Strokes a single path with its own color and width.
///
/// Uses round caps and joins so freehand strokes look continuous. A failed stroke
/// leaves this path out of the frame.
pub fn render_path(ctx: &cairo::Context, path: &PathEntry) {
    if let Err(err) = stroke_path(ctx, path) {
        log::warn!("Failed to stroke {:?} path: {}", path.shape, err);
    }
}

fn stroke_path(ctx: &cairo::Context, path: &PathEntry) -> Result<(), cairo::Error> {
    let color = path.style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(path.style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    append_geometry(ctx, &path.geometry);
    ctx.stroke()
}

/// Pixel area a filtered path can touch, as `(x, y, width, height)`.
///
/// The geometry bounds are grown by half the stroke width and the filter's spread,
/// then clipped to the `width` x `height` target. Returns `None` when nothing of
/// the path lands on the target.
pub(crate) fn filtered_extent(
    path: &PathEntry,
    filter: Filter,
    width: i32,
    height: i32,
) -> Option<(i32, i32, i32, i32)> {
    let bounds = path.geometry.bounds()?;
    let pad = path.style.width / 2.0 + filter::margin(filter);

    let left = (bounds.left - pad).floor().max(0.0) as i32;
    let top = (bounds.top - pad).floor().max(0.0) as i32;
    let right = (bounds.right + pad).ceil().min(width as f64) as i32;
    let bottom = (bounds.bottom + pad).ceil().min(height as f64) as i32;

    (right > left && bottom > top).then_some((left, top, right - left, bottom - top))
}

/// Draws the path alone on a scratch layer covering its extent, filters it, and
/// composites the layer at that offset.
fn render_filtered_path(
    ctx: &cairo::Context,
    path: &PathEntry,
    filter: Filter,
    width: i32,
    height: i32,
) -> Result<(), RenderError> {
    let Some((x, y, layer_width, layer_height)) = filtered_extent(path, filter, width, height)
    else {
        return Ok(());
    };

    let mut layer = cairo::ImageSurface::create(cairo::Format::ARgb32, layer_width, layer_height)?;
    {
        let layer_ctx = cairo::Context::new(&layer)?;
        layer_ctx.translate(-x as f64, -y as f64);
        if let Err(err) = stroke_path(&layer_ctx, path) {
            log::warn!("Failed to stroke {:?} path for {:?}: {}", path.shape, filter, err);
            return Ok(());
        }
    }

    let stride = layer.stride() as usize;
    {
        let mut data = layer.data()?;
        filter::apply_filter(
            filter,
            &mut data,
            layer_width as usize,
            layer_height as usize,
            stride,
        );
    }

    ctx.save()?;
    ctx.set_source_surface(&layer, x as f64, y as f64)?;
    ctx.paint()?;
    ctx.restore()?;
    Ok(())
}

/// Replays geometry commands onto the context's current path.
///
/// Quadratic segments become the equivalent cubic, since cairo only draws cubics.
fn append_geometry(ctx: &cairo::Context, geometry: &Geometry) {
    ctx.new_path();
    let mut cursor: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;

    for command in geometry.commands() {
        match *command {
            PathCommand::MoveTo(p) => {
                ctx.move_to(p.x, p.y);
                cursor = Some(p);
                subpath_start = Some(p);
            }
            PathCommand::LineTo(p) => {
                ctx.line_to(p.x, p.y);
                cursor = Some(p);
            }
            PathCommand::QuadTo { control, end } => {
                let start = cursor.unwrap_or(control);
                if cursor.is_none() {
                    ctx.move_to(start.x, start.y);
                }
                let c1x = start.x + 2.0 / 3.0 * (control.x - start.x);
                let c1y = start.y + 2.0 / 3.0 * (control.y - start.y);
                let c2x = end.x + 2.0 / 3.0 * (control.x - end.x);
                let c2y = end.y + 2.0 / 3.0 * (control.y - end.y);
                ctx.curve_to(c1x, c1y, c2x, c2y, end.x, end.y);
                cursor = Some(end);
            }
            PathCommand::AddRect(rect) => {
                // Counter-clockwise on screen: down the left edge first.
                ctx.move_to(rect.left, rect.top);
                ctx.line_to(rect.left, rect.bottom);
                ctx.line_to(rect.right, rect.bottom);
                ctx.line_to(rect.right, rect.top);
                ctx.close_path();
                cursor = Some(Point::new(rect.left, rect.top));
                subpath_start = cursor;
            }
            PathCommand::AddCircle { center, radius } => {
                let start = Point::new(center.x + radius, center.y);
                ctx.new_sub_path();
                ctx.arc_negative(
                    center.x,
                    center.y,
                    radius,
                    0.0,
                    -2.0 * std::f64::consts::PI,
                );
                ctx.close_path();
                cursor = Some(start);
                subpath_start = cursor;
            }
            PathCommand::Close => {
                ctx.close_path();
                cursor = subpath_start;
            }
        }
    }
}
