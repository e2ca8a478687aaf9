use cairo::{Context, ImageSurface};
use inkpad::DrawingSurface;
use inkpad::draw::render::{render_background, render_path};
use inkpad::draw::{BLUE, Filter, GREEN, RED, Raster, ShapeKind, WHITE};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn drawing(width: u32, height: u32) -> DrawingSurface {
    let mut surface = DrawingSurface::new();
    surface.set_viewport_size(width, height).unwrap();
    surface
}

fn draw(surface: &mut DrawingSurface, shape: ShapeKind, from: (f64, f64), to: (f64, f64)) {
    surface.select_shape(shape);
    surface.on_gesture_start(from.0, from.1).unwrap();
    surface.on_gesture_move(to.0, to.1).unwrap();
    surface.on_gesture_end(to.0, to.1).unwrap();
}

fn horizontal_line(filter: Filter) -> Raster {
    let mut surface = drawing(64, 64);
    surface.select_color(BLUE);
    surface.select_stroke_width(10.0);
    surface.select_filter(filter);
    draw(&mut surface, ShapeKind::Line, (0.0, 30.0), (64.0, 30.0));
    surface.render().unwrap()
}

#[test]
fn render_path_draws_onto_plain_context() {
    let mut surface = drawing(48, 48);
    draw(&mut surface, ShapeKind::Rectangle, (8.0, 8.0), (40.0, 40.0));
    let path = surface.paths()[0].clone();

    let (mut image, ctx) = surface_with_context(48, 48);
    render_background(&ctx, WHITE).unwrap();
    render_path(&ctx, &path);
    drop(ctx);

    let raster = Raster::from_surface(&mut image).unwrap();
    // Outline only: the edge is red, the middle keeps the background.
    assert_eq!(raster.pixel(8, 24), Some([255, 0, 0, 255]));
    assert_eq!(raster.pixel(24, 24), Some([255, 255, 255, 255]));
}

#[test]
fn later_paths_draw_over_earlier_ones() {
    let mut surface = drawing(64, 64);
    surface.select_color(RED);
    draw(&mut surface, ShapeKind::Line, (0.0, 32.0), (64.0, 32.0));
    surface.select_color(GREEN);
    draw(&mut surface, ShapeKind::Line, (32.0, 0.0), (32.0, 64.0));

    let raster = surface.render().unwrap();
    assert_eq!(raster.pixel(32, 32), Some([0, 255, 0, 255]));
    assert_eq!(raster.pixel(4, 32), Some([255, 0, 0, 255]));

    surface.undo_last();
    let raster = surface.render().unwrap();
    assert_eq!(raster.pixel(32, 32), Some([255, 0, 0, 255]));
}

#[test]
fn blur_spreads_color_past_the_stroke_edge() {
    let crisp = horizontal_line(Filter::None);
    let blurred = horizontal_line(Filter::Blur);

    assert_eq!(crisp.pixel(32, 38), Some([255, 255, 255, 255]));
    let halo = blurred.pixel(32, 38).unwrap();
    assert!(halo[0] < 255 && halo[2] > halo[0], "expected a blue tint, got {halo:?}");
}

#[test]
fn emboss_shades_the_stroke() {
    let crisp = horizontal_line(Filter::None);
    let embossed = horizontal_line(Filter::Emboss);

    assert_eq!(crisp.pixel(32, 30), Some([0, 0, 255, 255]));
    assert_ne!(embossed.pixel(32, 30), crisp.pixel(32, 30));
    // Far from the stroke the background is untouched.
    assert_eq!(embossed.pixel(32, 4), Some([255, 255, 255, 255]));
}

#[test]
fn filters_stay_with_their_own_path() {
    let mut surface = drawing(64, 64);
    surface.select_filter(Filter::Blur);
    draw(&mut surface, ShapeKind::Line, (0.0, 10.0), (64.0, 10.0));
    surface.select_filter(Filter::None);
    draw(&mut surface, ShapeKind::Line, (0.0, 50.0), (64.0, 50.0));

    let filters: Vec<_> = surface.paths().iter().map(|p| p.style.filter).collect();
    assert_eq!(filters, vec![Filter::Blur, Filter::None]);

    let raster = surface.render().unwrap();
    // The crisp line keeps a hard edge: 3 px outside it is pure background.
    assert_eq!(raster.pixel(32, 63), Some([255, 255, 255, 255]));
}

#[test]
fn exported_png_has_signature() {
    let mut surface = drawing(16, 16);
    draw(&mut surface, ShapeKind::Circle, (8.0, 8.0), (12.0, 8.0));

    let png = surface.export_frame().unwrap().to_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
