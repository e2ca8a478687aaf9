//! Pixel post-processing for filtered strokes.
//!
//! Filtered paths are drawn alone onto a scratch ARGB32 layer; the functions here
//! rewrite that layer in place before it is composited onto the frame. Pixels are
//! cairo's native-endian premultiplied ARGB32.

use super::style::Filter;

/// Blur radius of [`Filter::Blur`] in pixels.
pub const BLUR_RADIUS: f64 = 5.0;

/// Direction of the light hitting embossed strokes.
pub const EMBOSS_LIGHT: [f64; 3] = [1.0, 1.0, 1.0];

/// Ambient light level of embossed strokes.
pub const EMBOSS_AMBIENT: f64 = 0.4;

/// Specular exponent of embossed strokes.
pub const EMBOSS_SPECULAR: f64 = 6.0;

/// Smoothing radius applied to the emboss height map.
pub const EMBOSS_BLUR_RADIUS: f64 = 3.5;

/// Height-map gradient scale; larger values give a deeper relief.
const EMBOSS_DEPTH: f64 = 4.0;

type Pixel = [f32; 4];

/// How far past a stroke's edge `filter` can spread color, in pixels.
///
/// Three times the filter radius, which bounds the three box passes of the blur.
pub fn margin(filter: Filter) -> f64 {
    match filter {
        Filter::None => 0.0,
        Filter::Blur => 3.0 * BLUR_RADIUS,
        Filter::Emboss => 3.0 * EMBOSS_BLUR_RADIUS,
    }
}

/// Applies `filter` to a premultiplied ARGB32 buffer.
///
/// `Filter::None` leaves the buffer untouched.
pub fn apply_filter(filter: Filter, data: &mut [u8], width: usize, height: usize, stride: usize) {
    if width == 0 || height == 0 {
        return;
    }

    match filter {
        Filter::None => {}
        Filter::Blur => {
            let mut pixels = read_pixels(data, width, height, stride);
            gaussian_blur(&mut pixels, width, height, BLUR_RADIUS);
            write_pixels(data, width, height, stride, &pixels);
        }
        Filter::Emboss => {
            let mut pixels = read_pixels(data, width, height, stride);
            emboss(&mut pixels, width, height);
            write_pixels(data, width, height, stride, &pixels);
        }
    }
}

/// Approximates a gaussian blur with three box-blur passes per axis.
fn gaussian_blur(pixels: &mut [Pixel], width: usize, height: usize, radius: f64) {
    // Blur radius to sigma, then the box width whose triple convolution has that variance.
    let sigma = 0.57735 * radius + 0.5;
    let box_width = (4.0 * sigma * sigma + 1.0).sqrt();
    let box_radius = ((box_width - 1.0) / 2.0).round().max(1.0) as usize;

    let mut line = Vec::with_capacity(width.max(height));
    for _ in 0..3 {
        for y in 0..height {
            blur_line(pixels, width, box_radius, |x| y * width + x, &mut line);
        }
        for x in 0..width {
            blur_line(pixels, height, box_radius, |y| y * width + x, &mut line);
        }
    }
}

/// Running-sum box blur along one row or column; samples outside are transparent.
fn blur_line(
    pixels: &mut [Pixel],
    len: usize,
    radius: usize,
    index: impl Fn(usize) -> usize,
    line: &mut Vec<Pixel>,
) {
    if len == 0 {
        return;
    }

    line.clear();
    line.extend((0..len).map(|k| pixels[index(k)]));

    let norm = 1.0 / (2 * radius + 1) as f32;
    let mut sum = [0.0f32; 4];
    for value in &line[..=radius.min(len - 1)] {
        accumulate(&mut sum, value, 1.0);
    }

    for k in 0..len {
        pixels[index(k)] = sum.map(|channel| (channel * norm).max(0.0));

        let incoming = k + radius + 1;
        if incoming < len {
            accumulate(&mut sum, &line[incoming], 1.0);
        }
        if k >= radius {
            accumulate(&mut sum, &line[k - radius], -1.0);
        }
    }
}

fn accumulate(sum: &mut Pixel, value: &Pixel, sign: f32) {
    for (total, channel) in sum.iter_mut().zip(value) {
        *total += sign * channel;
    }
}

/// Lights the stroke as a relief whose height is its smoothed coverage.
fn emboss(pixels: &mut [Pixel], width: usize, height: usize) {
    let mut heights: Vec<Pixel> = pixels.iter().map(|p| [p[0], 0.0, 0.0, 0.0]).collect();
    gaussian_blur(&mut heights, width, height, EMBOSS_BLUR_RADIUS);
    let height_at = |x: usize, y: usize| heights[y * width + x][0] as f64 / 255.0;

    let light_len = EMBOSS_LIGHT.iter().map(|c| c * c).sum::<f64>().sqrt();
    let light = EMBOSS_LIGHT.map(|c| c / light_len);

    for y in 0..height {
        for x in 0..width {
            let pixel = &mut pixels[y * width + x];
            let alpha = pixel[0];
            if alpha <= 0.0 {
                continue;
            }

            let gx = height_at((x + 1).min(width - 1), y) - height_at(x.saturating_sub(1), y);
            let gy = height_at(x, (y + 1).min(height - 1)) - height_at(x, y.saturating_sub(1));
            let normal = [-gx * EMBOSS_DEPTH, -gy * EMBOSS_DEPTH, 1.0];
            let normal_len = normal.iter().map(|c| c * c).sum::<f64>().sqrt();
            let dot = normal
                .iter()
                .zip(light)
                .map(|(n, l)| n / normal_len * l)
                .sum::<f64>()
                .max(0.0);

            let diffuse = (EMBOSS_AMBIENT + (1.0 - EMBOSS_AMBIENT) * dot).min(1.0) as f32;
            let highlight = dot.powf(EMBOSS_SPECULAR) as f32 * alpha;

            for channel in &mut pixel[1..] {
                *channel = (*channel * diffuse + highlight).min(alpha);
            }
        }
    }
}

fn read_pixels(data: &[u8], width: usize, height: usize, stride: usize) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = &data[y * stride..y * stride + width * 4];
        for bytes in row.chunks_exact(4) {
            let argb = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            pixels.push([
                (argb >> 24) as u8 as f32,
                (argb >> 16) as u8 as f32,
                (argb >> 8) as u8 as f32,
                argb as u8 as f32,
            ]);
        }
    }
    pixels
}

fn write_pixels(data: &mut [u8], width: usize, height: usize, stride: usize, pixels: &[Pixel]) {
    for y in 0..height {
        let row = &mut data[y * stride..y * stride + width * 4];
        for (x, bytes) in row.chunks_exact_mut(4).enumerate() {
            let [a, r, g, b] = pixels[y * width + x].map(|c| c.round().clamp(0.0, 255.0) as u32);
            // Premultiplied channels may never exceed alpha.
            let argb = (a << 24) | (r.min(a) << 16) | (g.min(a) << 8) | b.min(a);
            bytes.copy_from_slice(&argb.to_ne_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 21;

    fn single_dot() -> Vec<u8> {
        let mut data = vec![0u8; SIZE * SIZE * 4];
        let center = (SIZE / 2 * SIZE + SIZE / 2) * 4;
        data[center..center + 4].copy_from_slice(&0xffff_0000u32.to_ne_bytes());
        data
    }

    fn argb_at(data: &[u8], x: usize, y: usize) -> u32 {
        let i = (y * SIZE + x) * 4;
        u32::from_ne_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]])
    }

    #[test]
    fn none_leaves_buffer_untouched() {
        let mut data = single_dot();
        let original = data.clone();
        apply_filter(Filter::None, &mut data, SIZE, SIZE, SIZE * 4);
        assert_eq!(data, original);
    }

    #[test]
    fn blur_spreads_coverage_to_neighbours() {
        let mut data = single_dot();
        apply_filter(Filter::Blur, &mut data, SIZE, SIZE, SIZE * 4);

        let center = argb_at(&data, SIZE / 2, SIZE / 2);
        let neighbour = argb_at(&data, SIZE / 2 + 1, SIZE / 2);
        assert!(center >> 24 < 0xff, "center should lose coverage");
        assert!(neighbour >> 24 > 0, "neighbour should gain coverage");
        // Premultiplied invariant: red never exceeds alpha.
        assert!((neighbour >> 16) & 0xff <= neighbour >> 24);
    }

    #[test]
    fn blur_never_spreads_past_margin() {
        const WIDE: usize = 41;
        let mut data = vec![0u8; WIDE * WIDE * 4];
        let center = (20 * WIDE + 20) * 4;
        data[center..center + 4].copy_from_slice(&0xffff_ffffu32.to_ne_bytes());
        apply_filter(Filter::Blur, &mut data, WIDE, WIDE, WIDE * 4);

        let reach = margin(Filter::Blur) as usize;
        for y in 0..WIDE {
            for x in 0..WIDE {
                if x.abs_diff(20) > reach || y.abs_diff(20) > reach {
                    let i = (y * WIDE + x) * 4;
                    assert_eq!(&data[i..i + 4], &[0, 0, 0, 0], "color at ({x}, {y})");
                }
            }
        }
        assert_eq!(margin(Filter::None), 0.0);
    }

    #[test]
    fn emboss_keeps_coverage_and_premultiplied_invariant() {
        let mut data = vec![0u8; SIZE * SIZE * 4];
        for y in 5..16 {
            for x in 5..16 {
                let i = (y * SIZE + x) * 4;
                data[i..i + 4].copy_from_slice(&0xff80_8080u32.to_ne_bytes());
            }
        }
        apply_filter(Filter::Emboss, &mut data, SIZE, SIZE, SIZE * 4);

        let mut shades = Vec::new();
        for y in 5..16 {
            for x in 5..16 {
                let argb = argb_at(&data, x, y);
                assert_eq!(argb >> 24, 0xff);
                shades.push((argb >> 16) & 0xff);
            }
        }
        assert_eq!(argb_at(&data, 0, 0), 0);
        let min = shades.iter().min().unwrap();
        let max = shades.iter().max().unwrap();
        assert!(max > min, "relief should produce varying shades");
    }
}
