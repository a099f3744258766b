//! Raster rendering of stage outputs for the inspection tools.
//!
//! Produces the four-panel stage view: the gray input, gradient magnitude
//! under a hot colormap, the high-gradient mask, and the skeleton. Panels
//! compose into a single montage with thin gutters so one PNG per image
//! shows the whole pipeline.
use crate::analyzer::StageArtifacts;
use crate::image::{BinaryMask, ImageF32, ImageU8, ImageView};
use image::{Rgb, RgbImage};

const GUTTER_PX: u32 = 8;
const GUTTER_COLOR: Rgb<u8> = Rgb([24, 24, 24]);

/// Map a normalized value in [0, 1] through the hot colormap: black through
/// red and yellow to white, each channel ramping over a third of the range.
fn hot_color(t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let r = (t * 3.0).min(1.0);
    let g = (t * 3.0 - 1.0).clamp(0.0, 1.0);
    let b = (t * 3.0 - 2.0).clamp(0.0, 1.0);
    Rgb([
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ])
}

/// Render a float image under the hot colormap, normalized by its maximum.
/// A flat image renders black.
pub fn render_magnitude_heat(mag: &ImageF32) -> RgbImage {
    let max = mag.max_value();
    let scale = if max > 0.0 { 1.0 / max } else { 0.0 };
    let mut out = RgbImage::new(mag.w as u32, mag.h as u32);
    for y in 0..mag.h {
        let row = mag.row(y);
        for (x, &v) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, hot_color(v * scale));
        }
    }
    out
}

/// Render an 8-bit gray view as RGB.
pub fn render_gray(gray: ImageU8<'_>) -> RgbImage {
    let mut out = RgbImage::new(gray.w as u32, gray.h as u32);
    for y in 0..gray.h {
        let row = gray.row(y);
        for (x, &v) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    out
}

/// Render a binary mask with set pixels white.
pub fn render_mask(mask: &BinaryMask) -> RgbImage {
    let mut out = RgbImage::new(mask.w as u32, mask.h as u32);
    for y in 0..mask.h {
        for x in 0..mask.w {
            let v = if mask.is_set(x, y) { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    out
}

/// Compose panels left to right with a thin gutter between them.
///
/// Panels may differ in size; shorter panels are top-aligned and the gutter
/// color fills the remainder.
pub fn montage(panels: &[RgbImage]) -> RgbImage {
    if panels.is_empty() {
        return RgbImage::new(0, 0);
    }
    let width: u32 =
        panels.iter().map(RgbImage::width).sum::<u32>() + GUTTER_PX * (panels.len() as u32 - 1);
    let height = panels.iter().map(RgbImage::height).max().unwrap_or(0);
    let mut out = RgbImage::from_pixel(width, height, GUTTER_COLOR);
    let mut x_offset = 0u32;
    for panel in panels {
        for (x, y, &px) in panel.enumerate_pixels() {
            out.put_pixel(x_offset + x, y, px);
        }
        x_offset += panel.width() + GUTTER_PX;
    }
    out
}

/// Four-panel stage view: input, gradient heat, edge mask, skeleton.
pub fn render_stage_panels(gray: ImageU8<'_>, artifacts: &StageArtifacts) -> RgbImage {
    montage(&[
        render_gray(gray),
        render_magnitude_heat(&artifacts.gradient_magnitude),
        render_mask(&artifacts.edge_mask),
        render_mask(&artifacts.skeleton),
    ])
}
