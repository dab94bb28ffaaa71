//! Annotation rendering for accepted matches.
//!
//! Draws a box around each match's bounding quad and re-encodes the image
//! as PNG. Callers persist the result under a per-invocation identifier so
//! concurrent scans never share an output artifact.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Result;
use crate::models::MatchRecord;

const BOX_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BOX_THICKNESS: u32 = 2;

/// Overlays match boxes on `image_bytes` and returns the annotated image
/// as PNG bytes. An empty match list re-encodes the image unchanged.
pub fn annotate(image_bytes: &[u8], matches: &[MatchRecord]) -> Result<Vec<u8>> {
    let mut img = image::load_from_memory(image_bytes)?.to_rgba8();

    for record in matches {
        draw_quad_box(&mut img, record);
    }

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

fn draw_quad_box(img: &mut RgbaImage, record: &MatchRecord) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let clamp_x = |v: i32| v.clamp(0, width as i32 - 1) as u32;
    let clamp_y = |v: i32| v.clamp(0, height as i32 - 1) as u32;

    let x0 = clamp_x(record.quad.iter().map(|p| p.x).min().unwrap_or(0));
    let x1 = clamp_x(record.quad.iter().map(|p| p.x).max().unwrap_or(0));
    let y0 = clamp_y(record.quad.iter().map(|p| p.y).min().unwrap_or(0));
    let y1 = clamp_y(record.quad.iter().map(|p| p.y).max().unwrap_or(0));

    for t in 0..BOX_THICKNESS {
        for x in x0..=x1 {
            put_pixel_clamped(img, x, y0.saturating_add(t));
            put_pixel_clamped(img, x, y1.saturating_sub(t));
        }
        for y in y0..=y1 {
            put_pixel_clamped(img, x0.saturating_add(t), y);
            put_pixel_clamped(img, x1.saturating_sub(t), y);
        }
    }
}

fn put_pixel_clamped(img: &mut RgbaImage, x: u32, y: u32) {
    let (width, height) = img.dimensions();
    if x < width && y < height {
        img.put_pixel(x, y, BOX_COLOR);
    }
}
