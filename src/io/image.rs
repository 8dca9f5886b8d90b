//! PNG export of generated lines on the palette background

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::algorithm::executor::Artwork;
use crate::io::error::{FlowError, Result};
use crate::style::{Color, StyledLine};

// Spacing between stamped discs along a segment, in pixels
const STAMP_SPACING: f64 = 0.5;

/// Rasterize `artwork` into an image the size of its canvas
///
/// Each line is drawn by stamping filled discs of the stroke radius along its
/// segments, which gives round caps and joins. Text is not rendered.
pub fn rasterize(artwork: &Artwork) -> RgbImage {
    let width = artwork.canvas.width.ceil().max(1.0) as u32;
    let height = artwork.canvas.height.ceil().max(1.0) as u32;
    let mut img = RgbImage::from_pixel(width, height, to_pixel(artwork.background));

    for line in &artwork.lines {
        draw_line(&mut img, line);
    }
    img
}

const fn to_pixel(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

fn draw_line(img: &mut RgbImage, line: &StyledLine) {
    let radius = (line.width() / 2.0).max(0.5);
    let color = to_pixel(line.color());

    for segment in line.path().windows(2) {
        let &[[x0, y0], [x1, y1]] = segment else {
            continue;
        };
        let (x0, y0, x1, y1) = (
            f64::from(x0),
            f64::from(y0),
            f64::from(x1),
            f64::from(y1),
        );
        let length = crate::math::hypot(x1 - x0, y1 - y0);
        let stamps = (length / STAMP_SPACING).ceil().max(1.0) as usize;

        for step in 0..=stamps {
            let t = step as f64 / stamps as f64;
            stamp_disc(img, (x1 - x0).mul_add(t, x0), (y1 - y0).mul_add(t, y0), radius, color);
        }
    }
}

fn stamp_disc(img: &mut RgbImage, cx: f64, cy: f64, radius: f64, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    let min_x = (cx - radius).floor().max(0.0) as u32;
    let min_y = (cy - radius).floor().max(0.0) as u32;
    let max_x = ((cx + radius).ceil().max(0.0) as u32).min(width.saturating_sub(1));
    let max_y = ((cy + radius).ceil().max(0.0) as u32).min(height.saturating_sub(1));
    let radius_sq = radius * radius;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            // Sample at pixel centers
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            if dx.mul_add(dx, dy * dy) <= radius_sq {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Export the artwork as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_artwork_as_png(artwork: &Artwork, output_path: &Path) -> Result<()> {
    let img = rasterize(artwork);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FlowError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| FlowError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
