use anyhow::{ensure, Result};
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use crate::models::{BoundingBox, Contour};

/// Mask value for pixels inside the contour
pub const FOREGROUND: u8 = 255;

/// Rasterise a contour as a filled region of 255 on a zeroed mask.
///
/// The boundary pixels themselves are part of the region.
pub fn rasterize_contour(contour: &Contour, width: u32, height: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let color = Luma([FOREGROUND]);

    let mut poly = contour.points.clone();
    // draw_polygon_mut rejects an explicitly closed polygon
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.is_empty() {
        return mask;
    }

    if poly.len() >= 3 {
        draw_polygon_mut(&mut mask, &poly, color);
    }

    for (i, p) in poly.iter().enumerate() {
        let q = poly[(i + 1) % poly.len()];
        draw_line_segment_mut(
            &mut mask,
            (p.x as f32, p.y as f32),
            (q.x as f32, q.y as f32),
            color,
        );
        if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
            mask.put_pixel(p.x as u32, p.y as u32, color);
        }
    }

    mask
}

/// Copy the `bbox` region out of an image
pub fn crop<P>(img: &ImageBuffer<P, Vec<P::Subpixel>>, bbox: &BoundingBox) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
{
    image::imageops::crop_imm(img, bbox.x, bbox.y, bbox.width, bbox.height).to_image()
}

/// Keep image pixels where the mask is non-zero, zero them elsewhere
pub fn apply_mask(img: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    ensure!(
        img.dimensions() == mask.dimensions(),
        "Mask is {}x{} but image is {}x{}",
        mask.width(),
        mask.height(),
        img.width(),
        img.height()
    );

    let mut output = RgbImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        if mask.get_pixel(x, y)[0] != 0 {
            output.put_pixel(x, y, *pixel);
        } else {
            output.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }

    Ok(output)
}
