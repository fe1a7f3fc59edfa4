//! Rotation of the isolated region.
//!
//! Two strategies are provided:
//! - **Fixed canvas**: output keeps the input size, anything rotated past the
//!   original corners is lost.
//! - **Expanded canvas**: output grows to the bounding box of the rotated
//!   input so nothing is clipped.
//!
//! For a positive angle the fixed rotation turns counter-clockwise and the
//! expanded rotation turns clockwise. Uncovered pixels are filled with black.

use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{
    rotate_about_center, warp_into, Interpolation, Projection,
};

/// Angle increment, in degrees, between rotated frames
pub const ANGLE_STEP: u32 = 15;

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Angles 0, step, 2*step, ... below 360
pub fn angles(step: u32) -> impl Iterator<Item = u32> + Clone {
    (0..360).step_by(step.max(1) as usize)
}

fn is_full_turn(angle_degrees: f64) -> bool {
    let normalized = angle_degrees.rem_euclid(360.0);
    normalized < 1e-3 || 360.0 - normalized < 1e-3
}

/// Size of the canvas needed to hold a `width` x `height` image rotated by
/// `angle_degrees`.
///
/// Multiples of 90 degrees are exact; other angles round up so the rotated
/// corners always fit.
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let normalized = angle_degrees.rem_euclid(180.0);
    if normalized < 1e-3 || 180.0 - normalized < 1e-3 {
        return (width, height);
    }
    if (normalized - 90.0).abs() < 1e-3 {
        return (height, width);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();
    let (w, h) = (width as f64, height as f64);

    // Guard against 99.9999999 turning into 100
    let new_w = (w * cos + h * sin - 1e-9).ceil() as u32;
    let new_h = (w * sin + h * cos - 1e-9).ceil() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate counter-clockwise about the image centre, keeping the input size
pub fn rotate_fixed(img: &RgbImage, angle_degrees: f64) -> RgbImage {
    if is_full_turn(angle_degrees) {
        return img.clone();
    }
    let theta = -angle_degrees.to_radians() as f32;
    rotate_about_center(img, theta, Interpolation::Bilinear, BACKGROUND)
}

/// Rotate clockwise onto a canvas large enough for the whole result.
///
/// The centre of the source (measured between pixel centres) lands on the
/// centre of the new canvas.
pub fn rotate_bound(img: &RgbImage, angle_degrees: f64) -> RgbImage {
    if is_full_turn(angle_degrees) {
        return img.clone();
    }

    let (width, height) = img.dimensions();
    let (new_width, new_height) = rotated_bounds(width, height, angle_degrees);

    let (cx, cy) = ((width as f32 - 1.0) / 2.0, (height as f32 - 1.0) / 2.0);
    let (new_cx, new_cy) = (
        (new_width as f32 - 1.0) / 2.0,
        (new_height as f32 - 1.0) / 2.0,
    );

    let projection = Projection::translate(new_cx, new_cy)
        * Projection::rotate(angle_degrees.to_radians() as f32)
        * Projection::translate(-cx, -cy);

    let mut output = RgbImage::from_pixel(new_width, new_height, BACKGROUND);
    warp_into(img, &projection, Interpolation::Bilinear, BACKGROUND, &mut output);
    output
}
