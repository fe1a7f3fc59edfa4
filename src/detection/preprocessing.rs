use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::box_filter;

/// Neighbourhood size (in pixels) used for adaptive thresholding
pub const BLOCK_SIZE: u32 = 11;

/// Constant subtracted from the local mean before comparing
pub const OFFSET: i32 = 2;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Inverted mean adaptive threshold.
///
/// A pixel becomes foreground (255) when it is at least `offset` darker than
/// the mean of the `block_size` x `block_size` window around it, so a dark
/// object on a light background lights up along its edges. Near the borders
/// the edge pixels are repeated to fill the window.
pub fn adaptive_threshold_inv(gray: &GrayImage, block_size: u32, offset: i32) -> GrayImage {
    let radius = block_size / 2;
    let means = box_filter(gray, radius, radius);

    let mut output = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let mean = means.get_pixel(x, y)[0] as i32;
        let binary = if pixel[0] as i32 <= mean - offset { 255u8 } else { 0u8 };
        output.put_pixel(x, y, Luma([binary]));
    }

    output
}
