use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use tempfile::NamedTempFile;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A filled circle of `color` on a white canvas
pub fn circle_on_white(width: u32, height: u32, center: (i32, i32), radius: i32, color: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, WHITE);
    draw_filled_circle_mut(&mut img, center, radius, color);
    img
}

/// The 200x200 black circle of radius 50 centred at (100, 100)
pub fn pill_image() -> DynamicImage {
    DynamicImage::ImageRgb8(circle_on_white(200, 200, (100, 100), 50, BLACK))
}

pub fn blank_white(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, WHITE))
}

/// Binary image with a filled 255 rectangle covering `x0..=x1`, `y0..=y1`
pub fn binary_rect(width: u32, height: u32, x0: i32, y0: i32, x1: i32, y1: i32) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    fill_rect(&mut img, x0, y0, x1, y1, 255);
    img
}

/// Fill `x0..=x1`, `y0..=y1` with `value`
pub fn fill_rect(img: &mut GrayImage, x0: i32, y0: i32, x1: i32, y1: i32, value: u8) {
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(img, rect, Luma([value]));
}

/// Saves an image as PNG into a temp file.
/// The file will be automatically cleaned up when dropped.
pub fn save_temp_png(img: &DynamicImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Number of pixels that are not pure black
pub fn count_non_black(img: &RgbImage) -> usize {
    img.pixels().filter(|p| p.0 != [0, 0, 0]).count()
}
