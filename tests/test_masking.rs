mod common;

use common::*;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::point::Point;
use pillrot::detection::masking::{apply_mask, crop, rasterize_contour};

fn rect_contour(x0: i32, y0: i32, x1: i32, y1: i32) -> Contour {
    Contour::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

#[test]
fn filled_mask_covers_inside_and_boundary_only() {
    let mask = rasterize_contour(&rect_contour(5, 8, 14, 20), 30, 30);

    assert_eq!(mask.dimensions(), (30, 30));
    for (x, y, p) in mask.enumerate_pixels() {
        let inside = (5..=14).contains(&x) && (8..=20).contains(&y);
        let expected = if inside { 255 } else { 0 };
        assert_eq!(p[0], expected, "pixel ({}, {})", x, y);
    }
}

#[test]
fn traced_circle_fills_solid() -> anyhow::Result<()> {
    let mut disk = GrayImage::new(60, 60);
    imageproc::drawing::draw_filled_circle_mut(&mut disk, (30, 30), 20, Luma([255u8]));

    let contours = pillrot::detection::contours::find_external_contours(&disk);
    anyhow::ensure!(contours.len() == 1, "expected one contour, got {}", contours.len());

    let mask = rasterize_contour(&contours[0], 60, 60);
    for (x, y, p) in disk.enumerate_pixels() {
        if p[0] == 255 {
            assert_eq!(mask.get_pixel(x, y)[0], 255, "hole in mask at ({}, {})", x, y);
        }
    }

    let filled = mask.pixels().filter(|p| p[0] == 255).count();
    let expected = disk.pixels().filter(|p| p[0] == 255).count();
    assert!(filled <= expected + expected / 50, "mask spills: {} vs {}", filled, expected);
    Ok(())
}

#[test]
fn degenerate_contours_still_mark_their_pixels() {
    let point = Contour::new(vec![Point::new(3, 4)]);
    let mask = rasterize_contour(&point, 10, 10);
    assert_eq!(mask.get_pixel(3, 4)[0], 255);
    assert_eq!(mask.pixels().filter(|p| p[0] == 255).count(), 1);

    let line = Contour::new(vec![Point::new(2, 2), Point::new(6, 2)]);
    let mask = rasterize_contour(&line, 10, 10);
    for x in 2..=6 {
        assert_eq!(mask.get_pixel(x, 2)[0], 255);
    }
    assert_eq!(mask.pixels().filter(|p| p[0] == 255).count(), 5);
}

#[test]
fn crop_takes_the_bounding_box() {
    let mut img = RgbImage::new(20, 10);
    img.put_pixel(4, 3, Rgb([1, 2, 3]));

    let bbox = BoundingBox { x: 4, y: 3, width: 5, height: 2 };
    let cropped = crop(&img, &bbox);

    assert_eq!(cropped.dimensions(), (5, 2));
    assert_eq!(*cropped.get_pixel(0, 0), Rgb([1, 2, 3]));
}

#[test]
fn mask_keeps_or_zeroes_each_pixel() -> anyhow::Result<()> {
    let img = RgbImage::from_fn(8, 6, |x, y| Rgb([x as u8 * 10 + 1, y as u8 * 10 + 1, 77]));
    let mut mask = GrayImage::new(8, 6);
    fill_rect(&mut mask, 2, 1, 5, 4, 255);

    let masked = apply_mask(&img, &mask)?;

    for (x, y, p) in masked.enumerate_pixels() {
        if mask.get_pixel(x, y)[0] == 255 {
            assert_eq!(p, img.get_pixel(x, y));
        } else {
            assert_eq!(*p, Rgb([0, 0, 0]));
        }
    }
    Ok(())
}

#[test]
fn mismatched_mask_is_rejected() {
    let img = RgbImage::new(8, 6);
    let mask = GrayImage::new(6, 8);
    let err = apply_mask(&img, &mask).unwrap_err();
    assert!(err.to_string().contains("6x8"));
}
