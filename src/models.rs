use image::{GrayImage, RgbImage};
use imageproc::point::Point;

/// Axis-aligned rectangle in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Outer boundary of a connected foreground region
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_x(&self) -> i32 {
        self.points.iter().map(|p| p.x).min().unwrap_or(0)
    }

    pub fn min_y(&self) -> i32 {
        self.points.iter().map(|p| p.y).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i32 {
        self.points.iter().map(|p| p.x).max().unwrap_or(0)
    }

    pub fn max_y(&self) -> i32 {
        self.points.iter().map(|p| p.y).max().unwrap_or(0)
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        (self.max_x() - self.min_x() + 1) as u32
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        (self.max_y() - self.min_y() + 1) as u32
    }

    /// Enclosed polygon area (shoelace formula), always non-negative
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: i64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
            })
            .sum();
        twice.abs() as f64 / 2.0
    }

    /// Smallest axis-aligned box containing every point (inclusive)
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.min_x().max(0) as u32,
            y: self.min_y().max(0) as u32,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Result of isolating the largest foreground object
#[derive(Debug, Clone)]
pub struct Isolation {
    /// Selected contour in full-image coordinates
    pub contour: Contour,
    pub bbox: BoundingBox,
    /// Filled contour mask, same size as the input image
    pub mask: GrayImage,
    /// `mask` cropped to `bbox`
    pub mask_roi: GrayImage,
    /// Input image cropped to `bbox`, zeroed wherever `mask_roi` is 0
    pub image_roi: RgbImage,
}
