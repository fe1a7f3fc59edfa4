use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;
use crate::models::Contour;

/// Find the outermost contours of the foreground (non-zero) regions.
///
/// Borders of holes, and anything nested inside a hole, are skipped.
/// Returned contours are compressed with [`compress_boundary`].
pub fn find_external_contours(binary: &GrayImage) -> Vec<Contour> {
    // Border following needs background all around the image; without it a
    // region touching the left edge is reported as a parentless hole.
    let mut padded = GrayImage::new(binary.width() + 2, binary.height() + 2);
    image::imageops::replace(&mut padded, binary, 1, 1);

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter(|c| !c.points.is_empty())
        .map(|c| {
            let points: Vec<Point<i32>> = c.points
                .iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            Contour::new(compress_boundary(&points))
        })
        .collect()
}

/// Drop every point that continues a straight run.
///
/// A point is kept only when the step arriving at it differs from the step
/// leaving it, so horizontal, vertical and diagonal segments keep just their
/// endpoints.
pub fn compress_boundary(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            (cur.x - prev.x, cur.y - prev.y) != (next.x - cur.x, next.y - cur.y)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        points.to_vec()
    } else {
        kept
    }
}

/// Contour with the largest enclosed area; the first one wins a tie
pub fn largest_contour(contours: &[Contour]) -> Option<&Contour> {
    contours.iter().fold(None, |best: Option<&Contour>, c| match best {
        Some(b) if b.area() >= c.area() => Some(b),
        _ => Some(c),
    })
}
