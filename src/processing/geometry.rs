//! Boundary normalisation for decoder polygons.

use crate::Point;

/// Polygons with more sides than this are replaced by their convex hull before drawing
pub const MAX_RAW_SIDES: usize = 4;

/// Convex hull of `points` using Andrew's monotone chain
///
/// The hull starts at the point with the lowest x (then lowest y) and runs
/// counter-clockwise in a y-up frame. Duplicate and collinear points are
/// dropped. Fewer than three distinct points are returned as-is, sorted.
///
/// # Examples
///
/// ```
/// use qrscan::{geometry::convex_hull, Point};
///
/// let square = [(0, 0), (4, 0), (2, 2), (4, 4), (0, 4)].map(Point::from);
/// let hull = convex_hull(&square);
/// assert_eq!(hull, [(0, 0), (4, 0), (4, 4), (0, 4)].map(Point::from));
/// ```
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() * 2);

    // lower chain
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    // upper chain, skipping the last point which already closes the lower one
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    // first point is repeated at the end
    hull.pop();
    hull
}

/// The polygon to draw for a detection boundary
#[must_use]
pub fn outline(polygon: &[Point]) -> Vec<Point> {
    if polygon.len() > MAX_RAW_SIDES {
        convex_hull(polygon)
    } else {
        polygon.to_vec()
    }
}

/// z component of (a - o) x (b - o); positive for a left turn in a y-up frame
fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ox, oy) = (i128::from(o.x), i128::from(o.y));
    (i128::from(a.x) - ox) * (i128::from(b.y) - oy) - (i128::from(a.y) - oy) * (i128::from(b.x) - ox)
}
