//! Slice-level polygon algorithms.
//!
//! These operate on an ordered vertex slice that is implicitly closed
//! (the last vertex connects back to the first). They back both the
//! dynamic [`Polygon`](crate::geometry::polygon::Polygon) and the
//! fixed-arity [`Ngon`](crate::geometry::polygon::Ngon) types.

use super::distance_2d::point_to_segment_dist;
use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Fewer than
/// three vertices yield zero.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the cyclic perimeter of a polygon.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += (points[j] - points[i]).norm();
    }
    sum
}

/// Computes the area-weighted centroid of a polygon.
///
/// Returns `None` when the polygon is degenerate (fewer than three
/// vertices, or zero signed area from collinear vertices).
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Option<Point2> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return None;
    }

    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let w = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * w;
        cy += (points[i].y + points[j].y) * w;
    }
    let scale = 1.0 / (6.0 * area);
    Some(Point2::new(cx * scale, cy * scale))
}

/// Tests whether a polygon is convex.
///
/// All consecutive edge-pair cross products must share one sign.
/// Exactly-collinear consecutive edges (zero cross product) are
/// tolerated and do not break convexity.
#[must_use]
pub fn is_convex_2d(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0_f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cross = cross_2d(&(b - a), &(c - b));
        if cross.abs() < TOLERANCE {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// Even-odd (ray casting) point-in-polygon test.
///
/// Casts a ray in +x and counts edge crossings; an odd count means the
/// point is inside. Points on the boundary are not reliably classified
/// here; callers wanting an inclusive boundary combine this with
/// [`point_on_boundary_2d`].
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = points[i];
        let pj = points[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Tests whether a point lies on the polygon boundary within `tolerance`.
#[must_use]
pub fn point_on_boundary_2d(point: &Point2, points: &[Point2], tolerance: f64) -> bool {
    let n = points.len();
    if n < 2 {
        return false;
    }
    for i in 0..n {
        let j = (i + 1) % n;
        if point_to_segment_dist(point, &points[i], &points[j]) <= tolerance {
            return true;
        }
    }
    false
}

/// Axis-aligned extent of a vertex set as `(min, max)` corners.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Returns the direction of the polygon edge from vertex `i` to its
/// cyclic successor, or `None` for a zero-length edge.
#[must_use]
pub fn edge_direction_2d(points: &[Point2], i: usize) -> Option<Vector2> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let d = points[(i + 1) % n] - points[i % n];
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(d / len)
}
