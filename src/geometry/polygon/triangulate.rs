//! Polygon triangulation.
//!
//! Convex polygons are fanned from the first vertex (`n - 2`
//! triangles). Non-convex polygons go through ear clipping: repeatedly
//! find a convex vertex whose triangle with its neighbors contains no
//! other polygon vertex, clip it, and continue until three vertices
//! remain. For a simple polygon the triangle areas sum to the polygon
//! area.

use crate::math::polygon_2d::{is_convex_2d, signed_area_2d};
use crate::math::{cross_2d, Point2, TOLERANCE};

use super::Triangle;

/// Triangulates an implicitly closed vertex loop.
///
/// Returns an empty list for fewer than three vertices. Degenerate
/// inputs (e.g. all vertices collinear) may triangulate partially or
/// not at all.
#[must_use]
pub fn triangulate(vertices: &[Point2]) -> Vec<Triangle> {
    if vertices.len() < 3 {
        return Vec::new();
    }
    if is_convex_2d(vertices) {
        fan(vertices)
    } else {
        ear_clip(vertices)
    }
}

/// Fan triangulation from the first vertex. Correct for convex loops.
fn fan(vertices: &[Point2]) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(vertices.len() - 2);
    for i in 1..vertices.len() - 1 {
        triangles.push(Triangle::new([vertices[0], vertices[i], vertices[i + 1]]));
    }
    triangles
}

/// Ear-clipping triangulation for arbitrary simple loops.
fn ear_clip(vertices: &[Point2]) -> Vec<Triangle> {
    // Work on a counter-clockwise copy so convexity tests have a fixed
    // orientation.
    let mut work: Vec<Point2> = vertices.to_vec();
    if signed_area_2d(&work) < 0.0 {
        work.reverse();
    }

    let mut triangles = Vec::with_capacity(work.len() - 2);
    while work.len() > 3 {
        let n = work.len();
        let mut clipped = false;
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            if is_ear(&work, prev, i, next) {
                triangles.push(Triangle::new([work[prev], work[i], work[next]]));
                work.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            // Degenerate remainder (collinear or self-intersecting);
            // stop rather than loop forever.
            return triangles;
        }
    }
    triangles.push(Triangle::new([work[0], work[1], work[2]]));
    triangles
}

/// An ear is a strictly convex vertex whose triangle with its
/// neighbors contains no other polygon vertex.
fn is_ear(vertices: &[Point2], prev: usize, curr: usize, next: usize) -> bool {
    let a = vertices[prev];
    let b = vertices[curr];
    let c = vertices[next];

    // Reflex or collinear vertices are not ears.
    if cross_2d(&(b - a), &(c - b)) <= TOLERANCE {
        return false;
    }

    for (i, p) in vertices.iter().enumerate() {
        if i == prev || i == curr || i == next {
            continue;
        }
        if point_strictly_in_triangle(p, &a, &b, &c) {
            return false;
        }
    }
    true
}

/// Strict interior test against a counter-clockwise triangle.
fn point_strictly_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    cross_2d(&(b - a), &(p - a)) > TOLERANCE
        && cross_2d(&(c - b), &(p - b)) > TOLERANCE
        && cross_2d(&(a - c), &(p - c)) > TOLERANCE
}
