mod ngon;
mod triangulate;

pub use ngon::{Ngon, Quadrilateral, Triangle};
pub use triangulate::triangulate;

use crate::geometry::direction::Winding;
use crate::geometry::rect::Rect;
use crate::geometry::transform::AffineTransform;
use crate::math::polygon_2d::{
    bounds_2d, centroid_2d, is_convex_2d, perimeter_2d, point_in_polygon_2d,
    point_on_boundary_2d, signed_area_2d,
};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A polygon with a dynamic vertex count.
///
/// The ordered vertex loop is implicitly closed: the last vertex
/// connects back to the first. Construction is permissive; loops with
/// fewer than three vertices are representable but invalid, and metric
/// queries on them yield "no result" or empty values.
///
/// The winding direction is not stored; it is derived from the sign of
/// the shoelace sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A polygon is valid with at least three vertices.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Signed area (shoelace formula); positive for counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Cyclic perimeter.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices)
    }

    /// Area-weighted centroid, or `None` when the polygon is invalid
    /// or degenerate (zero area).
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        centroid_2d(&self.vertices)
    }

    /// Derived winding direction, or `None` for zero area.
    #[must_use]
    pub fn winding(&self) -> Option<Winding> {
        let area = self.signed_area();
        if area.abs() < TOLERANCE {
            return None;
        }
        Some(if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        })
    }

    /// Whether the loop runs counter-clockwise.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.winding() == Some(Winding::CounterClockwise)
    }

    /// Whether the loop runs clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.winding() == Some(Winding::Clockwise)
    }

    /// Convexity test; collinear consecutive edges are tolerated.
    /// Invalid polygons are not convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex_2d(&self.vertices)
    }

    /// Boundary-inclusive containment test.
    ///
    /// Interior classification uses the even-odd ray-casting rule;
    /// points on the boundary count as contained.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_on_boundary_2d(point, &self.vertices, TOLERANCE)
            || point_in_polygon_2d(point, &self.vertices)
    }

    /// Tests whether a point lies on the boundary within tolerance.
    #[must_use]
    pub fn is_on_boundary(&self, point: &Point2) -> bool {
        point_on_boundary_2d(point, &self.vertices, TOLERANCE)
    }

    /// Triangulates the polygon.
    ///
    /// Convex polygons fan from the first vertex (`n - 2` triangles);
    /// non-convex polygons go through ear clipping. The triangle areas
    /// sum to the polygon area for simple inputs. Invalid polygons
    /// yield no triangles.
    #[must_use]
    pub fn triangulate(&self) -> Vec<Triangle> {
        triangulate(&self.vertices)
    }

    /// Axis-aligned bounding box, or `None` for an empty polygon.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        bounds_2d(&self.vertices).map(|(min, max)| Rect::from_corners(min, max))
    }

    /// The same loop traversed in the opposite direction, flipping the
    /// winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Translates every vertex by a displacement.
    #[must_use]
    pub fn translated(&self, by: Vector2) -> Self {
        Self::new(self.vertices.iter().map(|p| p + by).collect())
    }

    /// Scales every vertex uniformly about a point.
    #[must_use]
    pub fn scaled(&self, factor: f64, about: Point2) -> Self {
        Self::new(
            self.vertices
                .iter()
                .map(|p| about + (p - about) * factor)
                .collect(),
        )
    }

    /// Rotates every vertex about a point.
    #[must_use]
    pub fn rotated(&self, by: f64, about: Point2) -> Self {
        self.transformed(&AffineTransform::rotation_about(by, about))
    }

    /// Applies an affine transform to every vertex.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        Self::new(
            self.vertices
                .iter()
                .map(|p| transform.transform_point(p))
                .collect(),
        )
    }

    /// Applies a scalar function to every coordinate of every vertex.
    #[must_use]
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self::new(
            self.vertices
                .iter()
                .map(|p| Point2::new(f(p.x), f(p.y)))
                .collect(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
    }

    fn l_shape() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
    }

    #[test]
    fn square_scenario() {
        let p = square();
        assert!(p.is_valid());
        assert_relative_eq!(p.area(), 16.0, epsilon = 1e-12);
        assert!(p.is_convex());
        assert_eq!(p.triangulate().len(), 2);
    }

    #[test]
    fn invalid_polygons_yield_nothing() {
        let empty = Polygon::new(Vec::new());
        assert!(empty.is_empty());
        assert!(!empty.is_valid());
        assert!(empty.centroid().is_none());
        assert!(empty.bounding_box().is_none());
        assert!(empty.triangulate().is_empty());

        let pair = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(!pair.is_valid());
        assert!(pair.area().abs() < TOLERANCE);
        assert!(!pair.is_convex());
        assert!(pair.triangulate().is_empty());
    }

    #[test]
    fn winding_flips_on_reversal() {
        let p = square();
        assert!(p.is_counter_clockwise());
        assert!(!p.is_clockwise());

        let r = p.reversed();
        assert!(r.is_clockwise());
        assert_eq!(r.winding().unwrap().opposite(), p.winding().unwrap());
        assert_relative_eq!(r.signed_area(), -16.0, epsilon = 1e-12);
        assert_eq!(r.reversed(), p);
    }

    #[test]
    fn containment_with_boundary_policy() {
        let p = square();
        assert!(p.contains(&Point2::new(2.0, 2.0)));
        assert!(!p.contains(&Point2::new(4.5, 2.0)));
        // Boundary points are contained.
        assert!(p.contains(&Point2::new(4.0, 2.0)));
        assert!(p.contains(&Point2::new(0.0, 0.0)));
        assert!(p.is_on_boundary(&Point2::new(4.0, 2.0)));
        assert!(!p.is_on_boundary(&Point2::new(2.0, 2.0)));
    }

    #[test]
    fn concave_containment() {
        let p = l_shape();
        assert!(!p.is_convex());
        assert!(p.contains(&Point2::new(0.5, 0.5)));
        // Inside the bounding box but in the notch.
        assert!(!p.contains(&Point2::new(1.5, 1.5)));
    }

    #[test]
    fn triangulation_conserves_area() {
        let p = l_shape();
        let triangles = p.triangulate();
        let total: f64 = triangles.iter().map(Triangle::area).sum();
        assert_relative_eq!(total, p.area(), epsilon = 1e-10);
    }

    #[test]
    fn centroid_of_square() {
        let c = square().centroid().unwrap();
        assert!((c - Point2::new(2.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn transforms_compose_with_metrics() {
        let p = square();
        let moved = p.translated(Vector2::new(1.0, 1.0));
        assert_relative_eq!(moved.area(), 16.0, epsilon = 1e-12);
        assert!((moved.centroid().unwrap() - Point2::new(3.0, 3.0)).norm() < 1e-12);

        let shrunk = p.scaled(0.5, Point2::origin());
        assert_relative_eq!(shrunk.area(), 4.0, epsilon = 1e-12);

        let spun = p.rotated(std::f64::consts::FRAC_PI_2, Point2::new(2.0, 2.0));
        assert_relative_eq!(spun.area(), 16.0, epsilon = 1e-9);
        assert!((spun.centroid().unwrap() - Point2::new(2.0, 2.0)).norm() < 1e-9);

        let mapped = p.map(|x| x + 1.0);
        assert!((mapped.vertices()[0] - Point2::new(1.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn bounding_box_of_l_shape() {
        let bb = l_shape().bounding_box().unwrap();
        assert!(bb.min.x.abs() < TOLERANCE && bb.min.y.abs() < TOLERANCE);
        assert!((bb.max.x - 2.0).abs() < TOLERANCE);
        assert!((bb.max.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_of_square() {
        assert_relative_eq!(square().perimeter(), 16.0, epsilon = 1e-12);
    }
}
