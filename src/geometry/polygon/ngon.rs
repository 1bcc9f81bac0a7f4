use crate::error::{OperationError, Result};
use crate::geometry::curve::Circle;
use crate::geometry::direction::Winding;
use crate::geometry::rect::Rect;
use crate::geometry::transform::AffineTransform;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{
    bounds_2d, centroid_2d, is_convex_2d, perimeter_2d, point_in_polygon_2d,
    point_on_boundary_2d, signed_area_2d,
};
use crate::math::{cross_2d, perp_ccw, Point2, Vector2, TOLERANCE};

use super::Polygon;

/// A polygon with a fixed vertex count known at compile time.
///
/// Like [`Polygon`], the vertex loop is implicitly closed. The fixed
/// arity lives on the stack and allows shape-specific operations such
/// as the triangle centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ngon<const N: usize> {
    vertices: [Point2; N],
}

/// A three-vertex [`Ngon`].
pub type Triangle = Ngon<3>;

/// A four-vertex [`Ngon`].
pub type Quadrilateral = Ngon<4>;

impl<const N: usize> Ngon<N> {
    /// Creates an N-gon from exactly `N` vertices.
    #[must_use]
    pub fn new(vertices: [Point2; N]) -> Self {
        Self { vertices }
    }

    /// Creates an N-gon from a slice.
    ///
    /// # Errors
    ///
    /// Returns an error when the slice length is not exactly `N`.
    pub fn from_slice(slice: &[Point2]) -> Result<Self> {
        let vertices: [Point2; N] = slice.try_into().map_err(|_| {
            OperationError::InvalidInput(format!(
                "expected {} vertices, got {}",
                N,
                slice.len()
            ))
        })?;
        Ok(Self { vertices })
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; N] {
        &self.vertices
    }

    /// Converts to a dynamic [`Polygon`].
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices.to_vec())
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

    /// Area-weighted centroid, or `None` for a degenerate loop.
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

    /// Convexity test; collinear consecutive edges are tolerated.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex_2d(&self.vertices)
    }

    /// Boundary-inclusive containment test (even-odd rule).
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

    /// Axis-aligned bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        // N >= 1 in any useful instantiation; an Ngon<0> has no extent.
        bounds_2d(&self.vertices).map_or_else(
            || Rect::from_corners(Point2::origin(), Point2::origin()),
            |(min, max)| Rect::from_corners(min, max),
        )
    }

    /// The same loop traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices;
        vertices.reverse();
        Self { vertices }
    }

    /// Translates every vertex by a displacement.
    #[must_use]
    pub fn translated(&self, by: Vector2) -> Self {
        Self {
            vertices: self.vertices.map(|p| p + by),
        }
    }

    /// Scales every vertex uniformly about a point.
    #[must_use]
    pub fn scaled(&self, factor: f64, about: Point2) -> Self {
        Self {
            vertices: self.vertices.map(|p| about + (p - about) * factor),
        }
    }

    /// Applies an affine transform to every vertex.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        Self {
            vertices: self.vertices.map(|p| transform.transform_point(&p)),
        }
    }

    /// Applies a scalar function to every coordinate of every vertex.
    #[must_use]
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            vertices: self.vertices.map(|p| Point2::new(f(p.x), f(p.y))),
        }
    }
}

impl Triangle {
    /// Convenience constructor from three points.
    #[must_use]
    pub fn from_points(a: Point2, b: Point2, c: Point2) -> Self {
        Self::new([a, b, c])
    }

    /// An equilateral triangle centered on `center` with the given
    /// side length, one vertex pointing up.
    ///
    /// # Errors
    ///
    /// Returns an error when the side length is not positive.
    pub fn equilateral(center: Point2, side: f64) -> Result<Self> {
        if side < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "equilateral side length must be positive".into(),
            )
            .into());
        }
        let circumradius = side / 3.0_f64.sqrt();
        let mut vertices = [Point2::origin(); 3];
        for (i, v) in vertices.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * i as f64 / 3.0;
            *v = center + Vector2::new(angle.cos(), angle.sin()) * circumradius;
        }
        Ok(Self::new(vertices))
    }

    /// An isosceles triangle over the base from `base_start` to
    /// `base_end`, with the apex at leg distance from both base
    /// endpoints, on the left of the base direction.
    ///
    /// # Errors
    ///
    /// Returns an error when the base is degenerate or the legs are
    /// too short to reach an apex (`leg <= base / 2`).
    pub fn isosceles(base_start: Point2, base_end: Point2, leg: f64) -> Result<Self> {
        let base = base_end - base_start;
        let base_len = base.norm();
        if base_len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("isosceles base must have length".into()).into(),
            );
        }
        let half = base_len * 0.5;
        let height_sq = leg * leg - half * half;
        if height_sq < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "leg {leg} is too short to reach an apex over a base of length {base_len}"
            ))
            .into());
        }
        let midpoint = base_start + base * 0.5;
        let apex = midpoint + perp_ccw(&(base / base_len)) * height_sq.sqrt();
        Ok(Self::new([base_start, base_end, apex]))
    }

    /// First vertex.
    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.vertices[0]
    }

    /// Second vertex.
    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.vertices[1]
    }

    /// Third vertex.
    #[must_use]
    pub fn c(&self) -> &Point2 {
        &self.vertices[2]
    }

    /// Side lengths opposite `a`, `b`, and `c` respectively.
    #[must_use]
    pub fn edge_lengths(&self) -> (f64, f64, f64) {
        (
            (self.vertices[2] - self.vertices[1]).norm(),
            (self.vertices[0] - self.vertices[2]).norm(),
            (self.vertices[1] - self.vertices[0]).norm(),
        )
    }

    /// Circle through all three vertices, or `None` for collinear
    /// vertices.
    ///
    /// Found as the intersection of two perpendicular edge bisectors.
    #[must_use]
    pub fn circumcircle(&self) -> Option<Circle> {
        let [a, b, c] = self.vertices;
        let mid_ab = a + (b - a) * 0.5;
        let mid_bc = b + (c - b) * 0.5;
        let (t, _) = line_line_intersect_2d(
            &mid_ab,
            &perp_ccw(&(b - a)),
            &mid_bc,
            &perp_ccw(&(c - b)),
        )?;
        let center = mid_ab + perp_ccw(&(b - a)) * t;
        Circle::new(center, (a - center).norm()).ok()
    }

    /// Inscribed circle, or `None` for a degenerate triangle.
    ///
    /// The incenter weights each vertex by the length of its opposite
    /// side; the radius is `area / semiperimeter`.
    #[must_use]
    pub fn incircle(&self) -> Option<Circle> {
        let area = self.area();
        if area < TOLERANCE {
            return None;
        }
        let (la, lb, lc) = self.edge_lengths();
        let sum = la + lb + lc;
        let [a, b, c] = self.vertices;
        let center = Point2::from((a.coords * la + b.coords * lb + c.coords * lc) / sum);
        Circle::new(center, area / (sum * 0.5)).ok()
    }

    /// Barycentric coordinates `(u, v, w)` of a point with respect to
    /// vertices `(a, b, c)`; the weights sum to one. Returns `None`
    /// for a degenerate triangle.
    #[must_use]
    pub fn barycentric(&self, point: &Point2) -> Option<(f64, f64, f64)> {
        let [a, b, c] = self.vertices;
        let denom = cross_2d(&(b - a), &(c - a));
        if denom.abs() < TOLERANCE {
            return None;
        }
        let v = cross_2d(&(point - a), &(c - a)) / denom;
        let w = cross_2d(&(b - a), &(point - a)) / denom;
        Some((1.0 - v - w, v, w))
    }

    /// Intersection of the altitudes, or `None` for a degenerate
    /// triangle.
    ///
    /// Uses the Euler-line identity `H = A + B + C - 2 * O` with `O`
    /// the circumcenter.
    #[must_use]
    pub fn orthocenter(&self) -> Option<Point2> {
        let circum = self.circumcircle()?;
        let [a, b, c] = self.vertices;
        let sum = a.coords + b.coords + c.coords;
        Some(Point2::from(sum - circum.center().coords * 2.0))
    }
}
