use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{circle_circle_intersect_2d, line_circle_intersect_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Arc, Bezier, Curve, CurveDomain, Ellipse, Line};

/// A full circle in the plane.
///
/// Defined by a center and a non-negative radius. The parametric domain
/// is `[0, 2*pi)` and the curve is always closed:
///
/// `P(angle) = center + radius * (cos(angle), sin(angle))`
///
/// A zero radius is a legal degenerate point-circle; queries on it
/// return empty or degenerate results rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(
                GeometryError::Degenerate("circle radius must be non-negative".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// The unit circle centered at the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            center: Point2::origin(),
            radius: 1.0,
        }
    }

    /// Converts an ellipse with equal semi-axes back to a circle.
    ///
    /// Returns `None` when the axes differ by more than `TOLERANCE`.
    #[must_use]
    pub fn from_ellipse(ellipse: &Ellipse) -> Option<Self> {
        if (ellipse.semi_major() - ellipse.semi_minor()).abs() > TOLERANCE {
            return None;
        }
        Some(Self {
            center: *ellipse.center(),
            radius: ellipse.semi_major(),
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Perimeter length.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Point on the circle at the given angle.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Unit tangent at the given angle, in the counter-clockwise
    /// direction of travel.
    #[must_use]
    pub fn tangent_at(&self, angle: f64) -> Vector2 {
        Vector2::new(-angle.sin(), angle.cos())
    }

    /// Boundary-inclusive containment test.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        (point - self.center).norm() <= self.radius + TOLERANCE
    }

    /// Strict interior containment test (boundary points excluded).
    #[must_use]
    pub fn contains_interior(&self, point: &Point2) -> bool {
        (point - self.center).norm() < self.radius - TOLERANCE
    }

    /// Axis-aligned bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> crate::geometry::Rect {
        let r = Vector2::new(self.radius, self.radius);
        crate::geometry::Rect::from_corners(self.center - r, self.center + r)
    }

    /// Intersection with an infinite line.
    ///
    /// Returns zero, one (tangency), or two points ordered by
    /// increasing line parameter.
    #[must_use]
    pub fn intersect_line(&self, line: &Line) -> Vec<Point2> {
        line_circle_intersect_2d(line.origin(), line.direction(), &self.center, self.radius)
            .into_iter()
            .map(|t| line.point_at(t))
            .collect()
    }

    /// Intersection with another circle.
    ///
    /// Returns zero, one (tangency), or two points. Separate, nested,
    /// concentric, and coincident pairs yield the empty set.
    #[must_use]
    pub fn intersect_circle(&self, other: &Self) -> Vec<Point2> {
        circle_circle_intersect_2d(&self.center, self.radius, &other.center, other.radius)
    }

    /// Approximates the circle with four cubic Bezier segments.
    ///
    /// Each segment spans a quarter turn; junctions match the analytic
    /// circle points and tangent directions. A degenerate point-circle
    /// yields no segments.
    #[must_use]
    pub fn to_beziers(&self) -> Vec<Bezier> {
        match Arc::full_circle(self.center, self.radius, 0.0) {
            Ok(arc) => arc.to_beziers(),
            Err(_) => Vec::new(),
        }
    }

    /// Translates the circle by a displacement.
    #[must_use]
    pub fn translated(&self, by: Vector2) -> Self {
        Self {
            center: self.center + by,
            radius: self.radius,
        }
    }

    /// Scales the circle uniformly about a point.
    #[must_use]
    pub fn scaled(&self, factor: f64, about: Point2) -> Self {
        Self {
            center: about + (self.center - about) * factor,
            radius: self.radius * factor.abs(),
        }
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        if self.radius < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.tangent_at(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
