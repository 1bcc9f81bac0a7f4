use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::geometry::transform::AffineTransform;
use crate::math::{Matrix2, Point2, Rotation2, Vector2, TOLERANCE};

use super::{Bezier, Circle, Curve, CurveDomain};

/// An ellipse in the plane.
///
/// Defined by a center, semi-axis lengths, and a rotation of the major
/// axis away from +x:
///
/// `P(t) = center + R(rotation) * (semi_major * cos(t), semi_minor * sin(t))`
///
/// The axis lengths are taken as given (no swapping is performed);
/// equal axes describe a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point2,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis length is not positive.
    pub fn new(center: Point2, semi_major: f64, semi_minor: f64, rotation: f64) -> Result<Self> {
        if semi_major < TOLERANCE {
            return Err(
                GeometryError::Degenerate("semi-major axis must be positive".into()).into(),
            );
        }
        if semi_minor < TOLERANCE {
            return Err(
                GeometryError::Degenerate("semi-minor axis must be positive".into()).into(),
            );
        }
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            rotation,
        })
    }

    /// The circle special case (`semi_major == semi_minor == radius`).
    ///
    /// # Errors
    ///
    /// Returns an error for a degenerate point-circle (zero radius).
    pub fn from_circle(circle: &Circle) -> Result<Self> {
        Self::new(*circle.center(), circle.radius(), circle.radius(), 0.0)
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Returns the rotation of the major axis, in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Eccentricity in `[0, 1)`; `0` for a circle.
    ///
    /// Computed from the shorter-to-longer axis ratio, so it stays
    /// defined whichever axis was passed as `semi_major`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        let longer = self.semi_major.max(self.semi_minor);
        let shorter = self.semi_major.min(self.semi_minor);
        let ratio = shorter / longer;
        (1.0 - ratio * ratio).max(0.0).sqrt()
    }

    /// The two focal points, on the longer axis at distance
    /// `sqrt(|a^2 - b^2|)` from the center. Both coincide with the
    /// center for a circle.
    #[must_use]
    pub fn foci(&self) -> (Point2, Point2) {
        let c = (self.semi_major * self.semi_major - self.semi_minor * self.semi_minor)
            .abs()
            .sqrt();
        let axis = if self.semi_major >= self.semi_minor {
            Vector2::new(self.rotation.cos(), self.rotation.sin())
        } else {
            Vector2::new(-self.rotation.sin(), self.rotation.cos())
        };
        (self.center + axis * c, self.center - axis * c)
    }

    /// Enclosed area: `pi * a * b`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.semi_major * self.semi_minor
    }

    /// Perimeter via Ramanujan's approximation.
    ///
    /// Exact for circles; for eccentric ellipses this is an
    /// approximation (relative error well under 1e-4 for axis ratios
    /// down to about 1:5).
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let a = self.semi_major;
        let b = self.semi_minor;
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }

    /// Point on the ellipse at parameter angle `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let local = Vector2::new(self.semi_major * t.cos(), self.semi_minor * t.sin());
        self.center + Rotation2::new(self.rotation) * local
    }

    /// Unit tangent at parameter angle `t`, in the counter-clockwise
    /// direction of travel.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let local = Vector2::new(-self.semi_major * t.sin(), self.semi_minor * t.cos());
        let tangent = Rotation2::new(self.rotation) * local;
        // Non-zero for positive axes: sin and cos never vanish together.
        tangent / tangent.norm()
    }

    /// Boundary-inclusive containment test.
    ///
    /// The point is carried into the ellipse's unrotated unit-circle
    /// frame (translate, counter-rotate, divide by the axes) and tested
    /// against `x^2 + y^2 <= 1`.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let local = Rotation2::new(-self.rotation) * (point - self.center);
        let x = local.x / self.semi_major;
        let y = local.y / self.semi_minor;
        x * x + y * y <= 1.0 + TOLERANCE
    }

    /// Axis-aligned bounding box, computed analytically from the
    /// extremal projections `sqrt(a^2 cos^2(r) + b^2 sin^2(r))` of the
    /// rotated axes.
    #[must_use]
    pub fn bounding_box(&self) -> crate::geometry::Rect {
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let a_sq = self.semi_major * self.semi_major;
        let b_sq = self.semi_minor * self.semi_minor;
        let half_w = (a_sq * cos_r * cos_r + b_sq * sin_r * sin_r).sqrt();
        let half_h = (a_sq * sin_r * sin_r + b_sq * cos_r * cos_r).sqrt();
        let half = Vector2::new(half_w, half_h);
        crate::geometry::Rect::from_corners(self.center - half, self.center + half)
    }

    /// Approximates the ellipse with four cubic Bezier segments.
    ///
    /// The four unit-circle quadrant cubics are carried through the
    /// ellipse's affine frame (scale by the axes, rotate, translate),
    /// which preserves endpoint exactness and junction tangent
    /// continuity.
    #[must_use]
    pub fn to_beziers(&self) -> Vec<Bezier> {
        let frame = AffineTransform::new(
            Rotation2::new(self.rotation).matrix() * Matrix2::new(self.semi_major, 0.0, 0.0, self.semi_minor),
            self.center.coords,
        );
        Circle::unit()
            .to_beziers()
            .into_iter()
            .map(|b| b.transformed(&frame))
            .collect()
    }

    /// Translates the ellipse by a displacement.
    #[must_use]
    pub fn translated(&self, by: Vector2) -> Self {
        Self {
            center: self.center + by,
            ..*self
        }
    }

    /// Rotates the ellipse about its own center.
    #[must_use]
    pub fn rotated(&self, by: f64) -> Self {
        Self {
            rotation: self.rotation + by,
            ..*self
        }
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        Ok(self.tangent_at(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
