use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::angle::angle_in_arc_range;
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Bezier, Curve, CurveDomain};

/// A circular arc in the plane.
///
/// Defined by a center, radius, and signed start/end angles in radians.
/// Angles are not required to be normalized into `[0, 2*pi)`; the sweep
/// `end_angle - start_angle` carries the traversal direction (positive
/// is counter-clockwise).
///
/// Two parameterizations are exposed: the normalized form
/// `point_at(t)` with `t` in `[0, 1]` sweeping from start to end, and
/// the [`Curve`] trait, whose parameter is the absolute angle over the
/// domain `[start_angle, end_angle]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// A full-turn arc (sweep `2*pi`) beginning at `start_angle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn full_circle(center: Point2, radius: f64, start_angle: f64) -> Result<Self> {
        Self::new(center, radius, start_angle, start_angle + TAU)
    }

    /// A half-turn arc (sweep `pi`) beginning at `start_angle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn semicircle(center: Point2, radius: f64, start_angle: f64) -> Result<Self> {
        Self::new(center, radius, start_angle, start_angle + PI)
    }

    /// A quarter-turn arc (sweep `pi/2`) beginning at `start_angle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn quarter_circle(center: Point2, radius: f64, start_angle: f64) -> Result<Self> {
        Self::new(center, radius, start_angle, start_angle + FRAC_PI_2)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Signed sweep `end_angle - start_angle`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether the arc runs counter-clockwise (positive sweep).
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.sweep() > 0.0
    }

    /// Whether the sweep covers at least a full turn.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.sweep().abs() >= TAU - TOLERANCE
    }

    /// Arc length: `radius * |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep().abs()
    }

    /// Absolute angle at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + self.sweep() * t
    }

    /// Point at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.point_at_angle(self.angle_at(t))
    }

    /// Point at an absolute angle (not restricted to the swept range).
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Start point (`t = 0`).
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// End point (`t = 1`).
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }

    /// Midpoint of the sweep (`t = 0.5`).
    #[must_use]
    pub fn mid_point(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Unit tangent at normalized parameter `t`, pointing in the
    /// direction of travel.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = self.angle_at(t);
        let sign = if self.sweep() >= 0.0 { 1.0 } else { -1.0 };
        Vector2::new(-sign * angle.sin(), sign * angle.cos())
    }

    /// The same arc traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
        }
    }

    /// Tests whether a point lies on the arc.
    ///
    /// The point must sit at the arc's radius (within tolerance) and
    /// its angle must fall inside the swept range.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let to_point = point - self.center;
        if (to_point.norm() - self.radius).abs() > TOLERANCE {
            return false;
        }
        let angle = to_point.y.atan2(to_point.x);
        angle_in_arc_range(angle, self.start_angle, self.sweep())
    }

    /// Axis-aligned bounding box.
    ///
    /// Starts from the two endpoints and grows by each axis-extremal
    /// angle (`0`, `pi/2`, `pi`, `3*pi/2`) the sweep actually crosses;
    /// an extremal angle outside the sweep does not contribute.
    #[must_use]
    pub fn bounding_box(&self) -> crate::geometry::Rect {
        let mut rect =
            crate::geometry::Rect::from_corners(self.start_point(), self.end_point());
        let sweep = self.sweep();
        for extremal in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2] {
            if angle_in_arc_range(extremal, self.start_angle, sweep) {
                rect = rect.expanded_to(self.point_at_angle(extremal));
            }
        }
        rect
    }

    /// Converts the arc to a chain of cubic Bezier segments.
    ///
    /// The sweep (clamped to one full turn) is split into at most four
    /// sub-arcs of at most a quarter turn each. Each sub-arc becomes one
    /// cubic whose tangent-handle length uses the factor
    /// `k = 4/3 * tan(delta / 4)` for that sub-arc's sweep `delta`, so
    /// segment endpoints coincide exactly with the analytic arc points
    /// and junction tangents are continuous. A zero sweep yields no
    /// segments.
    #[must_use]
    pub fn to_beziers(&self) -> Vec<Bezier> {
        let sweep = self.sweep();
        if sweep.abs() < TOLERANCE {
            return Vec::new();
        }
        let sweep = sweep.clamp(-TAU, TAU);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = ((sweep.abs() / FRAC_PI_2).ceil() as usize).clamp(1, 4);
        #[allow(clippy::cast_precision_loss)]
        let delta = sweep / count as f64;
        let handle = 4.0 / 3.0 * (delta / 4.0).tan() * self.radius;

        let mut segments = Vec::with_capacity(count);
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let a0 = self.start_angle + delta * i as f64;
            let a1 = a0 + delta;
            let p0 = self.point_at_angle(a0);
            let p3 = self.point_at_angle(a1);
            // Counter-clockwise circle tangents; the handle's sign
            // carries the traversal direction.
            let t0 = Vector2::new(-a0.sin(), a0.cos());
            let t1 = Vector2::new(-a1.sin(), a1.cos());
            segments.push(Bezier::cubic(p0, p0 + t0 * handle, p3 - t1 * handle, p3));
        }
        segments
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.point_at_angle(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let tangent = Vector2::new(-t.sin(), t.cos());
        let sign = if self.sweep() >= 0.0 { 1.0 } else { -1.0 };
        Ok(tangent * sign)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        self.is_full_circle()
    }
}
