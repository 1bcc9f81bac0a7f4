use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::intersect_2d::{line_line_intersect_2d, segment_segment_intersect_2d};
use crate::math::{cross_2d, Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is `P(t) = origin + t * direction`, with `t`
/// ranging over all reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Evaluates `origin + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// Perpendicular distance from a point to the line.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        cross_2d(&self.direction, &(point - self.origin)).abs()
    }

    /// Parameter of the orthogonal projection of `point` onto the line.
    #[must_use]
    pub fn project(&self, point: &Point2) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Tests whether a point lies on the line within tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.distance_to(point) <= TOLERANCE
    }

    /// Intersection with another line, or `None` when parallel.
    #[must_use]
    pub fn intersect_line(&self, other: &Self) -> Option<Point2> {
        let (t, _) = line_line_intersect_2d(
            &self.origin,
            &self.direction,
            &other.origin,
            &other.direction,
        )?;
        Some(self.point_at(t))
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.point_at(t))
    }

    fn tangent(&self, _t: f64) -> Result<Vector2> {
        Ok(self.direction)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

/// A half-infinite ray: `P(t) = origin + t * direction` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point2,
    direction: Vector2,
}

impl Ray {
    /// Creates a new ray from an origin and direction.
    ///
    /// The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Evaluates `origin + t * direction`. Callers are expected to pass
    /// `t >= 0`; negative parameters fall behind the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// The infinite line carrying this ray.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line {
            origin: self.origin,
            direction: self.direction,
        }
    }

    /// Tests whether a point lies on the ray.
    ///
    /// The point must be within `TOLERANCE` of the carrying line and
    /// project to a parameter `t >= 0`. The parameter check is a strict
    /// comparison with no epsilon band: a point exactly at the origin is
    /// contained, anything behind it is not.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let to_point = point - self.origin;
        if cross_2d(&self.direction, &to_point).abs() > TOLERANCE {
            return false;
        }
        to_point.dot(&self.direction) >= 0.0
    }

    /// Minimum distance from a point to the ray.
    ///
    /// Projections behind the origin clamp to the origin.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        let t = (point - self.origin).dot(&self.direction);
        if t <= 0.0 {
            (point - self.origin).norm()
        } else {
            (point - self.point_at(t)).norm()
        }
    }

    /// Intersection with a segment, or `None` when they do not meet.
    ///
    /// Solutions with a negative ray parameter are rejected.
    #[must_use]
    pub fn intersect_segment(&self, segment: &Segment) -> Option<Point2> {
        let d_seg = segment.end - segment.start;
        let cross = cross_2d(&self.direction, &d_seg);
        if cross.abs() < TOLERANCE {
            return None;
        }
        let delta = segment.start - self.origin;
        let t = cross_2d(&delta, &d_seg) / cross;
        let u = cross_2d(&delta, &self.direction) / cross;
        if t < 0.0 || !(-TOLERANCE..=1.0 + TOLERANCE).contains(&u) {
            return None;
        }
        Some(self.point_at(t))
    }
}

/// A bounded line segment from `start` to `end`.
///
/// The parametric form is `P(t) = start + t * (end - start)` for
/// `t` in `[0, 1]`. Degenerate (zero-length) segments are permitted and
/// behave as points for distance purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub start: Point2,
    /// End point.
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Evaluates the segment at `t` (interpolation; extrapolates
    /// outside `[0, 1]`).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    /// Whether the segment has (numerically) zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Unit direction from start to end, or `None` when degenerate.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        let d = self.end - self.start;
        let len = d.norm();
        if len < TOLERANCE {
            return None;
        }
        Some(d / len)
    }

    /// The segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Minimum distance from a point to the segment.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        point_to_segment_dist(point, &self.start, &self.end)
    }

    /// Tests whether a point lies on the segment within tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.distance_to(point) <= TOLERANCE
    }

    /// Intersection with another segment, or `None` when they do not
    /// cross (parallel and overlapping segments also yield `None`).
    #[must_use]
    pub fn intersect_segment(&self, other: &Self) -> Option<Point2> {
        segment_segment_intersect_2d(&self.start, &self.end, &other.start, &other.end)
            .map(|(p, _, _)| p)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn line_rejects_zero_direction() {
        assert!(Line::new(Point2::origin(), Vector2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn line_direction_is_normalized() {
        let l = Line::new(Point2::origin(), Vector2::new(3.0, 4.0)).unwrap();
        assert!((l.direction().norm() - 1.0).abs() < TOLERANCE);
        let p = l.point_at(5.0);
        assert!((p.x - 3.0).abs() < TOLERANCE);
        assert!((p.y - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_distance_and_projection() {
        let l = Line::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert!((l.distance_to(&Point2::new(3.0, 2.0)) - 2.0).abs() < TOLERANCE);
        assert!((l.project(&Point2::new(3.0, 2.0)) - 3.0).abs() < TOLERANCE);
        assert!(l.contains(&Point2::new(-7.0, 0.0)));
    }

    #[test]
    fn line_line_crossing() {
        let a = Line::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        let b = Line::new(Point2::new(2.0, -1.0), Vector2::new(0.0, 1.0)).unwrap();
        let p = a.intersect_line(&b).unwrap();
        assert!((p.x - 2.0).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);
        assert!(a.intersect_line(&a).is_none());
    }

    #[test]
    fn ray_rejects_points_behind_origin() {
        let r = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert!(r.contains(&Point2::new(2.0, 0.0)));
        assert!(r.contains(&Point2::origin()));
        assert!(!r.contains(&Point2::new(-0.1, 0.0)));
        assert!(!r.contains(&Point2::new(2.0, 1.0)));
    }

    #[test]
    fn ray_distance_clamps_to_origin() {
        let r = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert!((r.distance_to(&Point2::new(3.0, 4.0)) - 4.0).abs() < TOLERANCE);
        assert!((r.distance_to(&Point2::new(-3.0, 4.0)) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn ray_segment_intersection() {
        let r = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        let s = Segment::new(Point2::new(2.0, -1.0), Point2::new(2.0, 1.0));
        let p = r.intersect_segment(&s).unwrap();
        assert!((p.x - 2.0).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);

        // Same segment behind the ray: no hit.
        let behind = Segment::new(Point2::new(-2.0, -1.0), Point2::new(-2.0, 1.0));
        assert!(r.intersect_segment(&behind).is_none());
    }

    #[test]
    fn segment_basics() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert!((s.length() - 200.0_f64.sqrt()).abs() < TOLERANCE);
        let m = s.midpoint();
        assert!((m.x - 5.0).abs() < TOLERANCE && (m.y - 5.0).abs() < TOLERANCE);
        assert!(s.contains(&Point2::new(5.0, 5.0)));
        assert!(!s.contains(&Point2::new(11.0, 11.0)));
    }

    #[test]
    fn degenerate_segment_acts_as_point() {
        let s = Segment::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert!(s.is_degenerate());
        assert!(s.direction().is_none());
        assert!((s.distance_to(&Point2::new(4.0, 5.0)) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn segment_reversal() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0));
        let r = s.reversed();
        assert!((r.start - s.end).norm() < TOLERANCE);
        assert!((r.end - s.start).norm() < TOLERANCE);
    }

    #[test]
    fn segment_crossing() {
        let a = Segment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = Segment::new(Point2::new(0.0, 2.0), Point2::new(2.0, 0.0));
        let p = a.intersect_segment(&b).unwrap();
        assert!((p.x - 1.0).abs() < TOLERANCE && (p.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_trait_domain_is_unbounded() {
        let l = Line::new(Point2::origin(), Vector2::x()).unwrap();
        let d = l.domain();
        assert!(d.t_min.is_infinite() && d.t_max.is_infinite());
        assert!(!l.is_closed());
    }
}
