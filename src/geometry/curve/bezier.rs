use crate::error::{GeometryError, Result};
use crate::geometry::transform::AffineTransform;
use crate::math::{perp_ccw, Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A Bezier curve of arbitrary degree.
///
/// Defined by an ordered list of control points; the degree is one less
/// than the control-point count. Construction is permissive: curves
/// with fewer than two control points are representable but invalid,
/// and every evaluation on them yields "no result" instead of failing.
///
/// Evaluation uses de Casteljau's algorithm throughout. The parameter
/// is not restricted to `[0, 1]`; values outside extrapolate with the
/// same linear-interpolation semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier {
    control: Vec<Point2>,
}

fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    Point2::new(
        (1.0 - t) * a.x + t * b.x,
        (1.0 - t) * a.y + t * b.y,
    )
}

impl Bezier {
    /// Creates a curve from an arbitrary control-point list.
    #[must_use]
    pub fn new(control: Vec<Point2>) -> Self {
        Self { control }
    }

    /// Degree-1 curve: a straight segment.
    #[must_use]
    pub fn linear(p0: Point2, p1: Point2) -> Self {
        Self::new(vec![p0, p1])
    }

    /// Degree-2 curve.
    #[must_use]
    pub fn quadratic(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self::new(vec![p0, p1, p2])
    }

    /// Degree-3 curve.
    #[must_use]
    pub fn cubic(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self::new(vec![p0, p1, p2, p3])
    }

    /// Returns the control points in order.
    #[must_use]
    pub fn control_points(&self) -> &[Point2] {
        &self.control
    }

    /// Polynomial degree (`control count - 1`), or `None` for an empty
    /// control list.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.control.len().checked_sub(1)
    }

    /// A curve is valid when it has at least two control points.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.control.len() >= 2
    }

    /// First control point, or `None` when invalid.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        if !self.is_valid() {
            return None;
        }
        self.control.first().copied()
    }

    /// Last control point, or `None` when invalid.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        if !self.is_valid() {
            return None;
        }
        self.control.last().copied()
    }

    /// Evaluates the curve at `t` by de Casteljau reduction.
    ///
    /// Returns `None` when the curve is invalid.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Option<Point2> {
        if !self.is_valid() {
            return None;
        }
        let mut scratch = self.control.clone();
        let n = scratch.len();
        for level in 1..n {
            for i in 0..n - level {
                scratch[i] = lerp(scratch[i], scratch[i + 1], t);
            }
        }
        Some(scratch[0])
    }

    /// Evaluates the derivative at `t`.
    ///
    /// The derivative curve has control vectors
    /// `n * (P[i+1] - P[i])`; it is evaluated with the same de
    /// Casteljau reduction. Returns `None` when the curve is invalid.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Option<Vector2> {
        let degree = self.degree()?;
        if degree < 1 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let scale = degree as f64;
        let mut scratch: Vec<Vector2> = self
            .control
            .windows(2)
            .map(|w| (w[1] - w[0]) * scale)
            .collect();
        let n = scratch.len();
        for level in 1..n {
            for i in 0..n - level {
                scratch[i] = scratch[i] * (1.0 - t) + scratch[i + 1] * t;
            }
        }
        Some(scratch[0])
    }

    /// Unit tangent at `t`.
    ///
    /// Returns `None` when the curve is invalid or the derivative
    /// vanishes (e.g. coincident control points).
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Option<Vector2> {
        let d = self.derivative_at(t)?;
        let len = d.norm();
        if len < TOLERANCE {
            return None;
        }
        Some(d / len)
    }

    /// Unit normal at `t`: the tangent rotated a quarter turn
    /// counter-clockwise. Propagates the tangent's `None`.
    #[must_use]
    pub fn normal_at(&self, t: f64) -> Option<Vector2> {
        self.tangent_at(t).map(|tangent| perp_ccw(&tangent))
    }

    /// Splits the curve at `t` into two curves of the same degree.
    ///
    /// The left half ends, and the right half begins, at
    /// `point_at(t)`; both edges come from the de Casteljau
    /// construction table. Returns `None` when the curve is invalid.
    #[must_use]
    pub fn split_at(&self, t: f64) -> Option<(Self, Self)> {
        if !self.is_valid() {
            return None;
        }
        let mut scratch = self.control.clone();
        let n = scratch.len();
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        left.push(scratch[0]);
        right.push(scratch[n - 1]);
        for level in 1..n {
            for i in 0..n - level {
                scratch[i] = lerp(scratch[i], scratch[i + 1], t);
            }
            left.push(scratch[0]);
            right.push(scratch[n - level - 1]);
        }
        right.reverse();
        Some((Self::new(left), Self::new(right)))
    }

    /// Samples the curve at `n + 1` uniform parameter values
    /// `0, 1/n, ..., 1`.
    ///
    /// The first and last samples equal the start and end control
    /// points exactly. An invalid curve yields no samples; `n = 0`
    /// yields the start point alone.
    #[must_use]
    pub fn subdivide(&self, n: usize) -> Vec<Point2> {
        let Some(start) = self.start_point() else {
            return Vec::new();
        };
        if n == 0 {
            return vec![start];
        }
        let mut samples = Vec::with_capacity(n + 1);
        for i in 0..=n {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / n as f64;
            if let Some(p) = self.point_at(t) {
                samples.push(p);
            }
        }
        samples
    }

    /// Polyline approximation of the arc length using `segments`
    /// uniform samples (at least one).
    ///
    /// Refines toward the true arc length as the segment count grows;
    /// no closed form is computed. Returns `None` when the curve is
    /// invalid.
    #[must_use]
    pub fn length(&self, segments: usize) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        let samples = self.subdivide(segments.max(1));
        let mut sum = 0.0;
        for w in samples.windows(2) {
            sum += (w[1] - w[0]).norm();
        }
        Some(sum)
    }

    /// Conservative axis-aligned bounding box: the box of the control
    /// polygon.
    ///
    /// By the convex-hull property the curve always lies inside it;
    /// the box is generally not tight. Returns `None` when invalid.
    #[must_use]
    pub fn bounding_box(&self) -> Option<crate::geometry::Rect> {
        if !self.is_valid() {
            return None;
        }
        crate::geometry::Rect::from_points(&self.control)
    }

    /// The curve traversed in the opposite direction (control points
    /// reversed).
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut control = self.control.clone();
        control.reverse();
        Self::new(control)
    }

    /// Translates every control point by a displacement.
    #[must_use]
    pub fn translated(&self, by: Vector2) -> Self {
        Self::new(self.control.iter().map(|p| p + by).collect())
    }

    /// Scales every control point uniformly about a point.
    #[must_use]
    pub fn scaled(&self, factor: f64, about: Point2) -> Self {
        Self::new(
            self.control
                .iter()
                .map(|p| about + (p - about) * factor)
                .collect(),
        )
    }

    /// Applies an affine transform to every control point.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        Self::new(
            self.control
                .iter()
                .map(|p| transform.transform_point(p))
                .collect(),
        )
    }

    /// Applies a scalar function to every coordinate of every control
    /// point (e.g. a unit conversion), preserving count and order.
    #[must_use]
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self::new(
            self.control
                .iter()
                .map(|p| Point2::new(f(p.x), f(p.y)))
                .collect(),
        )
    }
}

impl Curve for Bezier {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.point_at(t).ok_or_else(|| {
            GeometryError::Degenerate("bezier needs at least two control points".into()).into()
        })
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.tangent_at(t)
            .ok_or_else(|| GeometryError::ZeroVector.into())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(s), Some(e)) => (e - s).norm() < TOLERANCE,
            _ => false,
        }
    }
}
