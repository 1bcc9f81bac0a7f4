use crate::math::{Matrix2, Point2, Rotation2, Vector2, TOLERANCE};

/// An affine transformation of the plane: a 2x2 linear part followed by
/// a translation.
///
/// `T(p) = linear * p + translation`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    linear: Matrix2,
    translation: Vector2,
}

impl AffineTransform {
    /// Creates a transform from an explicit linear part and translation.
    #[must_use]
    pub fn new(linear: Matrix2, translation: Vector2) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix2::identity(), Vector2::zeros())
    }

    /// A pure translation.
    #[must_use]
    pub fn translation(by: Vector2) -> Self {
        Self::new(Matrix2::identity(), by)
    }

    /// A rotation about the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        Self::new(*Rotation2::new(angle).matrix(), Vector2::zeros())
    }

    /// A rotation about an arbitrary point.
    #[must_use]
    pub fn rotation_about(angle: f64, center: Point2) -> Self {
        let linear = *Rotation2::new(angle).matrix();
        Self::new(linear, center.coords - linear * center.coords)
    }

    /// An axis-aligned scaling about the origin.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(Matrix2::new(sx, 0.0, 0.0, sy), Vector2::zeros())
    }

    /// A uniform scaling about an arbitrary point.
    #[must_use]
    pub fn scaling_about(factor: f64, center: Point2) -> Self {
        Self::new(
            Matrix2::new(factor, 0.0, 0.0, factor),
            center.coords * (1.0 - factor),
        )
    }

    /// Returns the 2x2 linear part.
    #[must_use]
    pub fn linear(&self) -> &Matrix2 {
        &self.linear
    }

    /// Returns the translation part.
    #[must_use]
    pub fn translation_part(&self) -> &Vector2 {
        &self.translation
    }

    /// Composes two transforms: the result applies `self` first, then
    /// `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self::new(
            next.linear * self.linear,
            next.linear * self.translation + next.translation,
        )
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.linear.determinant()
    }

    /// The inverse transform, or `None` when the linear part is
    /// singular (determinant within tolerance of zero).
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if self.determinant().abs() < TOLERANCE {
            return None;
        }
        let inv = self.linear.try_inverse()?;
        Some(Self::new(inv, -(inv * self.translation)))
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        Point2::from(self.linear * point.coords + self.translation)
    }

    /// Applies the linear part to a displacement vector (translation
    /// does not act on displacements).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector2) -> Vector2 {
        self.linear * vector
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_fixes_points() {
        let p = Point2::new(3.0, -2.0);
        let q = AffineTransform::identity().transform_point(&p);
        assert!((q - p).norm() < TOLERANCE);
    }

    #[test]
    fn rotation_quarter_turn() {
        let xf = AffineTransform::rotation(FRAC_PI_2);
        let q = xf.transform_point(&Point2::new(1.0, 0.0));
        assert!(q.x.abs() < 1e-9);
        assert!((q.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_about_fixes_center() {
        let center = Point2::new(2.0, 1.0);
        let xf = AffineTransform::rotation_about(1.234, center);
        let q = xf.transform_point(&center);
        assert!((q - center).norm() < 1e-9);
    }

    #[test]
    fn scaling_about_fixes_center() {
        let center = Point2::new(1.0, 1.0);
        let xf = AffineTransform::scaling_about(3.0, center);
        assert!((xf.transform_point(&center) - center).norm() < TOLERANCE);
        let q = xf.transform_point(&Point2::new(2.0, 1.0));
        assert!((q.x - 4.0).abs() < TOLERANCE);
        assert!((q.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn composition_order() {
        // Scale by 2 about the origin, then translate by (1, 0).
        let xf = AffineTransform::scaling(2.0, 2.0)
            .then(&AffineTransform::translation(Vector2::new(1.0, 0.0)));
        let q = xf.transform_point(&Point2::new(1.0, 1.0));
        assert!((q.x - 3.0).abs() < TOLERANCE);
        assert!((q.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn inverse_round_trip() {
        let xf = AffineTransform::rotation_about(0.7, Point2::new(1.0, 2.0))
            .then(&AffineTransform::scaling(2.0, 3.0));
        let inv = xf.inverse().unwrap();
        let p = Point2::new(-1.5, 4.0);
        let q = inv.transform_point(&xf.transform_point(&p));
        assert!((q - p).norm() < 1e-9);
    }

    #[test]
    fn singular_has_no_inverse() {
        let xf = AffineTransform::scaling(1.0, 0.0);
        assert!(xf.inverse().is_none());
        assert!(xf.determinant().abs() < TOLERANCE);
    }

    #[test]
    fn vectors_ignore_translation() {
        let xf = AffineTransform::translation(Vector2::new(5.0, 5.0));
        let v = xf.transform_vector(&Vector2::new(1.0, 2.0));
        assert!((v - Vector2::new(1.0, 2.0)).norm() < TOLERANCE);
    }
}
