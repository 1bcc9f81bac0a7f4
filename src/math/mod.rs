pub mod angle;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2x2 linear transformation matrix.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 2D rotation.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Scalar 2D cross product: `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates a vector 90 degrees counter-clockwise.
#[must_use]
pub fn perp_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        let c = cross_2d(&Vector2::x(), &Vector2::y());
        assert!((c - 1.0).abs() < TOLERANCE);
        let c = cross_2d(&Vector2::y(), &Vector2::x());
        assert!((c + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn perp_is_left_turn() {
        let n = perp_ccw(&Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
