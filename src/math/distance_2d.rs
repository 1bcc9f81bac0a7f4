use super::angle::angle_in_arc_range;
use super::{Point2, Vector2, TOLERANCE};

/// Returns the minimum distance from `point` to the line segment `[a, b]`.
///
/// Degenerate (zero-length) segments are treated as points.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        return (point - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;
    (point - closest).norm()
}

/// Returns the minimum distance from `point` to the infinite line
/// through `origin` with (not necessarily unit) `direction`.
///
/// Returns `None` when the direction is zero-length.
#[must_use]
pub fn point_to_line_dist(point: &Point2, origin: &Point2, direction: &Vector2) -> Option<f64> {
    let len = direction.norm();
    if len < TOLERANCE {
        return None;
    }
    let to_point = point - origin;
    Some(super::cross_2d(direction, &to_point).abs() / len)
}

/// Returns the minimum distance from `point` to a circular arc.
///
/// If the point's angle (relative to `center`) falls within the swept
/// range, the distance is `||point - center| - radius|`. Otherwise it is
/// the distance to the nearer arc endpoint.
#[must_use]
pub fn point_to_arc_dist(
    point: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> f64 {
    let to_point = point - center;
    let dist_to_center = to_point.norm();

    let angle = to_point.y.atan2(to_point.x);
    if angle_in_arc_range(angle, start_angle, sweep) {
        return (dist_to_center - radius).abs();
    }

    let end_angle = start_angle + sweep;
    let ep0 = center + Vector2::new(start_angle.cos(), start_angle.sin()) * radius;
    let ep1 = center + Vector2::new(end_angle.cos(), end_angle.sin()) * radius;

    (point - ep0).norm().min((point - ep1).norm())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn segment_interior_projection() {
        let d = point_to_segment_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn segment_clamps_to_endpoint() {
        let d = point_to_segment_dist(
            &Point2::new(5.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let d = point_to_segment_dist(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert!((d - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_distance_ignores_extent() {
        let d = point_to_line_dist(
            &Point2::new(10.0, 2.0),
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
        )
        .unwrap();
        assert!((d - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_zero_direction_is_none() {
        let d = point_to_line_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Vector2::new(0.0, 0.0),
        );
        assert!(d.is_none());
    }

    #[test]
    fn arc_radial_band() {
        // Point at angle pi/4 inside a quarter arc, 0.5 outside the radius.
        let p = Point2::new(1.5 * (PI / 4.0).cos(), 1.5 * (PI / 4.0).sin());
        let d = point_to_arc_dist(&p, &Point2::origin(), 1.0, 0.0, FRAC_PI_2);
        assert!((d - 0.5).abs() < 1e-9);
    }

    #[test]
    fn arc_outside_range_uses_endpoint() {
        // Point at angle pi, arc covers only the first quadrant.
        let p = Point2::new(-1.0, 0.0);
        let d = point_to_arc_dist(&p, &Point2::origin(), 1.0, 0.0, FRAC_PI_2);
        // Nearer endpoint is (0, 1): distance sqrt(2).
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-9);
    }
}
