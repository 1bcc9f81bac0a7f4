use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Parametric line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not
/// parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1, d2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let delta = p2 - p1;
    let t = cross_2d(&delta, d2) / cross;
    let u = cross_2d(&delta, d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = cross_2d(&da, &db);
    if cross.abs() < TOLERANCE {
        return None;
    }

    let delta = b0 - a0;
    let t = cross_2d(&delta, &db) / cross;
    let u = cross_2d(&delta, &da) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of an infinite line with a full circle.
///
/// The line is `origin + t * direction`. Returns the line parameters of
/// the intersection points in increasing order: empty when the line
/// misses the circle or its direction is zero-length, one parameter for
/// a tangency, two otherwise.
#[must_use]
pub fn line_circle_intersect_2d(
    origin: &Point2,
    direction: &Vector2,
    center: &Point2,
    radius: f64,
) -> Vec<f64> {
    let dir_len_sq = direction.norm_squared();
    if dir_len_sq < TOLERANCE * TOLERANCE || radius < 0.0 {
        return Vec::new();
    }

    // Substitute the parametric line into the circle equation:
    // |origin + t*direction - center|^2 = r^2
    let f = origin - center;
    let a = dir_len_sq;
    let b = 2.0 * f.dot(direction);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return Vec::new();
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    }
}

/// Intersection of two full circles.
///
/// Returns zero, one (tangency), or two points. Separate, nested, and
/// concentric circles yield the empty set; a coincident pair (same
/// center, same radius) also yields the empty set since its intersection
/// is a continuum that cannot be enumerated.
#[must_use]
pub fn circle_circle_intersect_2d(
    c1: &Point2,
    r1: f64,
    c2: &Point2,
    r2: f64,
) -> Vec<Point2> {
    if r1 < 0.0 || r2 < 0.0 {
        return Vec::new();
    }

    let delta = c2 - c1;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        // Concentric (coincident included).
        return Vec::new();
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return Vec::new();
    }

    // Distance from c1 along the line c1->c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < -TOLERANCE {
        return Vec::new();
    }
    let h = h_sq.max(0.0).sqrt();

    let mid = c1 + delta * (a / dist);
    let perp = Vector2::new(-delta.y / dist, delta.x / dist);

    if h < TOLERANCE {
        vec![mid]
    } else {
        vec![mid + perp * h, mid - perp * h]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn line_line_perpendicular() {
        let (t, u) = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.5, -1.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let r = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(1.0, 0.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn segment_segment_crossing() {
        let (pt, t, u) = segment_segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let r = segment_segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(1.0, 1.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn line_circle_secant_ordered() {
        let ts = line_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
            5.0,
        );
        assert_eq!(ts.len(), 2);
        assert!((ts[0] + 5.0).abs() < 1e-9);
        assert!((ts[1] - 5.0).abs() < 1e-9);
        assert!(ts[0] < ts[1]);
    }

    #[test]
    fn line_circle_tangent_single_root() {
        let ts = line_circle_intersect_2d(
            &Point2::new(-2.0, 1.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
            1.0,
        );
        assert_eq!(ts.len(), 1, "ts={ts:?}");
        assert!((ts[0] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn line_circle_miss() {
        let ts = line_circle_intersect_2d(
            &Point2::new(-2.0, 3.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
            1.0,
        );
        assert!(ts.is_empty());
    }

    #[test]
    fn line_circle_zero_direction_is_empty() {
        let ts = line_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
            1.0,
        );
        assert!(ts.is_empty());
    }

    #[test]
    fn circle_circle_two_points() {
        // Unit circles at (0,0) and (1,0) meet at (0.5, ±sqrt(3)/2).
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            1.0,
            &Point2::new(1.0, 0.0),
            1.0,
        );
        assert_eq!(pts.len(), 2);
        let sqrt3_2 = 3.0_f64.sqrt() / 2.0;
        let (mut y0, mut y1) = (pts[0].y, pts[1].y);
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
        }
        assert!((y0 + sqrt3_2).abs() < 1e-9);
        assert!((y1 - sqrt3_2).abs() < 1e-9);
    }

    #[test]
    fn circle_circle_external_tangency() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            5.0,
            &Point2::new(10.0, 0.0),
            5.0,
        );
        assert_eq!(pts.len(), 1, "pts={pts:?}");
        assert!((pts[0].x - 5.0).abs() < 1e-9);
        assert!(pts[0].y.abs() < 1e-9);
    }

    #[test]
    fn circle_circle_separate() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            1.0,
            &Point2::new(5.0, 0.0),
            1.0,
        );
        assert!(pts.is_empty());
    }

    #[test]
    fn circle_circle_nested() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            5.0,
            &Point2::new(1.0, 0.0),
            1.0,
        );
        assert!(pts.is_empty());
    }

    #[test]
    fn circle_circle_coincident_is_empty() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(2.0, 3.0),
            4.0,
            &Point2::new(2.0, 3.0),
            4.0,
        );
        assert!(pts.is_empty());
    }
}
