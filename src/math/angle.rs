//! Angle utilities shared by the arc and intersection code.
//!
//! Angles are in radians. Sweeps are signed: positive sweeps run
//! counter-clockwise, negative sweeps clockwise. Start/end angles are
//! not required to be normalized into `[0, 2*pi)`.

use std::f64::consts::TAU;

use super::TOLERANCE;

/// Normalizes an angle into `[0, 2*pi)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Checks if an absolute angle falls within a swept angular range.
///
/// The range starts at `start_angle` and extends by the signed `sweep`.
/// Sweeps with `|sweep| >= 2*pi` cover the full circle.
#[must_use]
pub fn angle_in_arc_range(angle: f64, start_angle: f64, sweep: f64) -> bool {
    let eps = TOLERANCE;
    if sweep.abs() >= TAU - eps {
        return true;
    }

    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
        delta >= -eps && delta <= sweep + eps
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
        delta <= eps && delta >= sweep - eps
    }
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the swept range, or the
/// sweep is zero.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    let eps = TOLERANCE * 100.0;
    if sweep.abs() < TOLERANCE {
        return None;
    }

    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    if t >= -eps && t <= 1.0 + eps {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_angle(-FRAC_PI_2) - 1.5 * PI).abs() < TOLERANCE);
        assert!(normalize_angle(TAU).abs() < TOLERANCE);
        assert!((normalize_angle(2.5 * TAU) - 0.5 * TAU).abs() < 1e-9);
    }

    #[test]
    fn ccw_range_membership() {
        // Quarter sweep from 0 to pi/2.
        assert!(angle_in_arc_range(0.0, 0.0, FRAC_PI_2));
        assert!(angle_in_arc_range(FRAC_PI_2, 0.0, FRAC_PI_2));
        assert!(angle_in_arc_range(0.3, 0.0, FRAC_PI_2));
        assert!(!angle_in_arc_range(PI, 0.0, FRAC_PI_2));
        // Equivalent angle offset by a full turn still matches.
        assert!(angle_in_arc_range(0.3 - TAU, 0.0, FRAC_PI_2));
    }

    #[test]
    fn cw_range_membership() {
        // Clockwise sweep from pi/2 down to 0.
        assert!(angle_in_arc_range(0.3, FRAC_PI_2, -FRAC_PI_2));
        assert!(!angle_in_arc_range(PI, FRAC_PI_2, -FRAC_PI_2));
    }

    #[test]
    fn full_sweep_covers_everything() {
        assert!(angle_in_arc_range(1.234, 0.5, TAU));
        assert!(angle_in_arc_range(-2.0, 0.5, -TAU));
    }

    #[test]
    fn param_midpoint() {
        let t = angle_to_arc_param(FRAC_PI_2, 0.0, PI).unwrap();
        assert!((t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn param_outside_range_is_none() {
        assert!(angle_to_arc_param(PI, 0.0, FRAC_PI_2).is_none());
    }

    #[test]
    fn param_cw_sweep() {
        // From pi/2 sweeping clockwise by pi/2: angle pi/4 is halfway.
        let t = angle_to_arc_param(PI / 4.0, FRAC_PI_2, -FRAC_PI_2).unwrap();
        assert!((t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_sweep_is_none() {
        assert!(angle_to_arc_param(0.0, 0.0, 0.0).is_none());
    }
}
