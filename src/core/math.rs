// Math utilities and helper functions

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Wrap an angle into the range (-PI, PI]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Heading (rotation about +Y) that makes a model at `from` look at `to`.
/// A yaw of zero faces +Z.
pub fn yaw_towards(from: Vec3, to: Vec3) -> f32 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    if approx_equal(dx, 0.0, f32::EPSILON) && approx_equal(dz, 0.0, f32::EPSILON) {
        return 0.0;
    }
    dx.atan2(dz)
}

/// Turn `current` toward `target` by at most `max_step` radians, taking the short way round
pub fn turn_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - current);
    if diff.abs() <= max_step {
        wrap_angle(target)
    } else {
        wrap_angle(current + max_step * diff.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }

    #[test]
    fn test_wrap_angle() {
        assert_abs_diff_eq!(wrap_angle(0.0), 0.0);
        assert_abs_diff_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(wrap_angle(-PI - 0.5), PI - 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_yaw_towards() {
        let origin = Vec3::ZERO;
        assert_abs_diff_eq!(yaw_towards(origin, Vec3::new(0.0, 0.0, 5.0)), 0.0);
        assert_abs_diff_eq!(yaw_towards(origin, Vec3::new(3.0, 0.0, 0.0)), FRAC_PI_2);
        // Height difference is ignored
        assert_abs_diff_eq!(yaw_towards(origin, Vec3::new(0.0, 9.0, 1.0)), 0.0);
        // Same spot keeps a neutral heading
        assert_eq!(yaw_towards(origin, origin), 0.0);
    }

    #[test]
    fn test_turn_towards_is_capped() {
        let turned = turn_towards(0.0, FRAC_PI_2, 0.1);
        assert_abs_diff_eq!(turned, 0.1, epsilon = 1e-6);

        let snapped = turn_towards(0.0, 0.05, 0.1);
        assert_abs_diff_eq!(snapped, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_turn_towards_short_way() {
        // From just below PI to just above -PI is a tiny positive turn
        let turned = turn_towards(PI - 0.05, -PI + 0.05, 0.2);
        assert_abs_diff_eq!(turned.abs(), PI - 0.05, epsilon = 1e-4);
    }
}
