//! Angle utilities and planar rotations.
//!
//! All angles are in radians. Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up
//! - Counter-clockwise positive rotation

use nalgebra::Matrix2;
use std::f64::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Wrap an angle into [-π, π).
///
/// Computes `((angle + π) mod 2π) − π` with a mathematical (floored) modulo,
/// so negative inputs wrap the same way positive ones do.
///
/// # Example
/// ```
/// use punar_path::core::math::wrap_to_pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_to_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// assert!((wrap_to_pi(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_to_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TWO_PI) - PI
}

/// Signed shortest rotation from `from` to `to`.
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    wrap_to_pi(to - from)
}

/// Standard planar rotation matrix `[[cos, -sin], [sin, cos]]`.
///
/// Multiply by `rotation_matrix(-heading)` to bring a world-frame vector into
/// the frame of a robot facing `heading`.
#[inline]
pub fn rotation_matrix(angle: f64) -> Matrix2<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix2::new(cos, -sin, sin, cos)
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_wrap_range() {
        for i in -200..200 {
            let angle = i as f64 * 0.173;
            let wrapped = wrap_to_pi(angle);
            assert!((-PI..=PI).contains(&wrapped), "{} -> {}", angle, wrapped);
        }
    }

    #[test]
    fn test_wrap_periodic() {
        for k in -5..=5 {
            let base = 0.7;
            assert_relative_eq!(
                wrap_to_pi(base + TWO_PI * k as f64),
                wrap_to_pi(base),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_wrap_negative_uses_floored_modulo() {
        // `%` keeps the sign of the dividend, rem_euclid does not.
        assert_relative_eq!(wrap_to_pi(-3.0 * FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(wrap_to_pi(-0.1), -0.1, epsilon = 1e-12);
        assert_relative_eq!(wrap_to_pi(0.0), 0.0);
    }

    #[test]
    fn test_angle_diff_across_boundary() {
        let diff = angle_diff(-0.9 * PI, 0.9 * PI);
        assert_relative_eq!(diff, -0.2 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_orthogonal() {
        for i in 0..16 {
            let r = rotation_matrix(i as f64 * 0.41 - 3.0);
            let identity = r * r.transpose();
            assert_relative_eq!(identity, Matrix2::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotation_composes() {
        let (a, b) = (0.3, -1.9);
        let composed = rotation_matrix(a) * rotation_matrix(b);
        assert_relative_eq!(composed, rotation_matrix(a + b), epsilon = 1e-12);
    }

    #[test]
    fn test_negated_rotation_into_local_frame() {
        // Robot facing +Y: a world vector along +Y is "forward".
        let local = rotation_matrix(-FRAC_PI_2) * Vector2::new(0.0, 1.0);
        assert_relative_eq!(local.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(local.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_deg_rad() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(rad_to_deg(FRAC_PI_2), 90.0);
    }
}
