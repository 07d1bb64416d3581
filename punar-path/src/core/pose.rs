//! Planar pose type.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::math::angle_diff;

/// A 2D pose: position in meters and heading in radians.
///
/// Unlike most pose types the heading is stored exactly as given. Recorded
/// yaw values may sit anywhere on the circle, so comparisons must go through
/// [`angle_diff`] or [`wrap_to_pi`](super::math::wrap_to_pi).
///
/// A pose with NaN components is the "no match" marker produced by the
/// resampler; see [`Pose2D::MISSING`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Heading angle in radians, CCW positive from X-axis.
    pub theta: f64,
}

impl Pose2D {
    /// Sentinel for a reference index that found no acceptable match.
    pub const MISSING: Pose2D = Pose2D {
        x: f64::NAN,
        y: f64::NAN,
        theta: f64::NAN,
    };

    /// Create a new pose.
    #[inline]
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// True if any component is NaN.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.theta.is_nan()
    }

    /// Position as a vector.
    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Squared Euclidean distance in the plane.
    #[inline]
    pub fn distance_squared(&self, other: &Pose2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance in the plane.
    #[inline]
    pub fn distance(&self, other: &Pose2D) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Signed heading difference from `self` to `other`, wrapped.
    #[inline]
    pub fn heading_diff(&self, other: &Pose2D) -> f64 {
        angle_diff(self.theta, other.theta)
    }
}
