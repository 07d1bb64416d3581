//! Planar pose extraction from 3D transforms.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::core::{Pose2D, Trajectory};
use crate::error::{Error, Result};

use super::PoseSnapshot;

/// Quaternions shorter than this cannot be normalized meaningfully.
const MIN_QUATERNION_NORM: f64 = 1e-9;

/// A 3D pose: translation plus orientation quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPose {
    /// Translation in meters
    pub translation: Vector3<f64>,
    /// Orientation, not necessarily unit length
    pub rotation: Quaternion<f64>,
}

impl RawPose {
    /// Build from components; quaternion in (x, y, z, w) order as recorded.
    pub fn new(translation: [f64; 3], rotation_xyzw: [f64; 4]) -> Self {
        let [qx, qy, qz, qw] = rotation_xyzw;
        Self {
            translation: Vector3::from(translation),
            rotation: Quaternion::new(qw, qx, qy, qz),
        }
    }

    /// Planar pose rotated by `yaw` about the vertical axis.
    pub fn from_planar(x: f64, y: f64, yaw: f64) -> Self {
        let q = UnitQuaternion::from_euler_angles(0.0, 0.0, yaw);
        Self {
            translation: Vector3::new(x, y, 0.0),
            rotation: q.into_inner(),
        }
    }
}

/// Reduce a 3D pose to (x, y, yaw).
///
/// Yaw is the third angle of the roll-pitch-yaw decomposition. Fails with
/// [`Error::InvalidPose`] if any component is non-finite or the quaternion is
/// (close to) zero.
pub fn extract(pose: &RawPose) -> Result<Pose2D> {
    if !pose.translation.iter().all(|v| v.is_finite()) {
        return Err(Error::invalid_pose(format!(
            "non-finite translation {:?}",
            pose.translation.as_slice()
        )));
    }

    let coords = pose.rotation.coords;
    if !coords.iter().all(|v| v.is_finite()) {
        return Err(Error::invalid_pose(format!(
            "non-finite quaternion {:?}",
            coords.as_slice()
        )));
    }

    let norm = pose.rotation.norm();
    if norm < MIN_QUATERNION_NORM {
        return Err(Error::invalid_pose(format!(
            "degenerate quaternion (norm {:e})",
            norm
        )));
    }

    let (_roll, _pitch, yaw) = UnitQuaternion::from_quaternion(pose.rotation).euler_angles();

    Ok(Pose2D::new(pose.translation.x, pose.translation.y, yaw))
}

/// Extract every snapshot, failing on the first invalid one.
pub fn extract_trajectory(snapshots: &[PoseSnapshot]) -> Result<Trajectory> {
    snapshots
        .iter()
        .enumerate()
        .map(|(i, snapshot)| {
            extract(&snapshot.pose).map_err(|e| match e {
                Error::InvalidPose { reason, .. } => Error::InvalidPose {
                    index: Some(i),
                    reason,
                },
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Trajectory::from_poses)
}
