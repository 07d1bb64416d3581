//! Core types for PunarPath.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward (positive ahead of robot)
//! - **Y-axis**: Left (positive to robot's left)
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! - [`Pose2D`]: position (x, y) and heading, with a NaN "missing" sentinel
//! - [`Trajectory`]: one recorded run, in recording order
//! - [`CropRange`]: index slice applied to a run before comparison
//! - [`math`]: angle wrapping and planar rotation matrices

pub mod math;
mod pose;
mod trajectory;

pub use math::{rotation_matrix, wrap_to_pi};
pub use pose::Pose2D;
pub use trajectory::{CropRange, Trajectory};
