//! Path-frame error decomposition.
//!
//! With the repeat run resampled onto the teach grid, the position error at
//! each index is rotated into the teach pose's local frame:
//!
//! - **path error**: along the teach heading (x of the local frame)
//! - **lateral error**: across it (y of the local frame), positive when the
//!   repeat pose is to the right of the teach path
//!
//! The error vector is `teach - repeat`, so a repeat pose to the robot's left
//! gives a negative lateral error.

use serde::{Deserialize, Serialize};

use crate::core::Trajectory;
use crate::core::math::rotation_matrix;
use crate::error::{Error, Result};

/// Per-index errors, NaN where the repeat run had no match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathErrors {
    /// Along-track error (meters)
    pub path: Vec<f64>,

    /// Cross-track error (meters)
    pub lateral: Vec<f64>,
}

impl PathErrors {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.lateral.len()
    }

    /// True if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.lateral.is_empty()
    }
}

/// Decompose the error between index-aligned `reference` and `resampled`.
pub fn decompose(reference: &Trajectory, resampled: &Trajectory) -> Result<PathErrors> {
    if reference.len() != resampled.len() {
        return Err(Error::LengthMismatch {
            reference: reference.len(),
            other: resampled.len(),
        });
    }

    let mut errors = PathErrors {
        path: Vec::with_capacity(reference.len()),
        lateral: Vec::with_capacity(reference.len()),
    };

    for (teach, repeat) in reference.iter().zip(resampled.iter()) {
        let pos_error = teach.position() - repeat.position();
        let rotated = rotation_matrix(-teach.theta) * pos_error;
        errors.path.push(rotated.x);
        errors.lateral.push(rotated.y);
    }

    Ok(errors)
}
