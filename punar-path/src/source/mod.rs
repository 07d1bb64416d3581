//! Pose sources and planar pose extraction.
//!
//! Recorded poses arrive as full 3D transforms (the `map -> base_link`
//! transform sampled during a run). Only the planar part matters here:
//! [`extract`] keeps x, y and the yaw of the orientation.
//!
//! Where the poses come from is behind [`PoseSource`]: a directory of pose
//! files ([`PoseDirectory`](crate::io::PoseDirectory)) or memory
//! ([`MemorySource`]).

mod extract;
mod memory;

pub use extract::{RawPose, extract, extract_trajectory};
pub use memory::MemorySource;

use crate::core::Trajectory;
use crate::error::Result;

/// One recorded pose with its position in the run.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseSnapshot {
    /// Sequence number (file number or message sequence)
    pub index: u64,
    /// Recording time in seconds, when known
    pub stamp: Option<f64>,
    /// The 3D pose
    pub pose: RawPose,
}

impl PoseSnapshot {
    /// Snapshot without a timestamp.
    pub fn new(index: u64, pose: RawPose) -> Self {
        Self {
            index,
            stamp: None,
            pose,
        }
    }
}

/// Anything that can produce the ordered poses of a named run.
pub trait PoseSource {
    /// Load all poses of `run` in recording order.
    fn load_run(&self, run: &str) -> Result<Vec<PoseSnapshot>>;

    /// Load `run` and reduce it to a planar trajectory.
    fn load_trajectory(&self, run: &str) -> Result<Trajectory> {
        let snapshots = self.load_run(run)?;
        let trajectory = extract_trajectory(&snapshots)?;
        log::debug!("Loaded {} poses for run '{}'", trajectory.len(), run);
        Ok(trajectory)
    }
}
