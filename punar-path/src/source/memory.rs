//! In-memory pose source.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::{PoseSnapshot, PoseSource, RawPose};

/// Runs held in memory, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    runs: HashMap<String, Vec<PoseSnapshot>>,
}

impl MemorySource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a run.
    pub fn insert(&mut self, name: impl Into<String>, snapshots: Vec<PoseSnapshot>) {
        self.runs.insert(name.into(), snapshots);
    }

    /// Add a run from planar (x, y, yaw) triples, numbered from 0.
    pub fn with_planar_run(mut self, name: impl Into<String>, poses: &[(f64, f64, f64)]) -> Self {
        let snapshots = poses
            .iter()
            .enumerate()
            .map(|(i, &(x, y, yaw))| PoseSnapshot::new(i as u64, RawPose::from_planar(x, y, yaw)))
            .collect();
        self.insert(name, snapshots);
        self
    }
}

impl PoseSource for MemorySource {
    fn load_run(&self, run: &str) -> Result<Vec<PoseSnapshot>> {
        let snapshots = self
            .runs
            .get(run)
            .ok_or_else(|| Error::UnknownRun(run.to_string()))?;
        if snapshots.is_empty() {
            return Err(Error::EmptyRun(run.to_string()));
        }
        Ok(snapshots.clone())
    }
}
