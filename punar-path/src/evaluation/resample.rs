//! Resampling a repeat run onto the teach run's index grid.
//!
//! Teach and repeat runs are recorded at different rates and for different
//! durations, so index `i` of one has nothing to do with index `i` of the
//! other. For each teach index the resampler looks for the nearest repeat pose
//! in a window around the proportional position, facing roughly the same way,
//! and never hands out the same repeat pose twice.
//!
//! The search is greedy in teach order: once a repeat pose is taken by index
//! `i` it is gone for every later index. Results depend on that order, so the
//! loop must stay sequential within one run.

use serde::{Deserialize, Serialize};

use crate::core::math::{deg_to_rad, wrap_to_pi};
use crate::core::{Pose2D, Trajectory};

/// Resampler tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Half-width of the search window as a fraction of the repeat length.
    ///
    /// 0.2 searches 40% of the repeat run around the proportional position.
    pub window_half_size: f64,

    /// Maximum wrapped heading difference for a match (radians).
    pub angle_threshold: f64,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            window_half_size: 0.2,
            angle_threshold: deg_to_rad(10.0),
        }
    }
}

/// A repeat run laid onto the reference grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resampled {
    /// Same length as the reference; [`Pose2D::MISSING`] where nothing matched.
    pub trajectory: Trajectory,

    /// Index into the (cropped) repeat run each sample came from.
    pub source_indices: Vec<Option<usize>>,
}

impl Resampled {
    /// Number of reference indices that found a match.
    pub fn matched(&self) -> usize {
        self.source_indices.iter().filter(|s| s.is_some()).count()
    }

    /// Number of reference indices left as the missing sentinel.
    pub fn missing(&self) -> usize {
        self.source_indices.len() - self.matched()
    }
}

/// Candidate index window `[min, max)` searched for reference index `i`.
///
/// Bounds are rounded half-to-even, then clamped to `[0, candidate_len]`.
pub fn search_window(
    i: usize,
    reference_len: usize,
    candidate_len: usize,
    window_half_size: f64,
) -> (usize, usize) {
    if reference_len == 0 || candidate_len == 0 {
        return (0, 0);
    }

    let centre = i as f64 / reference_len as f64;
    let r = candidate_len as f64;
    let lower = ((centre - window_half_size) * r).round_ties_even();
    let upper = ((centre + window_half_size) * r).round_ties_even();

    let min = if lower > 0.0 { lower as usize } else { 0 };
    let max = if upper > 0.0 {
        (upper as usize).min(candidate_len)
    } else {
        0
    };

    (min.min(candidate_len), max)
}

/// Resample `candidate` onto the index grid of `reference`.
///
/// For each reference index in increasing order:
/// 1. take the candidate window from [`search_window`]
/// 2. drop candidates already used, candidates whose wrapped heading differs
///    by more than `angle_threshold`, and candidates at a NaN distance
/// 3. pick the smallest squared planar distance, lowest index on ties
/// 4. mark the winner used, or emit [`Pose2D::MISSING`] if nothing is left
pub fn resample(
    reference: &Trajectory,
    candidate: &Trajectory,
    config: &ResampleConfig,
) -> Resampled {
    let reference_len = reference.len();
    let candidate_len = candidate.len();
    let candidates = candidate.poses();

    let mut available = vec![true; candidate_len];
    let mut poses = Vec::with_capacity(reference_len);
    let mut source_indices = Vec::with_capacity(reference_len);

    for (i, target) in reference.iter().enumerate() {
        let (min, max) = search_window(i, reference_len, candidate_len, config.window_half_size);

        let mut best: Option<(usize, f64)> = None;
        for j in min..max {
            if !available[j] {
                continue;
            }

            let pose = &candidates[j];
            let heading_error = wrap_to_pi(pose.theta - target.theta).abs();
            if heading_error > config.angle_threshold {
                continue;
            }

            let dist = pose.distance_squared(target);
            if dist.is_nan() {
                continue;
            }

            // Strict `<` keeps the first occurrence of the minimum.
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((j, dist));
            }
        }

        match best {
            Some((j, _)) => {
                available[j] = false;
                poses.push(candidates[j]);
                source_indices.push(Some(j));
            }
            None => {
                poses.push(Pose2D::MISSING);
                source_indices.push(None);
            }
        }
    }

    let resampled = Resampled {
        trajectory: Trajectory::from_poses(poses),
        source_indices,
    };

    log::debug!(
        "Resampled {} candidate poses onto {} reference poses ({} matched, {} missing)",
        candidate_len,
        reference_len,
        resampled.matched(),
        resampled.missing()
    );

    resampled
}

/// Resample each candidate independently against the same reference.
pub fn resample_all(
    reference: &Trajectory,
    candidates: &[Trajectory],
    config: &ResampleConfig,
) -> Vec<Resampled> {
    candidates
        .iter()
        .map(|candidate| resample(reference, candidate, config))
        .collect()
}
