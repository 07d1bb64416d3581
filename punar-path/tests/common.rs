//! Test utilities for PunarPath evaluation.
//!
//! Helpers for building teach/repeat trajectories and pose directories.

#![allow(dead_code)]

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use punar_path::{Pose2D, PoseRecorder, RawPose, Trajectory};

/// Create a straight-line trajectory along +X.
pub fn straight_trajectory(n: usize, spacing: f64) -> Trajectory {
    (0..n)
        .map(|i| Pose2D::new(i as f64 * spacing, 0.0, 0.0))
        .collect()
}

/// Create a square loop trajectory, counter-clockwise from the origin.
pub fn square_trajectory(side_length: f64, points_per_side: usize) -> Trajectory {
    let mut poses = Vec::new();
    let spacing = side_length / points_per_side as f64;

    for i in 0..points_per_side {
        poses.push(Pose2D::new(i as f64 * spacing, 0.0, 0.0));
    }
    for i in 0..points_per_side {
        poses.push(Pose2D::new(side_length, i as f64 * spacing, FRAC_PI_2));
    }
    for i in 0..points_per_side {
        poses.push(Pose2D::new(side_length - i as f64 * spacing, side_length, PI));
    }
    for i in 0..points_per_side {
        poses.push(Pose2D::new(0.0, side_length - i as f64 * spacing, -FRAC_PI_2));
    }

    poses.into()
}

/// Create a figure-8 trajectory crossing the origin heading along +X.
///
/// The first loop turns left and the second turns right, so the heading
/// passes the ±π seam once in each loop.
pub fn figure_eight_trajectory(radius: f64, points: usize) -> Trajectory {
    let mut poses = Vec::new();
    let half = points / 2;

    for i in 0..half {
        let angle = 2.0 * PI * i as f64 / half as f64;
        let x = radius * angle.sin();
        let y = radius * (1.0 - angle.cos());
        poses.push(Pose2D::new(x, y, punar_path::wrap_to_pi(angle)));
    }

    for i in 0..half {
        let angle = 2.0 * PI * i as f64 / half as f64;
        let x = radius * angle.sin();
        let y = -radius * (1.0 - angle.cos());
        poses.push(Pose2D::new(x, y, punar_path::wrap_to_pi(-angle)));
    }

    poses.into()
}

/// Shift every pose sideways in its own frame (positive = to the left).
pub fn offset_left(trajectory: &Trajectory, offset: f64) -> Trajectory {
    trajectory
        .iter()
        .map(|p| {
            Pose2D::new(
                p.x - offset * p.theta.sin(),
                p.y + offset * p.theta.cos(),
                p.theta,
            )
        })
        .collect()
}

/// Linearly interpolate between consecutive poses, `factor` samples per step.
///
/// Models a repeat run recorded at a higher rate than the teach run.
pub fn densify(trajectory: &Trajectory, factor: usize) -> Trajectory {
    let poses = trajectory.poses();
    let mut dense = Vec::with_capacity(poses.len() * factor);

    for pair in poses.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dtheta = punar_path::wrap_to_pi(b.theta - a.theta);
        for k in 0..factor {
            let t = k as f64 / factor as f64;
            dense.push(Pose2D::new(
                a.x + t * (b.x - a.x),
                a.y + t * (b.y - a.y),
                punar_path::wrap_to_pi(a.theta + t * dtheta),
            ));
        }
    }
    if let Some(last) = poses.last() {
        dense.push(*last);
    }

    dense.into()
}

/// Add deterministic pseudo-random noise to a trajectory.
pub fn add_noise(trajectory: &Trajectory, trans_std: f64, rot_std: f64, seed: u64) -> Trajectory {
    use std::num::Wrapping;

    // Simple LCG PRNG for reproducibility
    let mut state = Wrapping(seed);
    let a = Wrapping(1664525u64);
    let c = Wrapping(1013904223u64);

    let mut random = || -> f64 {
        state = a * state + c;
        // Box-Muller transform for Gaussian
        let u1 = (state.0 & 0xFFFF) as f64 / 65536.0 + 0.0001;
        state = a * state + c;
        let u2 = (state.0 & 0xFFFF) as f64 / 65536.0;
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    };

    trajectory
        .iter()
        .map(|p| {
            Pose2D::new(
                p.x + random() * trans_std,
                p.y + random() * trans_std,
                punar_path::wrap_to_pi(p.theta + random() * rot_std),
            )
        })
        .collect()
}

/// Prepend and append `count` copies of the first and last pose.
///
/// Models a robot standing still before and after driving.
pub fn pad_stationary(trajectory: &Trajectory, count: usize) -> Trajectory {
    let poses = trajectory.poses();
    let (Some(first), Some(last)) = (poses.first(), poses.last()) else {
        return Trajectory::default();
    };

    std::iter::repeat_n(*first, count)
        .chain(poses.iter().copied())
        .chain(std::iter::repeat_n(*last, count))
        .collect()
}

/// Record a trajectory as a pose directory.
pub fn record_run(dir: &Path, trajectory: &Trajectory) {
    let mut recorder = PoseRecorder::create(dir).unwrap();
    for (i, p) in trajectory.iter().enumerate() {
        recorder
            .record(&RawPose::from_planar(p.x, p.y, p.theta), Some(i as f64 * 0.1))
            .unwrap();
    }
}
