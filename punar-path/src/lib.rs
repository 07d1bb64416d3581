//! # PunarPath
//!
//! Teach-and-repeat trajectory evaluation.
//!
//! ## Overview
//!
//! A robot is driven along a route once (the **teach** run) and later
//! retraces it autonomously (one or more **repeat** runs). PunarPath
//! measures how closely each repeat run followed the taught route:
//!
//! - **Extract**: 3D translation + quaternion poses reduced to planar `(x, y, θ)`
//! - **Crop**: optional index slice of each repeat run
//! - **Resample**: greedy, windowed, heading-gated nearest-neighbour alignment
//!   producing one repeat pose (or a missing marker) per teach pose
//! - **Decompose**: teach-minus-repeat offset rotated into the teach pose's
//!   frame, giving along-path and lateral error
//! - **Summarize**: RMS of the lateral error, ignoring missing samples
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use punar_path::{Evaluator, Pose2D, RepeatRun, Trajectory};
//!
//! let teach: Trajectory = (0..100).map(|i| Pose2D::new(i as f64 * 0.1, 0.0, 0.0)).collect();
//! let repeat: Trajectory = (0..300).map(|i| Pose2D::new(i as f64 * 0.033, 0.05, 0.0)).collect();
//!
//! let report = Evaluator::default().evaluate(&teach, &[RepeatRun::new("ours", repeat)])?;
//! println!("{}", report.runs[0].label());
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis
//!
//! A repeat pose to the left of the teach pose has a negative lateral error.

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// YAML configuration
pub mod config;

// Pose extraction and run sources
pub mod source;

// Resampling, error decomposition and statistics
pub mod evaluation;

// Pose files, reports and plots
pub mod io;

// Config-driven end-to-end evaluation
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{CropRange, Pose2D, Trajectory, rotation_matrix, wrap_to_pi};

pub use error::{Error, Result};

pub use config::{ConfigLoadError, EvalConfig};

pub use source::{MemorySource, PoseSnapshot, PoseSource, RawPose, extract};

pub use evaluation::{
    ErrorStatistics, EvaluationReport, Evaluator, PathErrors, RepeatRun, ResampleConfig,
    Resampled, RunEvaluation, decompose, resample, resample_all, rms,
};

pub use io::{PoseDirectory, PoseRecorder};
