//! Teach/repeat path accuracy evaluation.
//!
//! A teach run is recorded once while the robot is driven along a route; repeat
//! runs are later autonomous traversals of the same route. This module answers
//! "how far off the taught path did each repeat run drive?".
//!
//! ## Pipeline
//!
//! 1. **Resample** ([`resample`]): lay each repeat run onto the teach run's index
//!    grid by windowed nearest-neighbour search with a heading gate.
//! 2. **Decompose** ([`decompose`]): rotate each position error into the teach
//!    pose's frame, giving along-path and lateral components.
//! 3. **Summarize** ([`rms`], [`ErrorStatistics`]): RMS lateral error and
//!    friends, ignoring unmatched samples.
//!
//! [`Evaluator`] runs all three for a set of repeat runs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use punar_path::evaluation::{Evaluator, RepeatRun, ResampleConfig};
//!
//! let evaluator = Evaluator::new(ResampleConfig::default());
//! let report = evaluator.evaluate(&teach, &[RepeatRun::new("ours", repeat)])?;
//! report.print();
//! ```

mod decompose;
mod report;
mod resample;
mod stats;

pub use decompose::{PathErrors, decompose};
pub use report::{EvaluationReport, Evaluator, RepeatRun, RunEvaluation, RunSummary};
pub use resample::{ResampleConfig, Resampled, resample, resample_all, search_window};
pub use stats::{ErrorStatistics, rms};
