//! Configuration loading for PunarPath.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//! Everything the evaluation needs (which runs, how to crop them, matching
//! tolerances, where to write results) is passed in through [`EvalConfig`].
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`EvaluationSection`] | Resampling window and heading gate |
//! | [`RunsSection`] | Teach run, repeat runs, crop ranges, colours |
//! | [`OutputSection`] | Output directory, plots and CSV toggles |
//!
//! ## Example YAML
//!
//! ```yaml
//! evaluation:
//!   window_half_size: 0.2      # search 40% of the repeat run
//!   angle_threshold_deg: 10.0  # heading gate
//!
//! runs:
//!   teach: ~/teach-repeat-data/teach/
//!   repeats:
//!     - name: ours (filtered odom)
//!       path: ~/teach-repeat-data/ours-filtered/
//!     - name: bearnav (filtered odom)
//!       path: ~/teach-repeat-data/bearnav-filtered/
//!       crop: { end: 1300 }
//!
//! output:
//!   directory: ./results
//! ```

mod defaults;
mod error;
mod eval;
mod evaluation;
mod output;
mod runs;

pub use error::ConfigLoadError;
pub use eval::EvalConfig;

pub use evaluation::EvaluationSection;
pub use output::OutputSection;
pub use runs::{RepeatRunSettings, RunsSection, expand_home};
