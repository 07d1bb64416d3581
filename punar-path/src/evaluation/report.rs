//! Teach/repeat evaluation pipeline and its report.

use serde::{Deserialize, Serialize};

use crate::core::{CropRange, Trajectory};
use crate::error::{Error, Result};

use super::decompose::{PathErrors, decompose};
use super::resample::{ResampleConfig, resample};
use super::stats::{ErrorStatistics, rms};

/// A repeat run handed to the [`Evaluator`].
#[derive(Clone, Debug)]
pub struct RepeatRun {
    /// Label for logs and reports
    pub name: String,
    /// Poses in recording order, before cropping
    pub trajectory: Trajectory,
    /// Slice kept for the comparison
    pub crop: CropRange,
}

impl RepeatRun {
    /// Uncropped repeat run.
    pub fn new(name: impl Into<String>, trajectory: Trajectory) -> Self {
        Self {
            name: name.into(),
            trajectory,
            crop: CropRange::FULL,
        }
    }

    /// Set the crop range.
    pub fn with_crop(mut self, crop: CropRange) -> Self {
        self.crop = crop;
        self
    }
}

/// Evaluation result for one repeat run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunEvaluation {
    /// Run label
    pub name: String,

    /// Poses left after cropping
    pub cropped_len: usize,

    /// Repeat run on the teach grid
    pub resampled: Trajectory,

    /// Index into the cropped run behind each resampled pose
    pub source_indices: Vec<Option<usize>>,

    /// Per-index path and lateral errors
    pub errors: PathErrors,

    /// RMS lateral error; `None` when no teach index found a match
    pub rms_lateral: Option<f64>,

    /// Lateral error statistics
    pub lateral: ErrorStatistics,

    /// Along-path error statistics
    pub path: ErrorStatistics,
}

impl RunEvaluation {
    /// Teach indices that found a match.
    pub fn matched(&self) -> usize {
        self.lateral.count
    }

    /// Teach indices left unmatched.
    pub fn missing(&self) -> usize {
        self.source_indices.iter().filter(|s| s.is_none()).count()
    }

    /// Legend label used in plots.
    pub fn label(&self) -> String {
        match self.rms_lateral {
            Some(rms) => format!("{} RMS={:.6}m", self.name, rms),
            None => format!("{} RMS=n/a", self.name),
        }
    }
}

/// Serializable summary of one run (no per-index arrays).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run label
    pub name: String,
    /// Poses left after cropping
    pub cropped_len: usize,
    /// Teach indices that found a match
    pub matched: usize,
    /// Teach indices left unmatched
    pub missing: usize,
    /// RMS lateral error (meters)
    pub rms_lateral: Option<f64>,
    /// Lateral error statistics
    pub lateral: ErrorStatistics,
    /// Along-path error statistics
    pub path: ErrorStatistics,
}

/// Full evaluation of several repeat runs against one teach run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The teach run
    pub teach: Trajectory,

    /// Resampler settings used
    pub config: ResampleConfig,

    /// Per-run results, in input order
    pub runs: Vec<RunEvaluation>,
}

impl EvaluationReport {
    /// Per-run summaries.
    pub fn summaries(&self) -> Vec<RunSummary> {
        self.runs
            .iter()
            .map(|run| RunSummary {
                name: run.name.clone(),
                cropped_len: run.cropped_len,
                matched: run.matched(),
                missing: run.missing(),
                rms_lateral: run.rms_lateral,
                lateral: run.lateral.clone(),
                path: run.path.clone(),
            })
            .collect()
    }

    /// Look up a run by name.
    pub fn run(&self, name: &str) -> Option<&RunEvaluation> {
        self.runs.iter().find(|r| r.name == name)
    }

    /// Print the summary table.
    pub fn print(&self) {
        println!("=== Teach/Repeat Path Error ===");
        println!(
            "Teach poses: {}, window: ±{:.0}%, heading gate: {:.1} deg",
            self.teach.len(),
            self.config.window_half_size * 100.0,
            self.config.angle_threshold.to_degrees()
        );
        for run in &self.runs {
            println!();
            println!("{}", run.name);
            println!(
                "  Matched: {}/{} (from {} repeat poses)",
                run.matched(),
                self.teach.len(),
                run.cropped_len
            );
            match run.rms_lateral {
                Some(rms) => println!("  Lateral RMS: {:.6} m", rms),
                None => println!("  Lateral RMS: n/a (no matches)"),
            }
            println!("  Lateral: {}", run.lateral.summary());
            println!("  Path:    {}", run.path.summary());
        }
    }
}

/// Runs the resample → decompose → summarize pipeline.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: ResampleConfig,
}

impl Evaluator {
    /// Create an evaluator with the given resampler settings.
    pub fn new(config: ResampleConfig) -> Self {
        Self { config }
    }

    /// Resampler settings.
    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Evaluate one repeat run against `teach`.
    pub fn evaluate_run(&self, teach: &Trajectory, run: &RepeatRun) -> Result<RunEvaluation> {
        let cropped = run.trajectory.crop(run.crop);
        if !run.crop.is_full() {
            let (start, end) = run.crop.bounds(run.trajectory.len());
            log::debug!(
                "{}: cropped {} poses to [{}, {})",
                run.name,
                run.trajectory.len(),
                start,
                end
            );
        }

        let resampled = resample(teach, &cropped, &self.config);
        let errors = decompose(teach, &resampled.trajectory)?;

        let rms_lateral = match rms(&errors.lateral) {
            Ok(value) => Some(value),
            Err(Error::AllValuesMissing(_)) => {
                log::warn!(
                    "{}: no repeat pose matched any of the {} teach poses",
                    run.name,
                    teach.len()
                );
                None
            }
            Err(e) => return Err(e),
        };

        let lateral = ErrorStatistics::from_errors(&errors.lateral);
        let path = ErrorStatistics::from_errors(&errors.path);

        if lateral.missing > 0 && lateral.count > 0 {
            log::info!(
                "{}: {} of {} teach poses had no match",
                run.name,
                lateral.missing,
                teach.len()
            );
        }

        Ok(RunEvaluation {
            name: run.name.clone(),
            cropped_len: cropped.len(),
            resampled: resampled.trajectory,
            source_indices: resampled.source_indices,
            errors,
            rms_lateral,
            lateral,
            path,
        })
    }

    /// Evaluate every repeat run against `teach`, independently.
    pub fn evaluate(&self, teach: &Trajectory, runs: &[RepeatRun]) -> Result<EvaluationReport> {
        log::info!(
            "Evaluating {} repeat run(s) against {} teach poses",
            runs.len(),
            teach.len()
        );

        let runs = runs
            .iter()
            .map(|run| self.evaluate_run(teach, run))
            .collect::<Result<Vec<_>>>()?;

        for run in &runs {
            if let Some(rms) = run.rms_lateral {
                log::info!("{}: lateral RMS {:.4} m", run.name, rms);
            }
        }

        Ok(EvaluationReport {
            teach: teach.clone(),
            config: self.config.clone(),
            runs,
        })
    }
}
