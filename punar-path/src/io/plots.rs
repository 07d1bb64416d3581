//! Standard plot set for an evaluation.

use std::path::{Path, PathBuf};

use crate::core::Trajectory;
use crate::error::Result;
use crate::evaluation::EvaluationReport;

use super::report::file_stem;
use super::svg::{SeriesPlot, SvgConfig, TrajectoryPlot};

/// Colours for the teach run and each repeat run (in report order).
#[derive(Clone, Debug)]
pub struct PlotColors {
    /// Teach run colour
    pub teach: String,
    /// Repeat run colours; cycled if there are fewer than runs
    pub repeats: Vec<String>,
}

impl PlotColors {
    fn repeat(&self, index: usize) -> &str {
        if self.repeats.is_empty() {
            "#4444dd"
        } else {
            &self.repeats[index % self.repeats.len()]
        }
    }
}

/// Write `overview.svg` and `lateral_error.svg` into `dir`.
///
/// The along-path error is not plotted: a repeat run sampled more densely
/// than the teach run always matches a nearby pose, so it stays tiny.
pub fn write_plots(
    report: &EvaluationReport,
    colors: &PlotColors,
    arrow_stride: usize,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let config = SvgConfig {
        arrow_stride,
        ..Default::default()
    };
    let mut overview = TrajectoryPlot::new(config)
        .with_title("overview of runs")
        .with_trajectory("teach", &report.teach, colors.teach.clone());
    for (i, run) in report.runs.iter().enumerate() {
        overview = overview.with_trajectory(run.name.clone(), &run.resampled, colors.repeat(i));
    }
    let overview_path = dir.join("overview.svg");
    overview.save(&overview_path)?;

    let mut errors = SeriesPlot::default()
        .with_title("Repeat run error")
        .with_y_label("lateral path error (m)");
    for (i, run) in report.runs.iter().enumerate() {
        errors = errors.with_series(run.label(), run.errors.lateral.clone(), colors.repeat(i));
    }
    let errors_path = dir.join("lateral_error.svg");
    errors.save(&errors_path)?;

    Ok(vec![overview_path, errors_path])
}

/// Write x, y and theta against index for raw (uncropped) repeat runs.
///
/// Used to pick crop ranges: time spent standing still shows up as flat
/// stretches at the start or end of a run.
pub fn write_crop_plots(
    runs: &[(String, Trajectory)],
    colors: &PlotColors,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let columns: [(&str, &str, fn(&Trajectory) -> Vec<f64>); 3] = [
        ("x", "x (m)", Trajectory::xs),
        ("y", "y (m)", Trajectory::ys),
        ("theta", "theta (rad)", Trajectory::thetas),
    ];

    let mut written = Vec::new();
    for (column, y_label, values) in columns {
        let mut plot = SeriesPlot::default()
            .with_title(format!("Repeat runs: {}", column))
            .with_y_label(y_label);
        for (i, (name, trajectory)) in runs.iter().enumerate() {
            plot = plot.with_series(format!("{}: {}", i, name), values(trajectory), colors.repeat(i));
        }
        let path = dir.join(format!("crop_{}.svg", column));
        plot.save(&path)?;
        written.push(path);
    }

    log::info!(
        "Wrote crop plots for {} run(s): {}",
        runs.len(),
        runs.iter()
            .map(|(name, _)| file_stem(name))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(written)
}
