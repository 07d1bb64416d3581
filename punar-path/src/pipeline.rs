//! Config-driven evaluation: load runs, evaluate, write outputs.

use std::path::PathBuf;

use crate::config::{ConfigLoadError, EvalConfig};
use crate::core::Trajectory;
use crate::error::{Error, Result};
use crate::evaluation::{EvaluationReport, Evaluator, RepeatRun};
use crate::io::{PlotColors, write_crop_plots, write_plots, write_report};
use crate::source::PoseSource;

/// Teach run and uncropped repeat runs named by a config.
#[derive(Clone, Debug)]
pub struct LoadedRuns {
    /// Teach trajectory
    pub teach: Trajectory,
    /// Repeat runs with their crop ranges
    pub repeats: Vec<RepeatRun>,
}

/// Load the teach run and every repeat run listed in `config`.
///
/// Run paths are passed to `source` with `~` already expanded.
pub fn load_runs(config: &EvalConfig, source: &dyn PoseSource) -> Result<LoadedRuns> {
    let teach_path = config
        .runs
        .teach_path()
        .ok_or_else(|| ConfigLoadError::Invalid("runs.teach is not set".to_string()))?;

    let teach = source.load_trajectory(&teach_path.to_string_lossy())?;
    log::info!("Teach run: {} poses from {}", teach.len(), teach_path.display());

    let mut repeats = Vec::with_capacity(config.runs.repeats.len());
    for settings in &config.runs.repeats {
        let path = settings.resolved_path();
        let trajectory = source.load_trajectory(&path.to_string_lossy())?;
        log::info!(
            "Repeat run '{}': {} poses from {}",
            settings.name,
            trajectory.len(),
            path.display()
        );
        repeats.push(RepeatRun::new(settings.name.clone(), trajectory).with_crop(settings.crop));
    }

    if repeats.is_empty() {
        return Err(ConfigLoadError::Invalid("no repeat runs configured".to_string()).into());
    }

    Ok(LoadedRuns { teach, repeats })
}

/// Evaluate already-loaded runs with the config's resampler settings.
pub fn evaluate(config: &EvalConfig, runs: &LoadedRuns) -> Result<EvaluationReport> {
    Evaluator::new(config.to_resample_config()).evaluate(&runs.teach, &runs.repeats)
}

/// Plot colours taken from the config, in repeat run order.
pub fn plot_colors(config: &EvalConfig) -> PlotColors {
    PlotColors {
        teach: config.runs.teach_color.clone(),
        repeats: (0..config.runs.repeats.len().max(1))
            .map(|i| config.runs.repeat_color(i))
            .collect(),
    }
}

/// Write report files and (if enabled) plots to the configured directory.
pub fn write_outputs(config: &EvalConfig, report: &EvaluationReport) -> Result<Vec<PathBuf>> {
    let dir = config.output.directory_path();
    let mut written = write_report(report, &dir, config.output.csv)?;
    if config.output.plots {
        written.extend(write_plots(
            report,
            &plot_colors(config),
            config.output.arrow_stride,
            &dir,
        )?);
    }
    Ok(written)
}

/// Write crop-assist plots of the raw repeat runs.
pub fn write_crop_outputs(config: &EvalConfig, runs: &LoadedRuns) -> Result<Vec<PathBuf>> {
    let raw: Vec<(String, Trajectory)> = runs
        .repeats
        .iter()
        .map(|r| (r.name.clone(), r.trajectory.clone()))
        .collect();
    write_crop_plots(&raw, &plot_colors(config), &config.output.directory_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepeatRunSettings;
    use crate::core::CropRange;
    use crate::source::MemorySource;

    fn source() -> MemorySource {
        let teach: Vec<(f64, f64, f64)> = (0..10).map(|i| (i as f64, 0.0, 0.0)).collect();
        let repeat: Vec<(f64, f64, f64)> = (0..20).map(|i| (i as f64 * 0.5, 0.1, 0.0)).collect();
        MemorySource::new()
            .with_planar_run("teach", &teach)
            .with_planar_run("repeat", &repeat)
    }

    fn config() -> EvalConfig {
        let mut config = EvalConfig::default();
        config.runs.teach = Some("teach".to_string());
        config.runs.repeats.push(RepeatRunSettings {
            name: "repeat".to_string(),
            path: "repeat".to_string(),
            crop: CropRange::FULL,
            color: None,
        });
        config
    }

    #[test]
    fn test_load_and_evaluate() {
        let runs = load_runs(&config(), &source()).unwrap();
        assert_eq!(runs.teach.len(), 10);
        assert_eq!(runs.repeats[0].trajectory.len(), 20);

        let report = evaluate(&config(), &runs).unwrap();
        let rms = report.runs[0].rms_lateral.unwrap();
        assert!((rms - 0.1).abs() < 1e-9, "rms = {}", rms);
    }

    #[test]
    fn test_missing_teach() {
        let mut config = config();
        config.runs.teach = None;
        assert!(matches!(load_runs(&config, &source()), Err(Error::Config(_))));
    }

    #[test]
    fn test_no_repeats() {
        let mut config = config();
        config.runs.repeats.clear();
        assert!(matches!(load_runs(&config, &source()), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_error_surfaces() {
        let mut config = config();
        config.runs.repeats[0].path = "absent".to_string();
        assert!(matches!(
            load_runs(&config, &source()),
            Err(Error::UnknownRun(_))
        ));
    }
}
