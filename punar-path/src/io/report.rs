//! Report files: per-run error CSV and a YAML summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::Trajectory;
use crate::error::Result;
use crate::evaluation::{EvaluationReport, RunEvaluation, RunSummary};

/// CSV header written by [`write_errors_csv`].
pub const ERRORS_CSV_HEADER: &str =
    "index,teach_x,teach_y,teach_theta,repeat_x,repeat_y,repeat_theta,path_error,lateral_error";

/// Turn a run label into something safe to use in a file name.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let trimmed = stem.trim_matches('_');
    if trimmed.is_empty() {
        "run".to_string()
    } else {
        trimmed.to_string()
    }
}

fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.6}", v)
    }
}

/// Write one run's aligned poses and errors, one row per teach index.
pub fn write_errors_csv<W: Write>(writer: &mut W, teach: &Trajectory, run: &RunEvaluation) -> Result<()> {
    writeln!(writer, "{}", ERRORS_CSV_HEADER)?;

    for (i, (t, r)) in teach.iter().zip(run.resampled.iter()).enumerate() {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            i,
            fmt_value(t.x),
            fmt_value(t.y),
            fmt_value(t.theta),
            fmt_value(r.x),
            fmt_value(r.y),
            fmt_value(r.theta),
            fmt_value(run.errors.path[i]),
            fmt_value(run.errors.lateral[i]),
        )?;
    }

    Ok(())
}

/// Serialize run summaries as YAML.
pub fn summary_yaml(summaries: &[RunSummary]) -> Result<String> {
    Ok(serde_yaml::to_string(summaries)?)
}

/// Write the run summaries of `report` to `path` as YAML.
pub fn write_summary(report: &EvaluationReport, path: &Path) -> Result<()> {
    std::fs::write(path, summary_yaml(&report.summaries())?)?;
    Ok(())
}

/// Write `errors_<run>.csv` for every run plus `summary.yaml` into `dir`.
///
/// Returns the paths written.
pub fn write_report(report: &EvaluationReport, dir: &Path, csv: bool) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    if csv {
        for run in &report.runs {
            let path = dir.join(format!("errors_{}.csv", file_stem(&run.name)));
            let mut file = BufWriter::new(File::create(&path)?);
            write_errors_csv(&mut file, &report.teach, run)?;
            file.flush()?;
            written.push(path);
        }
    }

    let summary_path = dir.join("summary.yaml");
    write_summary(report, &summary_path)?;
    written.push(summary_path);

    log::info!("Wrote {} report file(s) to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pose2D;
    use crate::evaluation::{Evaluator, RepeatRun};
    use tempfile::TempDir;

    fn report() -> EvaluationReport {
        let teach: Trajectory = (0..4).map(|i| Pose2D::new(i as f64, 0.0, 0.0)).collect();
        let repeat: Trajectory = (0..4).map(|i| Pose2D::new(i as f64, 0.5, 0.0)).collect();
        Evaluator::default()
            .evaluate(&teach, &[RepeatRun::new("Ours (filtered)", repeat)])
            .unwrap()
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Ours (filtered odom)"), "ours__filtered_odom");
        assert_eq!(file_stem("///"), "run");
    }

    #[test]
    fn test_csv_rows() {
        let report = report();
        let mut out = Vec::new();
        write_errors_csv(&mut out, &report.teach, &report.runs[0]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ERRORS_CSV_HEADER);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with(",-0.500000"), "{}", lines[1]);
    }

    #[test]
    fn test_csv_writes_nan() {
        let mut report = report();
        report.runs[0].resampled = Trajectory::from_poses(vec![Pose2D::MISSING; 4]);
        report.runs[0].errors.lateral = vec![f64::NAN; 4];

        let mut out = Vec::new();
        write_errors_csv(&mut out, &report.teach, &report.runs[0]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",nan"));
    }

    #[test]
    fn test_write_report() {
        let dir = TempDir::new().unwrap();
        let written = write_report(&report(), dir.path(), true).unwrap();

        assert_eq!(written.len(), 2);
        assert!(dir.path().join("errors_ours__filtered.csv").exists());

        let summary = std::fs::read_to_string(dir.path().join("summary.yaml")).unwrap();
        assert!(summary.contains("Ours (filtered)"));
        assert!(summary.contains("rms_lateral"));
    }
}
