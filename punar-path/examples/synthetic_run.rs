//! Synthetic teach-and-repeat example.
//!
//! This example demonstrates:
//! - Recording a teach run and two repeat runs as pose directories
//! - Loading them back through a config, with a crop on one run
//! - Writing the CSV/YAML report and SVG plots
//!
//! # Usage
//!
//! ```bash
//! cargo run --example synthetic_run
//! ```
//!
//! Pose directories and results are written under `output/synthetic/`.

use std::f64::consts::PI;
use std::path::Path;

use punar_path::config::RepeatRunSettings;
use punar_path::{CropRange, EvalConfig, Pose2D, PoseDirectory, PoseRecorder, RawPose, pipeline};

/// Rounded-rectangle loop, counter-clockwise, heading along the path.
fn loop_poses(n: usize, lateral: f64, sway: f64) -> Vec<Pose2D> {
    (0..n)
        .map(|i| {
            let s = 2.0 * PI * i as f64 / n as f64;
            let (rx, ry) = (4.0, 2.0);
            let x = rx * s.cos();
            let y = ry * s.sin();
            let theta = (ry * s.cos()).atan2(-rx * s.sin());
            let offset = lateral + sway * (3.0 * s).sin();
            Pose2D::new(x - offset * theta.sin(), y + offset * theta.cos(), theta)
        })
        .collect()
}

fn record(dir: &Path, poses: &[Pose2D]) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    let mut recorder = PoseRecorder::create(dir)?;
    for (i, p) in poses.iter().enumerate() {
        recorder.record(&RawPose::from_planar(p.x, p.y, p.theta), Some(i as f64 / 30.0))?;
    }
    log::info!("Recorded {} poses to {}", recorder.count(), dir.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = Path::new("output/synthetic");

    // Teach at 10 Hz, repeats at 30 Hz
    record(&root.join("teach"), &loop_poses(300, 0.0, 0.0))?;
    record(&root.join("ours"), &loop_poses(900, 0.01, 0.02))?;

    // Second repeat waits at the start before driving
    let mut waiting = vec![loop_poses(900, 0.0, 0.0)[0]; 150];
    waiting.extend(loop_poses(900, -0.05, 0.05));
    record(&root.join("baseline"), &waiting)?;

    let mut config = EvalConfig::default();
    config.runs.teach = Some(root.join("teach").display().to_string());
    config.runs.repeats = vec![
        RepeatRunSettings {
            name: "ours".to_string(),
            path: root.join("ours").display().to_string(),
            crop: CropRange::FULL,
            color: None,
        },
        RepeatRunSettings {
            name: "baseline".to_string(),
            path: root.join("baseline").display().to_string(),
            crop: CropRange {
                start: Some(150),
                end: None,
            },
            color: None,
        },
    ];
    config.output.directory = root.join("results").display().to_string();
    config.output.arrow_stride = 10;
    config.validate()?;

    let runs = pipeline::load_runs(&config, &PoseDirectory::new())?;
    let report = pipeline::evaluate(&config, &runs)?;
    report.print();

    for path in pipeline::write_outputs(&config, &report)? {
        println!("Saved {}", path.display());
    }

    Ok(())
}
