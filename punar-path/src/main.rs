//! punar-eval: compare repeat runs against a teach run.
//!
//! # Usage
//!
//! ```bash
//! # Runs and settings from configs/eval.yaml
//! cargo run --release --bin punar-eval
//!
//! # With custom config file
//! cargo run --release --bin punar-eval -- --config my_eval.yaml
//!
//! # Without a config file
//! cargo run --release --bin punar-eval -- \
//!     --teach ~/teach-repeat-data/teach --repeat ~/teach-repeat-data/repeat --name ours
//!
//! # Plot raw repeat runs to choose crop ranges
//! cargo run --release --bin punar-eval -- --crop-data
//! ```
//!
//! # Output Files
//!
//! - `summary.yaml`: RMS lateral error and statistics per run
//! - `errors_<run>.csv`: aligned poses and errors per teach index
//! - `overview.svg`, `lateral_error.svg`: plots (unless `--no-plots`)

use std::path::PathBuf;

use clap::Parser;

use punar_path::config::{EvalConfig, RepeatRunSettings};
use punar_path::core::CropRange;
use punar_path::io::PoseDirectory;
use punar_path::pipeline;

#[derive(Parser, Debug)]
#[command(name = "punar-eval")]
#[command(about = "Measure lateral path error of repeat runs against a teach run")]
struct Args {
    /// YAML config file (defaults to configs/eval.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Teach run directory (overrides runs.teach)
    #[arg(long)]
    teach: Option<String>,

    /// Repeat run directory; repeat to compare several runs (replaces runs.repeats)
    #[arg(long)]
    repeat: Vec<String>,

    /// Label for each --repeat, in the same order
    #[arg(long)]
    name: Vec<String>,

    /// Search window half-width as a fraction of the repeat run length
    #[arg(long)]
    window_half_size: Option<f64>,

    /// Heading gate in degrees
    #[arg(long)]
    angle_threshold_deg: Option<f64>,

    /// Output directory for reports and plots
    #[arg(short, long)]
    output: Option<String>,

    /// Plot x, y and theta of the raw repeat runs and exit
    #[arg(long)]
    crop_data: bool,

    /// Skip SVG plots
    #[arg(long)]
    no_plots: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<EvalConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Using config: {}", path.display());
            EvalConfig::load(path)?
        }
        None => EvalConfig::load_default()?,
    };

    if let Some(teach) = &args.teach {
        config.runs.teach = Some(teach.clone());
    }

    if !args.repeat.is_empty() {
        if !args.name.is_empty() && args.name.len() != args.repeat.len() {
            return Err(format!(
                "{} --name value(s) given for {} --repeat run(s)",
                args.name.len(),
                args.repeat.len()
            )
            .into());
        }

        config.runs.repeats = args
            .repeat
            .iter()
            .enumerate()
            .map(|(i, path)| RepeatRunSettings {
                name: args
                    .name
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("repeat {}", i)),
                path: path.clone(),
                crop: CropRange::FULL,
                color: None,
            })
            .collect();
    }

    if let Some(w) = args.window_half_size {
        config.evaluation.window_half_size = w;
    }
    if let Some(deg) = args.angle_threshold_deg {
        config.evaluation.angle_threshold_deg = deg;
    }
    if let Some(dir) = &args.output {
        config.output.directory = dir.clone();
    }
    if args.no_plots {
        config.output.plots = false;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;

    log::info!(
        "Window half-size: {:.3}, heading gate: {:.1}°",
        config.evaluation.window_half_size,
        config.evaluation.angle_threshold_deg
    );

    let runs = pipeline::load_runs(&config, &PoseDirectory::new())?;

    if args.crop_data {
        for path in pipeline::write_crop_outputs(&config, &runs)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let report = pipeline::evaluate(&config, &runs)?;
    report.print();

    for path in pipeline::write_outputs(&config, &report)? {
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
