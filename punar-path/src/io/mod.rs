//! Pose files, report files and plots.
//!
//! - **Pose directories**: one JSON `TransformStamped` per recorded step,
//!   read by [`PoseDirectory`] and written by [`PoseRecorder`]
//! - **Reports**: per-run error CSV and a YAML summary ([`write_report`])
//! - **SVG plots**: run overview and per-index error charts
//!
//! ## Loading a run
//!
//! ```rust,ignore
//! use punar_path::io::PoseDirectory;
//! use punar_path::source::PoseSource;
//!
//! let teach = PoseDirectory::new().load_trajectory("/data/teach")?;
//! ```
//!
//! ## Plotting
//!
//! ```rust,ignore
//! use punar_path::io::{SeriesPlot, SvgConfig, TrajectoryPlot};
//!
//! TrajectoryPlot::new(SvgConfig::default())
//!     .with_title("overview of runs")
//!     .with_trajectory("teach", &teach, "#44dd44")
//!     .with_trajectory("ours", &run.resampled, "#4444dd")
//!     .save(Path::new("overview.svg"))?;
//! ```

pub mod plots;
pub mod pose_files;
pub mod report;
pub mod svg;

pub use plots::{PlotColors, write_crop_plots, write_plots};
pub use pose_files::{
    POSE_FILE_SUFFIX, PoseDirectory, PoseRecorder, list_pose_files, parse_pose_record,
};
pub use report::{
    ERRORS_CSV_HEADER, file_stem, summary_yaml, write_errors_csv, write_report, write_summary,
};
pub use svg::{SeriesPlot, SvgConfig, TrajectoryPlot};
