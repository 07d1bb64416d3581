//! Output configuration section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::runs::expand_home;

/// Output settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory for reports and plots
    #[serde(default = "defaults::output_dir")]
    pub directory: String,

    /// Write SVG plots
    #[serde(default = "defaults::enabled")]
    pub plots: bool,

    /// Write per-run error CSV files
    #[serde(default = "defaults::enabled")]
    pub csv: bool,

    /// Draw a heading arrow every N poses in the overview plot
    #[serde(default = "defaults::arrow_stride")]
    pub arrow_stride: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: defaults::output_dir(),
            plots: true,
            csv: true,
            arrow_stride: defaults::arrow_stride(),
        }
    }
}

impl OutputSection {
    /// Output directory with `~` expanded.
    pub fn directory_path(&self) -> PathBuf {
        expand_home(&self.directory)
    }
}
