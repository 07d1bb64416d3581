//! Run selection section: which recordings to compare.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::CropRange;

use super::defaults;

/// One repeat run to evaluate against the teach run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepeatRunSettings {
    /// Label used in logs, plots and report files
    pub name: String,

    /// Directory holding the run's pose files
    pub path: String,

    /// Index slice applied before resampling
    #[serde(default, skip_serializing_if = "CropRange::is_full")]
    pub crop: CropRange,

    /// Plot colour (falls back to a palette entry)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Runs section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunsSection {
    /// Directory holding the teach run's pose files
    #[serde(default)]
    pub teach: Option<String>,

    /// Plot colour for the teach run
    #[serde(default = "defaults::teach_color")]
    pub teach_color: String,

    /// Repeat runs, in report order
    #[serde(default)]
    pub repeats: Vec<RepeatRunSettings>,
}

impl Default for RunsSection {
    fn default() -> Self {
        Self {
            teach: None,
            teach_color: defaults::teach_color(),
            repeats: Vec::new(),
        }
    }
}

impl RunsSection {
    /// Teach directory with `~` expanded.
    pub fn teach_path(&self) -> Option<PathBuf> {
        self.teach.as_deref().map(expand_home)
    }

    /// Colour of the `index`-th repeat run.
    pub fn repeat_color(&self, index: usize) -> String {
        self.repeats
            .get(index)
            .and_then(|r| r.color.clone())
            .unwrap_or_else(|| {
                defaults::REPEAT_COLORS[index % defaults::REPEAT_COLORS.len()].to_string()
            })
    }
}

impl RepeatRunSettings {
    /// Directory with `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        expand_home(&self.path)
    }
}

/// Expand a leading `~` to `$HOME`.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/data/teach"), PathBuf::from("/data/teach"));
        assert_eq!(expand_home("runs/~x"), PathBuf::from("runs/~x"));
    }

    #[test]
    fn test_expand_home_prefix() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                expand_home("~/teach-repeat-data/teach/"),
                PathBuf::from(home).join("teach-repeat-data/teach/")
            );
        }
    }

    #[test]
    fn test_repeat_color_palette() {
        let mut runs = RunsSection::default();
        for i in 0..2 {
            runs.repeats.push(RepeatRunSettings {
                name: format!("r{}", i),
                path: ".".to_string(),
                crop: CropRange::FULL,
                color: None,
            });
        }
        runs.repeats[1].color = Some("#000000".to_string());

        assert_eq!(runs.repeat_color(0), "#4444dd");
        assert_eq!(runs.repeat_color(1), "#000000");
        assert_eq!(runs.repeat_color(5), "#dd4444");
    }
}
