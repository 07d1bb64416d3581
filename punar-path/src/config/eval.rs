//! Main EvalConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::math::deg_to_rad;
use crate::evaluation::ResampleConfig;

use super::error::ConfigLoadError;
use super::evaluation::EvaluationSection;
use super::output::OutputSection;
use super::runs::RunsSection;

/// Full PunarPath configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct EvalConfig {
    /// Resampling settings
    #[serde(default)]
    pub evaluation: EvaluationSection,

    /// Teach and repeat runs
    #[serde(default)]
    pub runs: RunsSection,

    /// Report and plot output
    #[serde(default)]
    pub output: OutputSection,
}

impl EvalConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/eval.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/eval.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let window = self.evaluation.window_half_size;
        if !window.is_finite() || window <= 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "evaluation.window_half_size must be a positive fraction, got {}",
                window
            )));
        }

        let threshold = self.evaluation.angle_threshold_deg;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "evaluation.angle_threshold_deg must be non-negative, got {}",
                threshold
            )));
        }

        if self.output.arrow_stride == 0 {
            return Err(ConfigLoadError::Invalid(
                "output.arrow_stride must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert to the resampler's runtime config (angles in radians)
    pub fn to_resample_config(&self) -> ResampleConfig {
        ResampleConfig {
            window_half_size: self.evaluation.window_half_size,
            angle_threshold: deg_to_rad(self.evaluation.angle_threshold_deg),
        }
    }
}
