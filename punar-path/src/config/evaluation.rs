//! Evaluation configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Resampling settings section
///
/// Angles are written in degrees here and converted to radians exactly once,
/// by [`EvalConfig::to_resample_config`](super::EvalConfig::to_resample_config).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluationSection {
    /// Half-width of the search window as a fraction of the repeat run length
    #[serde(default = "defaults::window_half_size")]
    pub window_half_size: f64,

    /// Maximum heading difference for a match (degrees)
    #[serde(default = "defaults::angle_threshold_deg")]
    pub angle_threshold_deg: f64,
}

impl Default for EvaluationSection {
    fn default() -> Self {
        Self {
            window_half_size: defaults::window_half_size(),
            angle_threshold_deg: defaults::angle_threshold_deg(),
        }
    }
}
