//! Error types for PunarPath

use std::path::PathBuf;

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// PunarPath error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Orientation cannot be reduced to a heading
    #[error("Invalid pose{}: {reason}", .index.map(|i| format!(" at index {}", i)).unwrap_or_default())]
    InvalidPose {
        /// Position of the pose within its run, when known
        index: Option<usize>,
        /// What was wrong with it
        reason: String,
    },

    /// No finite value to summarize
    #[error("All values missing: {0}")]
    AllValuesMissing(String),

    /// Two index-aligned sequences differ in length
    #[error("Length mismatch: reference has {reference} poses, compared run has {other}")]
    LengthMismatch {
        /// Reference length
        reference: usize,
        /// Length of the other sequence
        other: usize,
    },

    /// A run loaded without any poses
    #[error("Run '{0}' contains no poses")]
    EmptyRun(String),

    /// Pose file name without a numeric sequence prefix
    #[error("Invalid pose file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// Unknown run requested from a pose source
    #[error("Unknown run: {0}")]
    UnknownRun(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pose record could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report could not be serialized
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl Error {
    /// Shorthand for an [`Error::InvalidPose`] without a known index.
    pub fn invalid_pose(reason: impl Into<String>) -> Self {
        Error::InvalidPose {
            index: None,
            reason: reason.into(),
        }
    }
}
