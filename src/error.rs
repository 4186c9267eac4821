//! Error types for tracker operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the project store and its collaborators.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Corrupt project data in {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown workflow stage: '{0}'")]
    UnknownStage(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot open link: {0}")]
    Link(String),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// Create a corrupt data error for the given backing file.
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for lookup misses, which callers usually report rather than abort on.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
