//! Reconciler error types

use thiserror::Error;

/// Errors that can occur while reconciling an artifact
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// The original artifact of a structured kind is not valid JSON of the
    /// expected shape
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ReconcileError {
    fn from(err: serde_json::Error) -> Self {
        ReconcileError::InvalidArtifact(err.to_string())
    }
}
