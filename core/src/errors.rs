//! Error types for the health calculator

use thiserror::Error;

/// Errors returned by health calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthError {
    /// An input was non-finite, non-positive, or outside its plausible range
    #[error("Invalid health data: {0}")]
    InvalidHealthData(String),
}

impl HealthError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        HealthError::InvalidHealthData(message.into())
    }

    /// The human-readable reason without the error prefix
    pub fn message(&self) -> &str {
        match self {
            HealthError::InvalidHealthData(message) => message,
        }
    }
}

/// Result alias for health calculations
pub type Result<T> = std::result::Result<T, HealthError>;
