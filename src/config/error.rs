//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Batch size must be between 1 and {max}, got {actual}")]
    InvalidBatchSize { max: usize, actual: usize },

    #[error("Recency half-life must be a positive number of days, got {0}")]
    InvalidHalfLife(f64),

    #[error("Invalid panel set id '{0}'")]
    InvalidPanelSetId(String),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}
