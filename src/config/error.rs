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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Time horizon must be at least one step")]
    ZeroHorizon,

    #[error("Decay rate must be finite and non-negative")]
    InvalidDecayRate,

    #[error("Optimizer iteration budget must be at least one")]
    ZeroIterations,

    #[error("Optimizer tolerance must be finite and positive")]
    InvalidTolerance,

    #[error("Gradient step must be finite and positive")]
    InvalidGradientStep,
}
