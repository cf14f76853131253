//! Optimizer configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::SolverOptions;

/// Solver configuration for the force optimizer
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerConfig {
    /// Maximum solver iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Stationarity tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Relative finite-difference step
    #[serde(default = "default_gradient_step")]
    pub gradient_step: f64,
}

impl OptimizerConfig {
    /// Convert into solver options
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            gradient_step: self.gradient_step,
        }
    }

    /// Validate optimizer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_iterations == 0 {
            return Err(ValidationError::ZeroIterations);
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ValidationError::InvalidTolerance);
        }
        if !self.gradient_step.is_finite() || self.gradient_step <= 0.0 {
            return Err(ValidationError::InvalidGradientStep);
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            gradient_step: default_gradient_step(),
        }
    }
}

fn default_max_iterations() -> usize {
    200
}

fn default_tolerance() -> f64 {
    1e-8
}

fn default_gradient_step() -> f64 {
    1e-6
}
