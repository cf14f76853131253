//! Planning-horizon configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Horizon and decay configuration for model construction
#[derive(Debug, Clone, Deserialize)]
pub struct HorizonConfig {
    /// Number of time steps in the planning horizon
    #[serde(default = "default_time_horizon")]
    pub time_horizon: usize,

    /// Exponential decay rate per time step
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,
}

impl HorizonConfig {
    /// Validate horizon configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.time_horizon == 0 {
            return Err(ValidationError::ZeroHorizon);
        }
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(ValidationError::InvalidDecayRate);
        }
        Ok(())
    }
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            time_horizon: default_time_horizon(),
            decay_rate: default_decay_rate(),
        }
    }
}

fn default_time_horizon() -> usize {
    3
}

fn default_decay_rate() -> f64 {
    0.1
}
