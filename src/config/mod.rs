//! Model configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `STRATEGY_COMPASS_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use strategy_compass::config::ModelConfig;
//!
//! let config = ModelConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Planning over {} steps", config.horizon.time_horizon);
//! ```

mod error;
mod horizon;
mod optimizer;

pub use error::{ConfigError, ValidationError};
pub use horizon::HorizonConfig;
pub use optimizer::OptimizerConfig;

use serde::Deserialize;

/// Root model configuration
///
/// Contains all configuration sections for the strategic model. Load using
/// [`ModelConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Horizon configuration (time steps, decay rate)
    #[serde(default)]
    pub horizon: HorizonConfig,

    /// Optimizer configuration (iteration budget, tolerances)
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl ModelConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STRATEGY_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STRATEGY_COMPASS__HORIZON__TIME_HORIZON=5` -> `horizon.time_horizon = 5`
    /// - `STRATEGY_COMPASS__OPTIMIZER__MAX_ITERATIONS=500` -> `optimizer.max_iterations = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRATEGY_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.horizon.validate()?;
        self.optimizer.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = ModelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.horizon.time_horizon, 3);
        assert_eq!(config.optimizer.max_iterations, 200);
    }

    #[test]
    fn test_load_with_empty_environment() {
        let config = ModelConfig::load().expect("defaults should load");
        assert_eq!(config.horizon.time_horizon, 3);
    }

    #[test]
    fn test_validation_propagates_section_errors() {
        let config = ModelConfig {
            horizon: HorizonConfig {
                time_horizon: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
