//! BCG portfolio inputs and scoring.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::check_len;
use crate::domain::foundation::ModelError;

/// Inputs for the BCG growth-share assessment, one entry per business unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcgInputs {
    market_share: Array1<f64>,
    growth_rate: Array1<f64>,
}

impl BcgInputs {
    /// Creates a BCG input set, rejecting vectors of unequal length.
    pub fn new(market_share: Array1<f64>, growth_rate: Array1<f64>) -> Result<Self, ModelError> {
        check_len("BCG growth rates", market_share.len(), growth_rate.len())?;
        Ok(Self {
            market_share,
            growth_rate,
        })
    }

    /// Returns the number of business units.
    pub fn unit_count(&self) -> usize {
        self.market_share.len()
    }

    /// Portfolio score: the mean of share x growth across units.
    pub fn score(&self) -> Result<f64, ModelError> {
        (&self.market_share * &self.growth_rate)
            .mean()
            .ok_or_else(|| ModelError::division_by_zero("BCG portfolio score"))
    }
}
