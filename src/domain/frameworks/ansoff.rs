//! Ansoff growth-strategy inputs and scoring.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::check_len;
use crate::domain::foundation::ModelError;

/// Inputs for the Ansoff assessment, one entry per growth strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsoffInputs {
    strategy_success: Array1<f64>,
    strategy_risk: Array1<f64>,
}

impl AnsoffInputs {
    /// Creates an Ansoff input set, rejecting vectors of unequal length.
    pub fn new(
        strategy_success: Array1<f64>,
        strategy_risk: Array1<f64>,
    ) -> Result<Self, ModelError> {
        check_len(
            "Ansoff strategy risks",
            strategy_success.len(),
            strategy_risk.len(),
        )?;
        Ok(Self {
            strategy_success,
            strategy_risk,
        })
    }

    /// Returns the number of strategies.
    pub fn strategy_count(&self) -> usize {
        self.strategy_success.len()
    }

    /// Growth score: the mean of success minus risk across strategies.
    pub fn score(&self) -> Result<f64, ModelError> {
        (&self.strategy_success - &self.strategy_risk)
            .mean()
            .ok_or_else(|| ModelError::division_by_zero("Ansoff growth score"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn score_averages_risk_adjusted_success() {
        let inputs = AnsoffInputs::new(array![0.7, 0.5], array![0.1, 0.3]).unwrap();
        // mean(0.6, 0.2)
        assert!((inputs.score().unwrap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn rejects_unequal_lengths() {
        assert!(AnsoffInputs::new(array![0.7], array![0.1, 0.3]).is_err());
    }

    #[test]
    fn empty_strategies_divide_by_zero() {
        let inputs = AnsoffInputs::new(Array1::zeros(0), Array1::zeros(0)).unwrap();
        assert!(inputs.score().is_err());
    }
}
