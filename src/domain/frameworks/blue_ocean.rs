//! Blue Ocean inputs and value-innovation scoring.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::check_len;
use crate::domain::foundation::ModelError;

/// Inputs for the Blue Ocean assessment, one entry per value dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueOceanInputs {
    differentiation: Array1<f64>,
    cost_leadership: Array1<f64>,
}

impl BlueOceanInputs {
    /// Creates a Blue Ocean input set, rejecting vectors of unequal length.
    ///
    /// Zero entries in `cost_leadership` are accepted here and surface as a
    /// division-by-zero error when the set is scored.
    pub fn new(
        differentiation: Array1<f64>,
        cost_leadership: Array1<f64>,
    ) -> Result<Self, ModelError> {
        check_len(
            "Blue Ocean cost leadership",
            differentiation.len(),
            cost_leadership.len(),
        )?;
        Ok(Self {
            differentiation,
            cost_leadership,
        })
    }

    /// Returns the number of value dimensions.
    pub fn dimension_count(&self) -> usize {
        self.differentiation.len()
    }

    /// Value-innovation score: the mean differentiation-to-cost ratio.
    pub fn score(&self) -> Result<f64, ModelError> {
        if self.cost_leadership.iter().any(|&cost| cost == 0.0) {
            return Err(ModelError::division_by_zero("Blue Ocean value ratio"));
        }
        (&self.differentiation / &self.cost_leadership)
            .mean()
            .ok_or_else(|| ModelError::division_by_zero("Blue Ocean value ratio"))
    }
}
