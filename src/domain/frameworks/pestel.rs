//! PESTEL macro-environment inputs and expected-impact scoring.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::check_len;
use crate::domain::foundation::ModelError;

/// Inputs for the PESTEL scan.
///
/// `factors` carries display labels; `weights`, `probabilities`, and
/// `impacts` run parallel to it. No numeric bounds are enforced on the
/// values themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestelInputs {
    factors: Vec<String>,
    weights: Array1<f64>,
    probabilities: Array1<f64>,
    impacts: Array1<f64>,
}

impl PestelInputs {
    /// Creates a PESTEL input set, rejecting parallel sequences of unequal
    /// length.
    pub fn new(
        factors: Vec<impl Into<String>>,
        weights: Array1<f64>,
        probabilities: Array1<f64>,
        impacts: Array1<f64>,
    ) -> Result<Self, ModelError> {
        let factors: Vec<String> = factors.into_iter().map(|f| f.into()).collect();
        let n = factors.len();
        check_len("PESTEL weights", n, weights.len())?;
        check_len("PESTEL probabilities", n, probabilities.len())?;
        check_len("PESTEL impacts", n, impacts.len())?;
        Ok(Self {
            factors,
            weights,
            probabilities,
            impacts,
        })
    }

    /// Returns the number of factors.
    pub fn factor_count(&self) -> usize {
        self.factors.len()
    }

    /// Returns the factor labels.
    pub fn factors(&self) -> &[String] {
        &self.factors
    }

    /// Expected impact: the sum of weight x probability x impact across all
    /// factors. An empty scan scores zero.
    pub fn score(&self) -> f64 {
        ((&self.weights * &self.probabilities) * &self.impacts).sum()
    }
}
