//! Porter's Five Forces inputs and industry-attractiveness scoring.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::check_len;
use crate::domain::foundation::ModelError;

/// Inputs for the Five Forces assessment.
///
/// `forces` holds the intensity of each force; `influence` is the square
/// matrix of cross-force amplification (its diagonal is ignored). This is
/// the one input set the optimizer searches over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiveForcesInputs {
    forces: Array1<f64>,
    influence: Array2<f64>,
}

impl FiveForcesInputs {
    /// Creates a Five Forces input set, rejecting an influence matrix whose
    /// shape is not `forces.len()` square.
    pub fn new(forces: Array1<f64>, influence: Array2<f64>) -> Result<Self, ModelError> {
        let m = forces.len();
        check_len("Five Forces influence matrix rows", m, influence.nrows())?;
        check_len("Five Forces influence matrix columns", m, influence.ncols())?;
        Ok(Self { forces, influence })
    }

    /// Returns a copy of this input set with the force vector replaced.
    ///
    /// The influence matrix is kept; the replacement must match its size.
    pub fn with_forces(&self, forces: Array1<f64>) -> Result<Self, ModelError> {
        check_len("Five Forces vector", self.forces.len(), forces.len())?;
        Ok(Self {
            forces,
            influence: self.influence.clone(),
        })
    }

    /// Returns the force vector.
    pub fn forces(&self) -> &Array1<f64> {
        &self.forces
    }

    /// Returns the number of forces.
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// Industry attractiveness: `1 - (1/M) * sum_i forces[i] * sum_{j != i}
    /// influence[i][j]`. Lower combined force pressure means a more
    /// attractive industry; the result is not clamped to `[0, 1]`.
    pub fn score(&self) -> Result<f64, ModelError> {
        let m = self.forces.len();
        if m == 0 {
            return Err(ModelError::division_by_zero("Five Forces attractiveness"));
        }
        let mut pressure = 0.0;
        for i in 0..m {
            let amplification: f64 = (0..m)
                .filter(|&j| j != i)
                .map(|j| self.influence[[i, j]])
                .sum();
            pressure += self.forces[i] * amplification;
        }
        Ok(1.0 - pressure / m as f64)
    }
}
