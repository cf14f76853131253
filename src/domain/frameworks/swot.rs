//! SWOT inputs and interaction-effectiveness scoring.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ModelError;

/// Inputs for the SWOT assessment.
///
/// Internal and external factors are label lists; only their counts enter
/// the score. The interaction tensor may take any 2-D shape - only its total
/// matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwotInputs {
    internal_factors: Vec<String>,
    external_factors: Vec<String>,
    interaction: Array2<f64>,
}

impl SwotInputs {
    /// Creates a SWOT input set.
    pub fn new(
        internal_factors: Vec<impl Into<String>>,
        external_factors: Vec<impl Into<String>>,
        interaction: Array2<f64>,
    ) -> Self {
        Self {
            internal_factors: internal_factors.into_iter().map(|f| f.into()).collect(),
            external_factors: external_factors.into_iter().map(|f| f.into()).collect(),
            interaction,
        }
    }

    /// Returns the number of internal factors.
    pub fn internal_count(&self) -> usize {
        self.internal_factors.len()
    }

    /// Returns the number of external factors.
    pub fn external_count(&self) -> usize {
        self.external_factors.len()
    }

    /// Strategic effectiveness: the interaction total normalized by the
    /// internal x external factor count. Empty factor lists cannot be
    /// normalized and surface as a division-by-zero error.
    pub fn score(&self) -> Result<f64, ModelError> {
        let cells = self.internal_factors.len() * self.external_factors.len();
        if cells == 0 {
            return Err(ModelError::division_by_zero("SWOT effectiveness"));
        }
        Ok(self.interaction.sum() / cells as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn score_normalizes_interaction_total() {
        let inputs = SwotInputs::new(
            vec!["Strength", "Weakness"],
            vec!["Opportunity"],
            array![[2.0], [2.0]],
        );

        // (2 + 2) / (2 * 1)
        assert!((inputs.score().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn tensor_shape_is_free_of_factor_counts() {
        let inputs = SwotInputs::new(
            vec!["S1", "S2"],
            vec!["O1", "O2"],
            array![[1.0, 1.0, 1.0, 1.0]],
        );

        assert!((inputs.score().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_internal_factors_divide_by_zero() {
        let inputs = SwotInputs::new(Vec::<String>::new(), vec!["O1"], array![[1.0]]);
        assert_eq!(
            inputs.score().unwrap_err(),
            ModelError::division_by_zero("SWOT effectiveness")
        );
    }

    #[test]
    fn empty_external_factors_divide_by_zero() {
        let inputs = SwotInputs::new(vec!["S1"], Vec::<String>::new(), array![[1.0]]);
        assert!(inputs.score().is_err());
    }
}
