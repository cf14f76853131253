//! Prediction-quality metrics against observed outcomes.

use serde::{Deserialize, Serialize};

use super::model::StrategicModel;
use crate::domain::foundation::ModelError;

/// Named fit metrics for one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
}

/// Validator comparing observed outcomes to the model's predictions.
pub struct ModelValidator;

impl ModelValidator {
    /// Computes RMSE, MAE, and the coefficient of determination between
    /// `actual` and the predicted state series. The model is read, never
    /// mutated.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` when `actual` does not cover the horizon exactly.
    /// - `DivisionByZero` when the horizon is empty or `actual` has zero
    ///   variance (the R-squared denominator vanishes).
    pub fn validate(
        model: &StrategicModel,
        actual: &[f64],
    ) -> Result<ValidationMetrics, ModelError> {
        let predicted = model.predicted_series()?;
        if actual.len() != predicted.len() {
            return Err(ModelError::shape_mismatch(
                "observed outcomes",
                predicted.len(),
                actual.len(),
            ));
        }
        if predicted.is_empty() {
            return Err(ModelError::division_by_zero("validation metrics"));
        }

        let n = predicted.len() as f64;
        let residual_squares: f64 = actual
            .iter()
            .zip(&predicted)
            .map(|(a, p)| (a - p) * (a - p))
            .sum();
        let absolute_residuals: f64 = actual
            .iter()
            .zip(&predicted)
            .map(|(a, p)| (a - p).abs())
            .sum();

        let actual_mean = actual.iter().sum::<f64>() / n;
        let total_squares: f64 = actual
            .iter()
            .map(|a| (a - actual_mean) * (a - actual_mean))
            .sum();
        if total_squares == 0.0 {
            return Err(ModelError::division_by_zero(
                "coefficient of determination",
            ));
        }

        Ok(ValidationMetrics {
            rmse: (residual_squares / n).sqrt(),
            mae: absolute_residuals / n,
            r_squared: 1.0 - residual_squares / total_squares,
        })
    }
}
