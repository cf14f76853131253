//! Error types for the strategic model domain.

use thiserror::Error;

use super::Framework;

/// Errors raised while scoring frameworks or evaluating the unified equation.
///
/// All variants propagate to the immediate caller; the model performs no
/// retry or recovery of its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{framework} inputs have not been supplied")]
    MissingInput { framework: Framework },

    #[error("{context} has length {actual}, expected {expected}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Division by zero while computing {context}")]
    DivisionByZero { context: &'static str },

    #[error("Time step {step} is outside the horizon 0..{horizon}")]
    StepOutOfHorizon { step: usize, horizon: usize },
}

impl ModelError {
    /// Creates a missing-input error for a framework.
    pub fn missing_input(framework: Framework) -> Self {
        ModelError::MissingInput { framework }
    }

    /// Creates a shape-mismatch error for a named sequence.
    pub fn shape_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        ModelError::ShapeMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Creates a division-by-zero error for a named computation.
    pub fn division_by_zero(context: &'static str) -> Self {
        ModelError::DivisionByZero { context }
    }
}
