//! Coupling coefficients between framework pairs.

use std::collections::HashMap;

use super::model::FrameworkScores;
use crate::domain::foundation::Framework;

/// Coefficient applied to any pair without an explicit entry.
pub const DEFAULT_COUPLING: f64 = 0.3;

/// Ordered-pair coupling coefficients.
///
/// Any pair may be stored, but the unified equation reads only the five
/// adjacent pairs in [`Framework::ADJACENT_PAIRS`]; other entries are inert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouplingMap {
    coefficients: HashMap<(Framework, Framework), f64>,
}

impl CouplingMap {
    /// Creates a map with no explicit coefficients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coefficient for an ordered pair, replacing any prior value.
    pub fn set(&mut self, from: Framework, to: Framework, coefficient: f64) {
        self.coefficients.insert((from, to), coefficient);
    }

    /// Returns the coefficient for an ordered pair, falling back to
    /// [`DEFAULT_COUPLING`].
    pub fn get(&self, from: Framework, to: Framework) -> f64 {
        self.coefficients
            .get(&(from, to))
            .copied()
            .unwrap_or(DEFAULT_COUPLING)
    }

    /// Sum of coefficient x left-score x right-score over the five adjacent
    /// pairs.
    pub fn pairwise_effect(&self, scores: &FrameworkScores) -> f64 {
        Framework::ADJACENT_PAIRS
            .iter()
            .map(|&(left, right)| self.get(left, right) * scores.of(left) * scores.of(right))
            .sum()
    }
}
