//! Temporal decay schedule over the planning horizon.

use serde::{Deserialize, Serialize};

/// Default exponential decay rate per time step.
pub const DEFAULT_DECAY_RATE: f64 = 0.1;

/// Precomputed per-step multipliers discounting future strategic state.
///
/// Computed once at model construction and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalDecay {
    factors: Vec<f64>,
}

impl TemporalDecay {
    /// Precomputes `exp(-rate * t)` for every step of the horizon.
    pub fn new(horizon: usize, rate: f64) -> Self {
        Self {
            factors: (0..horizon).map(|t| (-rate * t as f64).exp()).collect(),
        }
    }

    /// Returns the number of time steps.
    pub fn horizon(&self) -> usize {
        self.factors.len()
    }

    /// Returns the multiplier for a step, or `None` outside the horizon.
    pub fn factor(&self, step: usize) -> Option<f64> {
        self.factors.get(step).copied()
    }
}
