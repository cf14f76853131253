//! Analysis events recording completed computations.
//!
//! Event records built from analysis results. They carry summarized
//! payloads, an identifier for deduplication, and the completion time, so a
//! calling application can publish or audit them without re-deriving the
//! numbers.

use serde::{Deserialize, Serialize};

use super::optimizer::OptimizationOutcome;
use super::validator::ValidationMetrics;
use crate::domain::foundation::{EventId, Timestamp};

/// Recorded when the force optimizer finishes a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcesOptimized {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The committed optimal force vector.
    pub optimal_forces: Vec<f64>,
    /// Cumulative strategic state achieved.
    pub objective_value: f64,
    /// Whether the solver reached its tolerance.
    pub converged: bool,
    /// When the optimization completed.
    pub computed_at: Timestamp,
}

impl ForcesOptimized {
    /// Builds the event from an optimization outcome.
    pub fn from_outcome(outcome: &OptimizationOutcome) -> Self {
        Self {
            event_id: EventId::new(),
            optimal_forces: outcome.optimal_forces.clone(),
            objective_value: outcome.objective_value,
            converged: outcome.converged,
            computed_at: outcome.computed_at,
        }
    }
}

/// Recorded when a validation run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelValidated {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// Number of time steps compared.
    pub horizon: usize,
    /// The computed fit metrics.
    pub metrics: ValidationMetrics,
    /// When the validation completed.
    pub validated_at: Timestamp,
}

impl ModelValidated {
    /// Builds the event from freshly computed metrics.
    pub fn new(horizon: usize, metrics: ValidationMetrics) -> Self {
        Self {
            event_id: EventId::new(),
            horizon,
            metrics,
            validated_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_optimized_copies_the_outcome() {
        let outcome = OptimizationOutcome {
            optimal_forces: vec![0.0, 0.25],
            objective_value: 40.5,
            iterations: 12,
            converged: true,
            computed_at: Timestamp::now(),
        };

        let event = ForcesOptimized::from_outcome(&outcome);
        assert_eq!(event.optimal_forces, outcome.optimal_forces);
        assert_eq!(event.objective_value, outcome.objective_value);
        assert!(event.converged);
        assert_eq!(event.computed_at, outcome.computed_at);
    }

    #[test]
    fn forces_optimized_serialization_round_trip() {
        let event = ForcesOptimized {
            event_id: EventId::from_string("evt-opt-1"),
            optimal_forces: vec![0.1, 0.2],
            objective_value: 12.5,
            converged: false,
            computed_at: Timestamp::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let restored: ForcesOptimized = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }

    #[test]
    fn model_validated_captures_metrics() {
        let metrics = ValidationMetrics {
            rmse: 0.5,
            mae: 0.4,
            r_squared: 0.9,
        };

        let event = ModelValidated::new(3, metrics);
        assert_eq!(event.horizon, 3);
        assert_eq!(event.metrics, metrics);
    }

    #[test]
    fn model_validated_serialization_round_trip() {
        let event = ModelValidated::new(
            3,
            ValidationMetrics {
                rmse: 0.0,
                mae: 0.0,
                r_squared: 1.0,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        let restored: ModelValidated = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}
