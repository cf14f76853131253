//! Search for the force mix that maximizes cumulative strategic state.

use serde::{Deserialize, Serialize};

use super::model::StrategicModel;
use super::solver::{self, SolverOptions};
use crate::domain::foundation::{ModelError, Timestamp};

/// Result of one optimization run.
///
/// `converged` mirrors the solver's convergence flag; a `false` value is
/// not an error - the best iterate found is still returned and committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    /// The best force vector found, with every element in `[0, 1]`.
    pub optimal_forces: Vec<f64>,
    /// Cumulative strategic state achieved by the optimal forces.
    pub objective_value: f64,
    /// Solver iterations performed.
    pub iterations: usize,
    /// Whether the solver reached its stationarity tolerance.
    pub converged: bool,
    /// When the optimization completed.
    pub computed_at: Timestamp,
}

/// Optimizer over the Five Forces input vector.
pub struct ForceOptimizer;

impl ForceOptimizer {
    /// Maximizes the horizon-summed strategic state over force vectors in
    /// `[0, 1]^M`, holding the influence matrix and the other five framework
    /// snapshots fixed, then commits the optimum as the model's stored Five
    /// Forces state.
    ///
    /// The search starts from the uniform 0.5 vector. Candidates are scored
    /// on transient copies of the model, so the caller's snapshot is only
    /// replaced once, by the returned optimum.
    ///
    /// # Errors
    ///
    /// Fails before the search starts if any framework snapshot is missing
    /// or a stored input cannot be scored (zero denominators).
    pub fn maximize(model: &mut StrategicModel) -> Result<OptimizationOutcome, ModelError> {
        Self::maximize_with(model, &SolverOptions::default())
    }

    /// Same as [`ForceOptimizer::maximize`] with explicit solver options.
    pub fn maximize_with(
        model: &mut StrategicModel,
        options: &SolverOptions,
    ) -> Result<OptimizationOutcome, ModelError> {
        let force_count = model.five_forces()?.force_count();
        let start = vec![0.5; force_count];

        // Surface scoring errors here rather than inside the search loop.
        model.objective_with_forces(&start)?;

        let bounds = vec![(0.0, 1.0); force_count];
        let search = {
            let candidate_model = &*model;
            solver::minimize(
                |candidate| match candidate_model.objective_with_forces(candidate) {
                    Ok(total) => -total,
                    // Unscorable candidates are repelled rather than surfaced.
                    Err(_) => f64::INFINITY,
                },
                &start,
                &bounds,
                options,
            )
        };

        if !search.converged {
            tracing::warn!(
                iterations = search.iterations,
                "force optimization stopped before reaching tolerance; keeping best iterate"
            );
        }

        model.commit_forces(&search.x)?;

        Ok(OptimizationOutcome {
            optimal_forces: search.x,
            objective_value: -search.objective,
            iterations: search.iterations,
            converged: search.converged,
            computed_at: Timestamp::now(),
        })
    }
}
