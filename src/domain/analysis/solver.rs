//! Box-constrained minimization by projected gradient descent.
//!
//! Gradients are estimated with central finite differences and every iterate
//! is projected back into its bounds, so the objective only needs to be a
//! plain `FnMut(&[f64]) -> f64`. Step sizes adapt through a backtracking
//! (Armijo) line search along the projected path. The solver always reports
//! its best iterate; `converged` records whether the stationarity tolerance
//! was reached within the iteration budget.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`minimize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Maximum number of outer iterations.
    pub max_iterations: usize,
    /// Stationarity tolerance on the projected gradient (infinity norm).
    pub tolerance: f64,
    /// Relative step used for finite-difference gradients.
    pub gradient_step: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-8,
            gradient_step: 1e-6,
        }
    }
}

/// Result of one [`minimize`] run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOutcome {
    /// Best iterate found, inside the bounds.
    pub x: Vec<f64>,
    /// Objective value at the best iterate.
    pub objective: f64,
    /// Outer iterations performed.
    pub iterations: usize,
    /// Whether the stationarity tolerance was reached.
    pub converged: bool,
}

/// Minimizes `objective` over the box `bounds`, starting from `start`.
///
/// The start point is projected into the bounds before the first
/// evaluation. Iteration stops when the projected gradient drops below the
/// tolerance or the iteration budget is exhausted; in either case the best
/// iterate seen is returned.
pub fn minimize<F>(
    mut objective: F,
    start: &[f64],
    bounds: &[(f64, f64)],
    options: &SolverOptions,
) -> SolverOutcome
where
    F: FnMut(&[f64]) -> f64,
{
    let mut x = project(start, bounds);
    let mut fx = objective(&x);
    let mut best_x = x.clone();
    let mut best_f = fx;
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..options.max_iterations {
        iterations += 1;

        let gradient = finite_difference_gradient(&mut objective, &x, options.gradient_step);
        if stationarity(&x, &gradient, bounds) <= options.tolerance {
            converged = true;
            break;
        }

        // Backtracking along the projected steepest-descent path.
        let mut step = 1.0;
        let mut moved = false;
        for _ in 0..60 {
            let candidate = project_step(&x, &gradient, step, bounds);
            let displacement = squared_distance(&x, &candidate);
            if displacement == 0.0 {
                break;
            }
            let fc = objective(&candidate);
            if fc <= fx - 1e-4 * displacement / step {
                x = candidate;
                fx = fc;
                moved = true;
                break;
            }
            step *= 0.5;
        }

        if fx < best_f {
            best_x = x.clone();
            best_f = fx;
        }

        if !moved {
            // No admissible step remains at this scale; treat as stationary.
            converged = stationarity(&x, &gradient, bounds) <= options.tolerance.max(1e-6);
            break;
        }
    }

    tracing::debug!(
        iterations,
        converged,
        objective = best_f,
        "bounded minimization finished"
    );

    SolverOutcome {
        x: best_x,
        objective: best_f,
        iterations,
        converged,
    }
}

fn clamp(value: f64, (lower, upper): (f64, f64)) -> f64 {
    value.max(lower).min(upper)
}

fn project(x: &[f64], bounds: &[(f64, f64)]) -> Vec<f64> {
    x.iter()
        .zip(bounds)
        .map(|(&value, &bound)| clamp(value, bound))
        .collect()
}

fn project_step(x: &[f64], gradient: &[f64], step: f64, bounds: &[(f64, f64)]) -> Vec<f64> {
    x.iter()
        .zip(gradient)
        .zip(bounds)
        .map(|((&value, &slope), &bound)| clamp(value - step * slope, bound))
        .collect()
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(&p, &q)| (p - q) * (p - q)).sum()
}

/// Infinity norm of `x - project(x - gradient)`; zero exactly at a
/// constrained stationary point.
fn stationarity(x: &[f64], gradient: &[f64], bounds: &[(f64, f64)]) -> f64 {
    x.iter()
        .zip(gradient)
        .zip(bounds)
        .map(|((&value, &slope), &bound)| (value - clamp(value - slope, bound)).abs())
        .fold(0.0, f64::max)
}

fn finite_difference_gradient<F>(objective: &mut F, x: &[f64], relative_step: f64) -> Vec<f64>
where
    F: FnMut(&[f64]) -> f64,
{
    let mut probe = x.to_vec();
    let mut gradient = vec![0.0; x.len()];
    for i in 0..x.len() {
        let h = relative_step * (1.0 + x[i].abs());
        probe[i] = x[i] + h;
        let forward = objective(&probe);
        probe[i] = x[i] - h;
        let backward = objective(&probe);
        probe[i] = x[i];
        gradient[i] = (forward - backward) / (2.0 * h);
    }
    gradient
}
