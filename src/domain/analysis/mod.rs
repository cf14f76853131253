//! Analysis Module - The coupled model, its optimizer, and its validator.
//!
//! # Components
//!
//! - `StrategicModel` - Registry of framework snapshots plus the unified,
//!   time-decaying state equation
//! - `CouplingMap` - Pairwise reinforcement coefficients (default 0.3)
//! - `TemporalDecay` - Precomputed per-step discount factors
//! - `ForceOptimizer` - Box-constrained search over the Five Forces vector
//! - `ModelValidator` - RMSE/MAE/R-squared against observed outcomes
//!
//! # Design Philosophy
//!
//! Everything here is a pure computation over in-memory state. The only
//! mutation is explicit: setters replace snapshots, and the optimizer
//! commits its returned optimum. Candidate evaluation during the search
//! happens on transient copies.

mod coupling;
mod decay;
mod events;
mod model;
mod optimizer;
mod solver;
mod validator;

pub use coupling::{CouplingMap, DEFAULT_COUPLING};
pub use decay::{TemporalDecay, DEFAULT_DECAY_RATE};
pub use events::{ForcesOptimized, ModelValidated};
pub use model::{FrameworkScores, StrategicModel, DEFAULT_TIME_HORIZON};
pub use optimizer::{ForceOptimizer, OptimizationOutcome};
pub use solver::{SolverOptions, SolverOutcome};
pub use validator::{ModelValidator, ValidationMetrics};
