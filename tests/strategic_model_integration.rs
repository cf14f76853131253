//! Integration tests for the coupled strategic model.
//!
//! These tests verify the end-to-end flow:
//! 1. Framework input sets are supplied to a model
//! 2. The unified equation combines the six scores, coupling, and decay
//! 3. The optimizer finds and commits a feasible force vector
//! 4. The validator scores predictions against observed outcomes

use ndarray::array;

use strategy_compass::config::ModelConfig;
use strategy_compass::domain::analysis::{
    ForceOptimizer, ForcesOptimized, ModelValidated, ModelValidator, StrategicModel,
};
use strategy_compass::domain::foundation::{Framework, ModelError};
use strategy_compass::domain::frameworks::{
    AnsoffInputs, BcgInputs, BlueOceanInputs, FiveForcesInputs, PestelInputs, SwotInputs,
};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
        .ok();
}

/// The reference scenario: two PESTEL factors, two coupled forces, a 2x1
/// SWOT interaction, and single-entry portfolios over a three-step horizon.
fn reference_model() -> StrategicModel {
    let mut model = StrategicModel::new(3);
    model.set_pestel(
        PestelInputs::new(
            vec!["Political", "Economic"],
            array![0.6, 0.4],
            array![0.5, 0.5],
            array![10.0, 20.0],
        )
        .unwrap(),
    );
    model.set_five_forces(
        FiveForcesInputs::new(array![0.2, 0.3], array![[0.0, 1.0], [1.0, 0.0]]).unwrap(),
    );
    model.set_swot(SwotInputs::new(
        vec!["Strength A", "Strength B"],
        vec!["Opportunity"],
        array![[2.0], [2.0]],
    ));
    model.set_bcg(BcgInputs::new(array![0.5], array![0.2]).unwrap());
    model.set_ansoff(AnsoffInputs::new(array![0.7], array![0.1]).unwrap());
    model.set_blue_ocean(BlueOceanInputs::new(array![0.8], array![0.4]).unwrap());
    model
}

// =============================================================================
// Unified equation
// =============================================================================

#[test]
fn reference_state_matches_hand_evaluation() {
    // Scores: pestel 7.0, forces 0.75, swot 2.0, bcg 0.1, ansoff 0.6,
    // blue ocean 2.0. Coupling at the 0.3 default over adjacent pairs:
    // 0.3 * (5.25 + 1.5 + 0.2 + 0.06 + 1.2) = 2.463. State: 14.913.
    let model = reference_model();
    assert!((model.state_at(0).unwrap() - 14.913).abs() < 1e-9);
}

#[test]
fn later_steps_decay_exponentially() {
    let model = reference_model();
    let undiscounted = model.state_at(0).unwrap();
    assert!((model.state_at(1).unwrap() - undiscounted * (-0.1f64).exp()).abs() < 1e-9);
    assert!((model.state_at(2).unwrap() - undiscounted * (-0.2f64).exp()).abs() < 1e-9);
}

#[test]
fn steps_past_the_horizon_are_rejected() {
    let model = reference_model();
    assert_eq!(
        model.state_at(7).unwrap_err(),
        ModelError::StepOutOfHorizon { step: 7, horizon: 3 }
    );
}

#[test]
fn unset_coupling_matches_explicit_default() {
    let implicit = reference_model();
    let mut explicit = reference_model();
    explicit.set_coupling(Framework::Pestel, Framework::FiveForces, 0.3);

    assert_eq!(
        implicit.state_at(0).unwrap(),
        explicit.state_at(0).unwrap()
    );
}

#[test]
fn stronger_coupling_amplifies_positive_scores() {
    let mut model = reference_model();
    let baseline = model.state_at(0).unwrap();
    model.set_coupling(Framework::Pestel, Framework::FiveForces, 0.9);

    assert!(model.state_at(0).unwrap() > baseline);
}

#[test]
fn operators_require_their_inputs() {
    let model = StrategicModel::new(3);
    assert_eq!(
        model.state_at(0).unwrap_err(),
        ModelError::missing_input(Framework::Pestel)
    );
}

// =============================================================================
// Optimizer
// =============================================================================

#[test]
fn optimizer_returns_feasible_committed_optimum() {
    init_tracing();
    let mut model = reference_model();
    let start_objective = {
        let mut probe = reference_model();
        probe
            .set_five_forces(FiveForcesInputs::new(array![0.5, 0.5], array![[0.0, 1.0], [1.0, 0.0]]).unwrap());
        probe.horizon_total().unwrap()
    };

    let outcome = ForceOptimizer::maximize(&mut model).unwrap();

    for force in &outcome.optimal_forces {
        assert!(*force >= 0.0 && *force <= 1.0);
    }
    assert!(outcome.objective_value >= start_objective);

    // The returned optimum, not the solver's last probe, is the stored state.
    assert!((model.horizon_total().unwrap() - outcome.objective_value).abs() < 1e-9);
}

#[test]
fn optimizer_honours_configured_solver_options() {
    let config = ModelConfig::default();
    let mut model = reference_model();
    let outcome =
        ForceOptimizer::maximize_with(&mut model, &config.optimizer.solver_options()).unwrap();

    assert!(outcome.iterations <= config.optimizer.max_iterations);
}

#[test]
fn optimization_outcome_feeds_the_event_record() {
    let mut model = reference_model();
    let outcome = ForceOptimizer::maximize(&mut model).unwrap();

    let event = ForcesOptimized::from_outcome(&outcome);
    assert_eq!(event.optimal_forces, outcome.optimal_forces);

    let json = serde_json::to_string(&event).unwrap();
    let restored: ForcesOptimized = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, event);
}

// =============================================================================
// Validator
// =============================================================================

#[test]
fn validating_against_own_predictions_is_exact() {
    let model = reference_model();
    let actual = model.predicted_series().unwrap();
    let metrics = ModelValidator::validate(&model, &actual).unwrap();

    assert!(metrics.rmse.abs() < 1e-12);
    assert!(metrics.mae.abs() < 1e-12);
    assert!((metrics.r_squared - 1.0).abs() < 1e-12);
}

#[test]
fn constant_observed_outcomes_cannot_be_scored() {
    let model = reference_model();
    assert_eq!(
        ModelValidator::validate(&model, &[2.0, 2.0, 2.0]).unwrap_err(),
        ModelError::division_by_zero("coefficient of determination")
    );
}

#[test]
fn validation_metrics_feed_the_event_record() {
    let model = reference_model();
    let actual = model.predicted_series().unwrap();
    let metrics = ModelValidator::validate(&model, &actual).unwrap();

    let event = ModelValidated::new(model.time_horizon(), metrics);
    assert_eq!(event.horizon, 3);
    assert!((event.metrics.r_squared - 1.0).abs() < 1e-12);
}

// =============================================================================
// Boundary cases
// =============================================================================

#[test]
fn empty_swot_factor_lists_divide_by_zero() {
    let mut model = reference_model();
    model.set_swot(SwotInputs::new(
        Vec::<String>::new(),
        Vec::<String>::new(),
        ndarray::Array2::zeros((0, 0)),
    ));

    assert_eq!(
        model.state_at(0).unwrap_err(),
        ModelError::division_by_zero("SWOT effectiveness")
    );
}

#[test]
fn zero_cost_leadership_entry_divides_by_zero() {
    let mut model = reference_model();
    model.set_blue_ocean(BlueOceanInputs::new(array![0.8, 0.9], array![0.4, 0.0]).unwrap());

    assert_eq!(
        model.state_at(0).unwrap_err(),
        ModelError::division_by_zero("Blue Ocean value ratio")
    );
}
