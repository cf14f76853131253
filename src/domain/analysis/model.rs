//! The coupled strategic model and its unified equation.

use serde::{Deserialize, Serialize};

use super::coupling::CouplingMap;
use super::decay::{TemporalDecay, DEFAULT_DECAY_RATE};
use crate::config::ModelConfig;
use crate::domain::foundation::{Framework, ModelError};
use crate::domain::frameworks::{
    AnsoffInputs, BcgInputs, BlueOceanInputs, FiveForcesInputs, PestelInputs, SwotInputs,
};

/// Default number of time steps in the planning horizon.
pub const DEFAULT_TIME_HORIZON: usize = 3;

/// The six operator outputs for one model evaluation, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameworkScores {
    pub pestel: f64,
    pub five_forces: f64,
    pub swot: f64,
    pub bcg: f64,
    pub ansoff: f64,
    pub blue_ocean: f64,
}

impl FrameworkScores {
    /// Returns the score for a framework.
    pub fn of(&self, framework: Framework) -> f64 {
        match framework {
            Framework::Pestel => self.pestel,
            Framework::FiveForces => self.five_forces,
            Framework::Swot => self.swot,
            Framework::Bcg => self.bcg,
            Framework::Ansoff => self.ansoff,
            Framework::BlueOcean => self.blue_ocean,
        }
    }

    /// Sum of the six scores before any coupling terms.
    pub fn direct_sum(&self) -> f64 {
        Framework::ALL.iter().map(|&f| self.of(f)).sum()
    }
}

/// Owner of the six framework snapshots, the coupling map, and the decay
/// schedule.
///
/// Each setter overwrites the previous snapshot for its framework; no
/// history is retained. The model is `Clone` so the optimizer can evaluate
/// candidates on transient copies, and it is not internally synchronized -
/// sharing one instance across threads requires external mutual exclusion.
#[derive(Debug, Clone)]
pub struct StrategicModel {
    pestel: Option<PestelInputs>,
    five_forces: Option<FiveForcesInputs>,
    swot: Option<SwotInputs>,
    bcg: Option<BcgInputs>,
    ansoff: Option<AnsoffInputs>,
    blue_ocean: Option<BlueOceanInputs>,
    coupling: CouplingMap,
    decay: TemporalDecay,
}

impl StrategicModel {
    /// Creates a model with the given horizon and the default decay rate.
    pub fn new(time_horizon: usize) -> Self {
        Self::with_decay_rate(time_horizon, DEFAULT_DECAY_RATE)
    }

    /// Creates a model with an explicit decay rate.
    pub fn with_decay_rate(time_horizon: usize, decay_rate: f64) -> Self {
        Self {
            pestel: None,
            five_forces: None,
            swot: None,
            bcg: None,
            ansoff: None,
            blue_ocean: None,
            coupling: CouplingMap::new(),
            decay: TemporalDecay::new(time_horizon, decay_rate),
        }
    }

    /// Creates a model from loaded configuration.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::with_decay_rate(config.horizon.time_horizon, config.horizon.decay_rate)
    }

    /// Returns the number of time steps in the horizon.
    pub fn time_horizon(&self) -> usize {
        self.decay.horizon()
    }

    /// Replaces the stored PESTEL snapshot.
    pub fn set_pestel(&mut self, inputs: PestelInputs) {
        self.pestel = Some(inputs);
    }

    /// Replaces the stored Five Forces snapshot.
    pub fn set_five_forces(&mut self, inputs: FiveForcesInputs) {
        self.five_forces = Some(inputs);
    }

    /// Replaces the stored SWOT snapshot.
    pub fn set_swot(&mut self, inputs: SwotInputs) {
        self.swot = Some(inputs);
    }

    /// Replaces the stored BCG snapshot.
    pub fn set_bcg(&mut self, inputs: BcgInputs) {
        self.bcg = Some(inputs);
    }

    /// Replaces the stored Ansoff snapshot.
    pub fn set_ansoff(&mut self, inputs: AnsoffInputs) {
        self.ansoff = Some(inputs);
    }

    /// Replaces the stored Blue Ocean snapshot.
    pub fn set_blue_ocean(&mut self, inputs: BlueOceanInputs) {
        self.blue_ocean = Some(inputs);
    }

    /// Sets the coupling coefficient for an ordered framework pair.
    pub fn set_coupling(&mut self, from: Framework, to: Framework, coefficient: f64) {
        self.coupling.set(from, to, coefficient);
    }

    /// Returns the coupling map.
    pub fn coupling(&self) -> &CouplingMap {
        &self.coupling
    }

    /// Returns the stored Five Forces snapshot.
    pub fn five_forces(&self) -> Result<&FiveForcesInputs, ModelError> {
        self.five_forces
            .as_ref()
            .ok_or(ModelError::missing_input(Framework::FiveForces))
    }

    /// Scores all six frameworks in scoring order.
    pub fn framework_scores(&self) -> Result<FrameworkScores, ModelError> {
        let pestel = self
            .pestel
            .as_ref()
            .ok_or(ModelError::missing_input(Framework::Pestel))?
            .score();
        let five_forces = self.five_forces()?.score()?;
        let swot = self
            .swot
            .as_ref()
            .ok_or(ModelError::missing_input(Framework::Swot))?
            .score()?;
        let bcg = self
            .bcg
            .as_ref()
            .ok_or(ModelError::missing_input(Framework::Bcg))?
            .score()?;
        let ansoff = self
            .ansoff
            .as_ref()
            .ok_or(ModelError::missing_input(Framework::Ansoff))?
            .score()?;
        let blue_ocean = self
            .blue_ocean
            .as_ref()
            .ok_or(ModelError::missing_input(Framework::BlueOcean))?
            .score()?;

        Ok(FrameworkScores {
            pestel,
            five_forces,
            swot,
            bcg,
            ansoff,
            blue_ocean,
        })
    }

    /// Combined strategic state before temporal discounting: the six scores
    /// plus the adjacent-pair coupling terms.
    pub fn strategic_state(&self) -> Result<f64, ModelError> {
        let scores = self.framework_scores()?;
        Ok(scores.direct_sum() + self.coupling.pairwise_effect(&scores))
    }

    /// Strategic state at one time step, discounted by the decay schedule.
    pub fn state_at(&self, step: usize) -> Result<f64, ModelError> {
        let factor = self
            .decay
            .factor(step)
            .ok_or(ModelError::StepOutOfHorizon {
                step,
                horizon: self.decay.horizon(),
            })?;
        Ok(self.strategic_state()? * factor)
    }

    /// Predicted state series across the whole horizon.
    pub fn predicted_series(&self) -> Result<Vec<f64>, ModelError> {
        (0..self.time_horizon())
            .map(|step| self.state_at(step))
            .collect()
    }

    /// Sum of the state series across the horizon.
    pub fn horizon_total(&self) -> Result<f64, ModelError> {
        Ok(self.predicted_series()?.iter().sum())
    }

    /// Evaluates the cumulative objective with a candidate force vector
    /// substituted into a transient copy of the model. The stored Five
    /// Forces snapshot is left untouched.
    pub(crate) fn objective_with_forces(&self, candidate: &[f64]) -> Result<f64, ModelError> {
        let replaced = self
            .five_forces()?
            .with_forces(ndarray::Array1::from(candidate.to_vec()))?;
        let mut scratch = self.clone();
        scratch.five_forces = Some(replaced);
        scratch.horizon_total()
    }

    /// Commits a force vector as the stored Five Forces snapshot, keeping
    /// the influence matrix.
    pub(crate) fn commit_forces(&mut self, forces: &[f64]) -> Result<(), ModelError> {
        let committed = self
            .five_forces()?
            .with_forces(ndarray::Array1::from(forces.to_vec()))?;
        self.five_forces = Some(committed);
        Ok(())
    }
}

impl Default for StrategicModel {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_HORIZON)
    }
}
