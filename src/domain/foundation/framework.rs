//! Framework identifiers for the six analysis lenses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six business-analysis frameworks combined by the model.
///
/// Variants are listed in scoring order: macro environment first, then
/// industry structure, internal position, portfolio, growth posture, and
/// market creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Pestel,
    FiveForces,
    Swot,
    Bcg,
    Ansoff,
    BlueOcean,
}

impl Framework {
    /// All frameworks in scoring order.
    pub const ALL: [Framework; 6] = [
        Framework::Pestel,
        Framework::FiveForces,
        Framework::Swot,
        Framework::Bcg,
        Framework::Ansoff,
        Framework::BlueOcean,
    ];

    /// The five ordered pairs whose scores reinforce each other in the
    /// unified equation. Coupling coefficients for any other pair are inert.
    pub const ADJACENT_PAIRS: [(Framework, Framework); 5] = [
        (Framework::Pestel, Framework::FiveForces),
        (Framework::FiveForces, Framework::Swot),
        (Framework::Swot, Framework::Bcg),
        (Framework::Bcg, Framework::Ansoff),
        (Framework::Ansoff, Framework::BlueOcean),
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Pestel => "PESTEL",
            Framework::FiveForces => "Five Forces",
            Framework::Swot => "SWOT",
            Framework::Bcg => "BCG",
            Framework::Ansoff => "Ansoff",
            Framework::BlueOcean => "Blue Ocean",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
