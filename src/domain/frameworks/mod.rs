//! Frameworks Module - Typed input sets and scoring operators.
//!
//! One module per analysis framework. Each input set validates its shape at
//! construction and exposes a pure `score` operator; the model stores one
//! snapshot per framework and overwrites it on every setter call.

mod ansoff;
mod bcg;
mod blue_ocean;
mod five_forces;
mod pestel;
mod swot;

pub use ansoff::AnsoffInputs;
pub use bcg::BcgInputs;
pub use blue_ocean::BlueOceanInputs;
pub use five_forces::FiveForcesInputs;
pub use pestel::PestelInputs;
pub use swot::SwotInputs;

use crate::domain::foundation::ModelError;

/// Rejects a parallel sequence whose length differs from its group.
pub(crate) fn check_len(
    context: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ModelError> {
    if actual != expected {
        return Err(ModelError::shape_mismatch(context, expected, actual));
    }
    Ok(())
}
