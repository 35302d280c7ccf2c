//! Solenoid calculation pipeline.
//!
//! Runs the stages in dependency order:
//! permeability → wire length → resistance → current → field.
//! The first stage to fail aborts the pipeline and no partial result is returned.

mod input;
mod results;

#[cfg(test)]
pub(crate) mod test_support;

pub use input::SolenoidSpec;
pub use results::SolenoidResult;

use crate::support::electromagnetic::{
    DomainError, Intervals, current, effective_permeability, magnetic_field, wire_length,
    wire_resistance,
};

/// Computes every derived property of a solenoid.
///
/// # Errors
///
/// Returns the [`DomainError`] of the first stage that rejects its inputs.
pub(super) fn solve(spec: &SolenoidSpec, intervals: Intervals) -> Result<SolenoidResult, DomainError> {
    let effective_permeability =
        effective_permeability(spec.coil_radius, spec.coil_length, spec.relative_permeability)?;

    let wire_length = wire_length(spec.coil_length, spec.coil_radius, spec.turns, intervals)?;

    let wire_resistance = wire_resistance(wire_length, spec.wire_diameter, spec.wire_resistivity)?;

    let current = current(spec.voltage, wire_resistance)?;

    let magnetic_field =
        magnetic_field(effective_permeability, spec.turns, spec.coil_length, current)?;

    Ok(SolenoidResult {
        effective_permeability,
        wire_length,
        wire_resistance,
        current,
        magnetic_field,
    })
}
