use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, Length, MagneticFluxDensity, Ratio},
    length::meter,
    magnetic_flux_density::tesla,
    ratio::ratio,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::VACUUM_PERMEABILITY,
};

use super::{DomainError, Stage};

/// Calculates the magnetic flux density inside a long solenoid.
///
/// `B = μ0 · μeff · N / L · I`, where `μeff` is the effective relative
/// permeability of the core.
///
/// # Errors
///
/// Returns a [`DomainError`] if `length` is not strictly positive or `turns`
/// is negative.
pub fn magnetic_field(
    effective_permeability: Ratio,
    turns: f64,
    length: Length,
    current: ElectricCurrent,
) -> Result<MagneticFluxDensity, DomainError> {
    DomainError::require::<StrictlyPositive>(Stage::Field, "length", length.get::<meter>())?;
    let turns = DomainError::require::<NonNegative>(Stage::Field, "turns", turns)?;
    DomainError::ensure_finite(Stage::Field, "current", current.get::<ampere>())?;

    let mu_eff = effective_permeability.get::<ratio>();
    let field: MagneticFluxDensity = VACUUM_PERMEABILITY * (mu_eff * turns) / length * current;

    DomainError::ensure_finite(Stage::Field, "magnetic field", field.get::<tesla>())?;
    Ok(field)
}
