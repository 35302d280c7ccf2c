use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{Area, ElectricCurrent, ElectricPotential, ElectricalResistance, Length},
    length::meter,
};

use crate::support::{
    constraint::{NonNegative, NonZero, StrictlyPositive},
    units::ElectricalResistivity,
};

use super::{DomainError, Stage};

/// Calculates the cross-sectional area of a round wire, `π·(d/2)²`.
///
/// # Errors
///
/// Returns a [`DomainError`] if `wire_diameter` is not strictly positive.
pub fn wire_cross_section(wire_diameter: Length) -> Result<Area, DomainError> {
    let diameter = DomainError::require::<StrictlyPositive>(
        Stage::Resistance,
        "wire diameter",
        wire_diameter.get::<meter>(),
    )?;

    let radius = diameter / 2.0;
    Ok(Area::new::<square_meter>(PI * radius * radius))
}

/// Calculates the DC resistance of a wire, `R = L·ρ / A`.
///
/// # Errors
///
/// Returns a [`DomainError`] if `wire_diameter` or `wire_resistivity` is not
/// strictly positive, or `wire_length` is negative.
pub fn wire_resistance(
    wire_length: Length,
    wire_diameter: Length,
    wire_resistivity: ElectricalResistivity,
) -> Result<ElectricalResistance, DomainError> {
    DomainError::require::<NonNegative>(Stage::Resistance, "wire length", wire_length.get::<meter>())?;
    DomainError::require::<StrictlyPositive>(
        Stage::Resistance,
        "wire resistivity",
        wire_resistivity.value,
    )?;
    let area = wire_cross_section(wire_diameter)?;

    let resistance: ElectricalResistance = wire_length * wire_resistivity / area;

    DomainError::ensure_finite(Stage::Resistance, "wire resistance", resistance.get::<ohm>())?;
    Ok(resistance)
}

/// Calculates the current driven through a resistance by a voltage (Ohm's law).
///
/// # Errors
///
/// Returns a [`DomainError`] if `wire_resistance` is zero or `voltage` is not finite.
pub fn current(
    voltage: ElectricPotential,
    wire_resistance: ElectricalResistance,
) -> Result<ElectricCurrent, DomainError> {
    DomainError::require::<NonZero>(Stage::Current, "wire resistance", wire_resistance.get::<ohm>())?;
    DomainError::ensure_finite(Stage::Current, "voltage", voltage.get::<volt>())?;

    let current: ElectricCurrent = voltage / wire_resistance;

    DomainError::ensure_finite(Stage::Current, "current", current.get::<ampere>())?;
    Ok(current)
}
