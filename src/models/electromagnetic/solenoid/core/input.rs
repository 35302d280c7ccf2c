use uom::si::f64::{ElectricPotential, Length, Ratio};

use crate::support::units::ElectricalResistivity;

/// Geometric, material, and electrical parameters of a solenoid.
///
/// Values are only required to be present; each calculation stage enforces
/// the domain of the fields it consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolenoidSpec {
    /// Axial length of the coil, which is also the core length.
    pub coil_length: Length,

    /// Radius of the former the wire is wound on.
    pub coil_radius: Length,

    /// Number of turns, possibly fractional for a partial final turn.
    pub turns: f64,

    /// Bulk relative permeability of the core material.
    pub relative_permeability: Ratio,

    /// Diameter of the wire.
    pub wire_diameter: Length,

    /// Resistivity of the wire material.
    pub wire_resistivity: ElectricalResistivity,

    /// Voltage applied across the winding.
    pub voltage: ElectricPotential,
}
