use uom::si::f64::{ElectricCurrent, ElectricalResistance, Length, MagneticFluxDensity, Ratio};

/// Derived properties of a solenoid, in calculation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolenoidResult {
    /// Effective relative permeability of the finite core.
    pub effective_permeability: Ratio,

    /// Length of the helical winding.
    pub wire_length: Length,

    /// DC resistance of the winding.
    pub wire_resistance: ElectricalResistance,

    /// Current driven by the applied voltage.
    pub current: ElectricCurrent,

    /// Magnetic flux density inside the coil.
    pub magnetic_field: MagneticFluxDensity,
}
