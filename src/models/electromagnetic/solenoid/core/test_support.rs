use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::support::units::ohm_meters;

use super::SolenoidSpec;

/// A 10 cm, 100 turn coil of 1 mm copper wire on a ferrite core, driven at 5 V.
pub(crate) fn copper_coil() -> SolenoidSpec {
    SolenoidSpec {
        coil_length: Length::new::<meter>(0.1),
        coil_radius: Length::new::<meter>(0.01),
        turns: 100.0,
        relative_permeability: Ratio::new::<ratio>(1000.0),
        wire_diameter: Length::new::<meter>(0.001),
        wire_resistivity: ohm_meters(1.68e-8),
        voltage: ElectricPotential::new::<volt>(5.0),
    }
}
