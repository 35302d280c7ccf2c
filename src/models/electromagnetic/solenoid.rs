//! Solenoid model.
//!
//! This module provides a [`twine_core::Model`] implementation that derives a
//! solenoid's effective permeability, wire length, resistance, current, and
//! magnetic field from a [`SolenoidSpec`].
//! The computational core is in the internal `core` module.

mod core;

pub use self::core::{SolenoidResult, SolenoidSpec};

use twine_core::Model;

use crate::support::electromagnetic::{DomainError, Intervals};

/// Solenoid calculator.
///
/// Holds the integration policy used for the wire length and solves any
/// number of [`SolenoidSpec`]s with it.
///
/// # Example
///
/// ```
/// use solenoid_models::models::electromagnetic::solenoid::{Solenoid, SolenoidSpec};
/// use solenoid_models::support::{electromagnetic::Intervals, units::ohm_meters};
/// use twine_core::Model;
/// use uom::si::{
///     electric_potential::volt,
///     f64::{ElectricPotential, Length, Ratio},
///     length::{centimeter, millimeter},
///     magnetic_flux_density::tesla,
///     ratio::ratio,
/// };
///
/// let spec = SolenoidSpec {
///     coil_length: Length::new::<centimeter>(10.0),
///     coil_radius: Length::new::<centimeter>(1.0),
///     turns: 100.0,
///     relative_permeability: Ratio::new::<ratio>(1000.0),
///     wire_diameter: Length::new::<millimeter>(1.0),
///     wire_resistivity: ohm_meters(1.68e-8),
///     voltage: ElectricPotential::new::<volt>(5.0),
/// };
///
/// let solenoid = Solenoid::new(Intervals::PerTurn(100));
/// let result = solenoid.call(&spec).unwrap();
///
/// assert!(result.magnetic_field.get::<tesla>() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solenoid {
    intervals: Intervals,
}

impl Solenoid {
    /// Creates a solenoid calculator with the given integration policy.
    #[must_use]
    pub fn new(intervals: Intervals) -> Self {
        Self { intervals }
    }

    /// Returns the integration policy used for the wire length.
    #[must_use]
    pub fn intervals(&self) -> Intervals {
        self.intervals
    }

    /// Solves a solenoid.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainError`] of the first calculation stage that rejects
    /// its inputs. No partial result is produced.
    pub fn solve(&self, spec: &SolenoidSpec) -> Result<SolenoidResult, DomainError> {
        self::core::solve(spec, self.intervals)
    }
}

impl Model for Solenoid {
    type Input = SolenoidSpec;
    type Output = SolenoidResult;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
