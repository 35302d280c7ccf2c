//! Solenoid electromagnetics toolkit.
//!
//! This module provides the closed-form and numerically integrated relations
//! used to characterize a solenoid from its geometry and materials.
//!
//! # Overview
//!
//! A solenoid is a wire wound helically around a cylindrical former. Given the
//! coil geometry, the wire, the core material, and a drive voltage, the
//! quantities of interest follow in a fixed order:
//!
//! 1. [`effective_permeability`]: core permeability after the demagnetizing
//!    correction for a finite cylinder
//! 2. [`wire_length`]: helical wire length by left Riemann sum
//! 3. [`wire_resistance`] and [`current`]: resistance of the wire and the
//!    resulting DC current
//! 4. [`magnetic_field`]: magnetic flux density inside the coil
//!
//! Every function is pure and reports invalid inputs as a [`DomainError`]
//! naming the [`Stage`] that rejected them.
//!
//! # Example
//!
//! ```
//! use solenoid_models::support::electromagnetic::{
//!     DomainError, Intervals, current, effective_permeability, magnetic_field, wire_length,
//!     wire_resistance,
//! };
//! use solenoid_models::support::units::ohm_meters;
//! use uom::si::{
//!     electric_potential::volt,
//!     f64::{ElectricPotential, Length, Ratio},
//!     length::{meter, millimeter},
//!     magnetic_flux_density::tesla,
//!     ratio::ratio,
//! };
//!
//! fn main() -> Result<(), DomainError> {
//!     let coil_length = Length::new::<meter>(0.1);
//!     let coil_radius = Length::new::<meter>(0.01);
//!     let turns = 100.0;
//!
//!     let mu_eff = effective_permeability(coil_radius, coil_length, Ratio::new::<ratio>(1000.0))?;
//!     let wire = wire_length(coil_length, coil_radius, turns, Intervals::default())?;
//!     let resistance = wire_resistance(wire, Length::new::<millimeter>(1.0), ohm_meters(1.68e-8))?;
//!     let amps = current(ElectricPotential::new::<volt>(5.0), resistance)?;
//!     let field = magnetic_field(mu_eff, turns, coil_length, amps)?;
//!
//!     assert!(field.get::<tesla>() > 0.0);
//!     Ok(())
//! }
//! ```

mod electrical;
mod error;
mod field;
mod permeability;
mod wire_length;

pub use electrical::{current, wire_cross_section, wire_resistance};
pub use error::{DomainError, Stage};
pub use field::magnetic_field;
pub use permeability::{demagnetizing_factor, effective_permeability};
pub use wire_length::{DEFAULT_SAMPLES_PER_TURN, Intervals, wire_length};
