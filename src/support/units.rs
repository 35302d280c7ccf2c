//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, resistance, magnetic flux density).
//! This module provides the quantities and constants solenoid modeling needs that aren't
//! provided by [`uom`] in a convenient form.
//!
//! ## Electrical resistivity
//!
//! Wire resistivity is carried as an [`ElectricalResistivity`] in ohm-meters:
//!
//! ```
//! use solenoid_models::support::units::ohm_meters;
//!
//! let copper = ohm_meters(1.68e-8);
//! assert_eq!(copper.value, 1.68e-8);
//! ```
//!
//! ## Vacuum permeability
//!
//! [`VACUUM_PERMEABILITY`] is `MU_0 = 4π×10⁻⁷ N·A⁻²`.

mod quantities;

pub use quantities::{ElectricalResistivity, MagneticPermeability, VACUUM_PERMEABILITY, ohm_meters};
