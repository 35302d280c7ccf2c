//! # Solenoid Models
//!
//! Solenoid models and supporting electromagnetics for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a coil's geometry, wire, core material, and drive voltage, the
//! [`Solenoid`](models::electromagnetic::solenoid::Solenoid) model derives the
//! core's effective permeability, the helical wire length, the wire
//! resistance, the current, and the magnetic field inside the coil.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//! - [`app`]: The `solenoid` command-line front end.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod app;
pub mod models;
pub mod support;
