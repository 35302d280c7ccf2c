//! Electromagnetic device models.
//!
//! This module contains models for wound electromagnetic devices such as
//! solenoids.

pub mod solenoid;
