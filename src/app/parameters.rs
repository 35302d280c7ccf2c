//! Solenoid parameter records.
//!
//! A parameter record is a JSON object with one numeric field per
//! [`SolenoidSpec`] input, named as in [`REQUIRED_FIELDS`]:
//!
//! ```json
//! {
//!   "coilLength": 0.1,
//!   "coilRadius": 0.01,
//!   "numTurns": 100,
//!   "relativePermeability": 1000,
//!   "wireDiameter": 0.001,
//!   "wireResistivity": 1.68e-8,
//!   "voltage": 5
//! }
//! ```
//!
//! Values are in SI units. Unknown fields are ignored.

use std::{io, path::Path};

use serde_json::{Map, Value};
use thiserror::Error;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::models::electromagnetic::solenoid::SolenoidSpec;
use crate::support::units::ohm_meters;

/// Required record fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "coilLength",
    "coilRadius",
    "numTurns",
    "relativePermeability",
    "wireDiameter",
    "wireResistivity",
    "voltage",
];

/// Errors that can occur while reading a parameter record.
#[derive(Debug, Error)]
pub enum InputError {
    /// The parameter source could not be read.
    #[error("failed to read parameters from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The parameter source is not valid JSON.
    #[error("invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The record is not a JSON object.
    #[error("parameters must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A required field is present but not a number.
    #[error("field '{0}' must be a number")]
    NotANumber(&'static str),
}

/// Reads a parameter record from a file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an [`InputError`] if the source cannot be read or the record is invalid.
pub fn read_parameters(path: &Path) -> Result<SolenoidSpec, InputError> {
    let io_error = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };

    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin()).map_err(io_error)?
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    parse_parameters(&text)
}

/// Parses a parameter record from JSON text.
///
/// # Errors
///
/// Returns an [`InputError`] if the text is not JSON or the record is invalid.
pub fn parse_parameters(text: &str) -> Result<SolenoidSpec, InputError> {
    let value: Value = serde_json::from_str(text)?;
    spec_from_record(&value)
}

/// Builds a [`SolenoidSpec`] from a parameter record.
///
/// Every name in [`REQUIRED_FIELDS`] is checked for presence before any
/// value is interpreted, so the first missing field in schema order is
/// reported even when other fields are malformed.
///
/// # Errors
///
/// Returns [`InputError::MissingField`] for the first absent field,
/// [`InputError::NotANumber`] for the first non-numeric field, or
/// [`InputError::NotAnObject`] if the record is not an object.
pub fn spec_from_record(record: &Value) -> Result<SolenoidSpec, InputError> {
    let record = record.as_object().ok_or(InputError::NotAnObject)?;

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|name| !record.contains_key(*name))
    {
        return Err(InputError::MissingField(missing));
    }

    let [
        coil_length,
        coil_radius,
        turns,
        relative_permeability,
        wire_diameter,
        wire_resistivity,
        voltage,
    ] = REQUIRED_FIELDS;

    Ok(SolenoidSpec {
        coil_length: Length::new::<meter>(number(record, coil_length)?),
        coil_radius: Length::new::<meter>(number(record, coil_radius)?),
        turns: number(record, turns)?,
        relative_permeability: Ratio::new::<ratio>(number(record, relative_permeability)?),
        wire_diameter: Length::new::<meter>(number(record, wire_diameter)?),
        wire_resistivity: ohm_meters(number(record, wire_resistivity)?),
        voltage: ElectricPotential::new::<volt>(number(record, voltage)?),
    })
}

fn number(record: &Map<String, Value>, name: &'static str) -> Result<f64, InputError> {
    record
        .get(name)
        .and_then(Value::as_f64)
        .ok_or(InputError::NotANumber(name))
}
