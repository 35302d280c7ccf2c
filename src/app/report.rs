//! Solenoid result reporting.

use serde::Serialize;
use uom::si::{
    electric_current::ampere, electrical_resistance::ohm, length::meter,
    magnetic_flux_density::tesla, ratio::ratio,
};

use crate::models::electromagnetic::solenoid::SolenoidResult;

/// A solenoid result in SI units, in calculation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub effective_permeability: f64,
    pub wire_length: f64,
    pub wire_resistance: f64,
    pub current: f64,
    pub magnetic_field: f64,
}

impl From<&SolenoidResult> for Report {
    fn from(result: &SolenoidResult) -> Self {
        Self {
            effective_permeability: result.effective_permeability.get::<ratio>(),
            wire_length: result.wire_length.get::<meter>(),
            wire_resistance: result.wire_resistance.get::<ohm>(),
            current: result.current.get::<ampere>(),
            magnetic_field: result.magnetic_field.get::<tesla>(),
        }
    }
}

/// Formats a result as human-readable lines.
#[must_use]
pub fn format_text(result: &SolenoidResult) -> String {
    let report = Report::from(result);
    [
        format!("Effective permeability: {} N·A⁻²", report.effective_permeability),
        format!("Wire length: {} m", report.wire_length),
        format!("Wire resistance: {} Ω", report.wire_resistance),
        format!("Current: {} A", report.current),
        format!("Magnetic field: {} T", report.magnetic_field),
    ]
    .join("\n")
}

/// Formats a result as a pretty-printed JSON object.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn format_json(result: &SolenoidResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report::from(result))
}
