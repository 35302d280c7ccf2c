//! Top-level application orchestration.
//!
//! `src/main.rs` is a thin wrapper around [`run`], which:
//! - parses CLI arguments
//! - reads and validates the parameter record
//! - solves the solenoid
//! - prints the report
//!
//! Either every derived quantity is reported or none is.

use std::path::Path;

use clap::Parser;

use crate::models::electromagnetic::solenoid::{Solenoid, SolenoidSpec};
use crate::support::electromagnetic::Intervals;

pub mod cli;
mod error;
pub mod parameters;
pub mod report;

pub use cli::{Cli, OutputFormat};
pub use error::AppError;

/// Entry point for the `solenoid` binary.
///
/// # Errors
///
/// Returns an [`AppError`] if the parameters are invalid or a calculation
/// stage fails.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let output = execute(&cli.params, cli.intervals(), cli.format)?;
    println!("{output}");
    Ok(())
}

/// Reads parameters from `params` and renders the solved report.
///
/// # Errors
///
/// Returns an [`AppError`] if the parameters are invalid or a calculation
/// stage fails.
pub fn execute(params: &Path, intervals: Intervals, format: OutputFormat) -> Result<String, AppError> {
    let spec = parameters::read_parameters(params)?;
    render(&spec, intervals, format)
}

/// Parses a JSON parameter record and renders the solved report.
///
/// # Errors
///
/// Returns an [`AppError`] if the parameters are invalid or a calculation
/// stage fails.
pub fn execute_str(
    params: &str,
    intervals: Intervals,
    format: OutputFormat,
) -> Result<String, AppError> {
    let spec = parameters::parse_parameters(params)?;
    render(&spec, intervals, format)
}

fn render(spec: &SolenoidSpec, intervals: Intervals, format: OutputFormat) -> Result<String, AppError> {
    let result = Solenoid::new(intervals).solve(spec)?;

    match format {
        OutputFormat::Text => Ok(report::format_text(&result)),
        OutputFormat::Json => report::format_json(&result).map_err(AppError::Output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use serde_json::Value;

    use crate::support::electromagnetic::{DomainError, Stage};

    use super::parameters::InputError;

    const COPPER_COIL: &str = r#"{
        "coilLength": 0.1,
        "coilRadius": 0.01,
        "numTurns": 100,
        "relativePermeability": 1000,
        "wireDiameter": 0.001,
        "wireResistivity": 1.68e-8,
        "voltage": 5
    }"#;

    #[test]
    fn text_report_has_five_lines() {
        let output = execute_str(COPPER_COIL, Intervals::default(), OutputFormat::Text).unwrap();

        let labels: Vec<&str> = output
            .lines()
            .map(|line| line.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            labels,
            [
                "Effective permeability",
                "Wire length",
                "Wire resistance",
                "Current",
                "Magnetic field"
            ]
        );
    }

    #[test]
    fn json_report_values_are_positive_and_finite() {
        let output = execute_str(COPPER_COIL, Intervals::default(), OutputFormat::Json).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        for key in [
            "effectivePermeability",
            "wireLength",
            "wireResistance",
            "current",
            "magneticField",
        ] {
            let value = json[key].as_f64().unwrap();
            assert!(value.is_finite() && value > 0.0, "{key} = {value}");
        }

        let mu_eff = json["effectivePermeability"].as_f64().unwrap();
        assert!(mu_eff > 1.0 && mu_eff < 1000.0);
        assert_relative_eq!(json["wireLength"].as_f64().unwrap(), 6.283_981, epsilon = 1e-6);
    }

    #[test]
    fn missing_voltage_fails_with_input_status() {
        let params = COPPER_COIL.replace(",\n        \"voltage\": 5", "");
        let err = execute_str(&params, Intervals::default(), OutputFormat::Text).unwrap_err();

        assert!(matches!(
            err,
            AppError::Input(InputError::MissingField("voltage"))
        ));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "missing required field 'voltage'");
    }

    #[test]
    fn domain_errors_fail_with_domain_status() {
        let params = COPPER_COIL.replace("\"wireDiameter\": 0.001", "\"wireDiameter\": 0");
        let err = execute_str(&params, Intervals::default(), OutputFormat::Text).unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidInput {
                stage: Stage::Resistance,
                ..
            })
        ));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = execute(
            Path::new("/nonexistent/coil.json"),
            Intervals::default(),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
