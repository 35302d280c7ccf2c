//! Command-line parsing for the solenoid calculator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::support::electromagnetic::{DEFAULT_SAMPLES_PER_TURN, Intervals};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "solenoid",
    version,
    about = "Solenoid wire length, resistance, current, permeability, and field calculator"
)]
pub struct Cli {
    /// JSON parameter file, or `-` to read from stdin.
    #[arg(value_name = "PARAMS")]
    pub params: PathBuf,

    /// Wire length integration samples per turn.
    #[arg(long, default_value_t = DEFAULT_SAMPLES_PER_TURN)]
    pub samples_per_turn: usize,

    /// Total wire length integration intervals, instead of a per-turn count.
    #[arg(long, conflicts_with = "samples_per_turn")]
    pub intervals: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Integration policy selected by the arguments.
    #[must_use]
    pub fn intervals(&self) -> Intervals {
        match self.intervals {
            Some(n) => Intervals::Total(n),
            None => Intervals::PerTurn(self.samples_per_turn),
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per derived quantity.
    Text,
    /// A JSON object with one field per derived quantity.
    Json,
}
