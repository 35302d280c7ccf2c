use std::fmt;

use thiserror::Error;

use crate::support::constraint::{Constrained, Constraint, ConstraintError};

/// A stage of the solenoid calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Effective core permeability.
    Permeability,
    /// Helical wire length.
    WireLength,
    /// Wire resistance.
    Resistance,
    /// Drive current.
    Current,
    /// Magnetic field.
    Field,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Permeability => "effective permeability",
            Self::WireLength => "wire length",
            Self::Resistance => "wire resistance",
            Self::Current => "current",
            Self::Field => "magnetic field",
        };
        f.write_str(name)
    }
}

/// Errors raised when a calculation stage receives a mathematically invalid input.
///
/// Reported values are in SI base units.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// An input violates the stage's domain (e.g., a zero radius or diameter).
    #[error("{stage}: invalid {input} = {value}: {source}")]
    InvalidInput {
        /// Stage that rejected the input.
        stage: Stage,

        /// Name of the offending input.
        input: &'static str,

        /// Offending value.
        value: f64,

        /// Violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A stage produced a value that is not finite.
    #[error("{stage}: {quantity} is not finite ({value})")]
    NonFinite {
        /// Stage that produced the value.
        stage: Stage,

        /// Name of the computed quantity.
        quantity: &'static str,

        /// Computed value.
        value: f64,
    },
}

impl DomainError {
    /// Returns the stage that raised this error.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidInput { stage, .. } | Self::NonFinite { stage, .. } => *stage,
        }
    }

    /// Checks `value` against the constraint `C`.
    pub(super) fn require<C: Constraint<f64>>(
        stage: Stage,
        input: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        Constrained::<f64, C>::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidInput {
                stage,
                input,
                value,
                source,
            })
    }

    /// Checks that a computed value is finite.
    pub(super) fn ensure_finite(stage: Stage, quantity: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFinite {
                stage,
                quantity,
                value,
            })
        }
    }
}
