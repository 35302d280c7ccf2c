//! Helical wire length by numerical integration.
//!
//! The wire is modeled as a helix parameterized by axial position
//! `x ∈ [0, coil_length)` with angular frequency `ω = 2π·turns / coil_length`.
//! Over an axial step `Δx` the helix advances by
//!
//! ```text
//! dx = Δx
//! dy = R·ω·(−sin(ωx))·Δx
//! dz = R·ω·cos(ωx)·Δx
//! ```
//!
//! and the length is the sum of `√(dx² + dy² + dz²)` sampled at the start of
//! each interval (a left Riemann sum).

use std::f64::consts::PI;

use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{DomainError, Stage};

/// Integration samples per turn used by [`Intervals::default`].
pub const DEFAULT_SAMPLES_PER_TURN: usize = 100;

/// Number of integration intervals used by [`wire_length`].
///
/// Runtime is linear in the resolved interval count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intervals {
    /// A fixed number of samples per turn, rounded to the nearest whole interval.
    PerTurn(usize),
    /// An explicit total interval count.
    Total(usize),
}

impl Default for Intervals {
    fn default() -> Self {
        Self::PerTurn(DEFAULT_SAMPLES_PER_TURN)
    }
}

impl Intervals {
    /// Resolves the total interval count for a coil with `turns` turns.
    ///
    /// Negative or `NaN` products resolve to zero intervals.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn resolve(self, turns: f64) -> usize {
        match self {
            Self::PerTurn(samples) => (turns * samples as f64).round() as usize,
            Self::Total(n) => n,
        }
    }
}

/// Calculates the length of wire wound helically along a coil.
///
/// A coil with zero turns degenerates to a straight wire of length
/// `coil_length`.
///
/// # Errors
///
/// Returns a [`DomainError`] if `coil_length` is not strictly positive,
/// `coil_radius` or `turns` is negative, or the resolved interval count is zero.
#[allow(clippy::cast_precision_loss)]
pub fn wire_length(
    coil_length: Length,
    coil_radius: Length,
    turns: f64,
    intervals: Intervals,
) -> Result<Length, DomainError> {
    let coil_length = DomainError::require::<StrictlyPositive>(
        Stage::WireLength,
        "coil length",
        coil_length.get::<meter>(),
    )?;
    let radius = DomainError::require::<NonNegative>(
        Stage::WireLength,
        "coil radius",
        coil_radius.get::<meter>(),
    )?;
    let turns = DomainError::require::<NonNegative>(Stage::WireLength, "turns", turns)?;

    let n = intervals.resolve(turns);
    let n = Constrained::<usize, StrictlyPositive>::new(n)
        .map_err(|source| DomainError::InvalidInput {
            stage: Stage::WireLength,
            input: "intervals",
            value: n as f64,
            source,
        })?
        .into_inner();

    let step = coil_length / n as f64;
    let omega = 2.0 * PI * turns / coil_length;

    let total = (0..n)
        .map(|i| {
            let x = i as f64 * step;
            let dx = step;
            let dy = radius * omega * -(omega * x).sin() * step;
            let dz = radius * omega * (omega * x).cos() * step;
            Length::new::<meter>((dx * dx + dy * dy + dz * dz).sqrt())
        })
        .map(NonNegative::new)
        .sum::<Result<Constrained<Length, NonNegative>, _>>()
        .map_err(|source| DomainError::InvalidInput {
            stage: Stage::WireLength,
            input: "segment length",
            value: f64::NAN,
            source,
        })?;

    let total = total.into_inner();
    DomainError::ensure_finite(Stage::WireLength, "wire length", total.get::<meter>())?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn analytic(coil_length: f64, radius: f64, turns: f64) -> f64 {
        coil_length.hypot(2.0 * PI * radius * turns)
    }

    #[test]
    fn default_policy_is_one_hundred_per_turn() {
        assert_eq!(Intervals::default(), Intervals::PerTurn(100));
        assert_eq!(Intervals::default().resolve(100.0), 10_000);
        assert_eq!(Intervals::default().resolve(0.125), 13);
        assert_eq!(Intervals::Total(7).resolve(100.0), 7);
        assert_eq!(Intervals::default().resolve(-3.0), 0);
        assert_eq!(Intervals::default().resolve(f64::NAN), 0);
    }

    #[test]
    fn zero_turns_is_a_straight_wire() {
        for n in [1, 3, 1000] {
            let length = wire_length(m(0.25), m(0.05), 0.0, Intervals::Total(n)).unwrap();
            assert_relative_eq!(length.get::<meter>(), 0.25, max_relative = 1e-12);
        }
    }

    #[test]
    fn matches_helix_arc_length() {
        let length = wire_length(m(0.0762), m(0.1), 30.0, Intervals::default()).unwrap();
        assert_relative_eq!(
            length.get::<meter>(),
            analytic(0.0762, 0.1, 30.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn fractional_turns() {
        let length = wire_length(m(0.1), m(0.01), 12.5, Intervals::default()).unwrap();
        assert_relative_eq!(
            length.get::<meter>(),
            analytic(0.1, 0.01, 12.5),
            max_relative = 1e-9
        );
    }

    #[test]
    fn no_intervals_is_a_domain_error() {
        let err = wire_length(m(0.1), m(0.01), 10.0, Intervals::Total(0)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInput {
                stage: Stage::WireLength,
                input: "intervals",
                value: 0.0,
                source: ConstraintError::Zero,
            }
        );

        // Zero turns resolve to zero intervals under the per-turn policy.
        assert!(wire_length(m(0.1), m(0.01), 0.0, Intervals::default()).is_err());
    }

    #[test]
    fn invalid_geometry_is_a_domain_error() {
        let err = wire_length(m(0.0), m(0.01), 10.0, Intervals::Total(10)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { input: "coil length", .. }));

        let err = wire_length(m(0.1), m(-0.01), 10.0, Intervals::Total(10)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { input: "coil radius", .. }));

        let err = wire_length(m(0.1), m(0.01), -1.0, Intervals::Total(10)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { input: "turns", .. }));
    }
}
