//! Effective permeability of a finite cylindrical core.
//!
//! A magnetized cylinder of finite length develops poles at its ends that
//! oppose the applied field. The demagnetizing factor captures that effect as
//! a function of the cylinder's aspect ratio alone, using the closed-form
//! approximation of Sato and Ishii, J. Appl. Phys. 66, 983 (1989).

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::support::constraint::{AtLeastOne, NonNegative, StrictlyPositive};

use super::{DomainError, Stage};

/// Calculates the demagnetizing factor of a cylinder.
///
/// With aspect ratio `n = length / (2 * radius)`, the factor is
/// `1 / (2 * (2n / √π) + 1)`. It approaches 1 for a flat disc and 0 for a
/// long rod.
///
/// # Errors
///
/// Returns a [`DomainError`] if `radius` is not strictly positive or `length`
/// is negative.
pub fn demagnetizing_factor(radius: Length, length: Length) -> Result<Ratio, DomainError> {
    let radius =
        DomainError::require::<StrictlyPositive>(Stage::Permeability, "radius", radius.get::<meter>())?;
    let length =
        DomainError::require::<NonNegative>(Stage::Permeability, "length", length.get::<meter>())?;

    let n = length / (2.0 * radius);
    let factor = 1.0 / (2.0 * (2.0 * n / PI.sqrt()) + 1.0);

    DomainError::ensure_finite(Stage::Permeability, "demagnetizing factor", factor)?;
    Ok(Ratio::new::<ratio>(factor))
}

/// Calculates the effective relative permeability of a cylindrical core.
///
/// The bulk relative permeability `μr` is reduced by the demagnetizing
/// factor `D`: `μeff = μr / (1 + D * (μr - 1))`.
/// A core with `μr = 1` always yields exactly 1.
///
/// # Errors
///
/// Returns a [`DomainError`] if `radius` is not strictly positive, `length`
/// is negative, or `relative_permeability` is below 1.
pub fn effective_permeability(
    radius: Length,
    length: Length,
    relative_permeability: Ratio,
) -> Result<Ratio, DomainError> {
    let mu_r = DomainError::require::<AtLeastOne>(
        Stage::Permeability,
        "relative permeability",
        relative_permeability.get::<ratio>(),
    )?;
    let factor = demagnetizing_factor(radius, length)?.get::<ratio>();

    let mu_eff = mu_r / (1.0 + factor * (mu_r - 1.0));

    DomainError::ensure_finite(Stage::Permeability, "effective permeability", mu_eff)?;
    Ok(Ratio::new::<ratio>(mu_eff))
}
