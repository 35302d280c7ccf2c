use std::{f64::consts::PI, marker::PhantomData};

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, N3, P1, P3, Z0},
};

/// Electrical resistivity, Ω·m in SI.
pub type ElectricalResistivity = Quantity<ISQ<P3, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Magnetic permeability, H/m (equivalently N·A⁻²) in SI.
pub type MagneticPermeability = Quantity<ISQ<P1, P1, N2, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Vacuum permeability, `MU_0 = 4π×10⁻⁷ N·A⁻²`.
pub const VACUUM_PERMEABILITY: MagneticPermeability = MagneticPermeability {
    dimension: PhantomData,
    units: PhantomData,
    value: 4.0e-7 * PI,
};

/// Creates an [`ElectricalResistivity`] from a value in ohm-meters.
#[must_use]
pub fn ohm_meters(value: f64) -> ElectricalResistivity {
    ElectricalResistivity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
