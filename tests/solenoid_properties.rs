//! Property-based tests for the solenoid calculation stages.

use std::f64::consts::PI;

use proptest::prelude::*;
use solenoid_models::models::electromagnetic::solenoid::{Solenoid, SolenoidSpec};
use solenoid_models::support::electromagnetic::{
    DomainError, Intervals, Stage, current, effective_permeability, wire_length, wire_resistance,
};
use solenoid_models::support::units::ohm_meters;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance, Length, Ratio},
    length::meter,
    ratio::ratio,
};

fn m(value: f64) -> Length {
    Length::new::<meter>(value)
}

fn relative_error(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

// ── Permeability ─────────────────────────────────────────────────────

proptest! {
    /// A core with unit relative permeability is unaffected by its geometry.
    #[test]
    fn unit_permeability_is_identity(r in 1e-4f64..10.0, l in 1e-4f64..10.0) {
        let mu = effective_permeability(m(r), m(l), Ratio::new::<ratio>(1.0)).unwrap();
        prop_assert_eq!(mu.get::<ratio>(), 1.0);
    }

    /// The demagnetizing correction never increases permeability.
    #[test]
    fn effective_permeability_is_bounded(
        r in 1e-4f64..10.0,
        l in 1e-4f64..10.0,
        mu_r in 1.0f64..1e5,
    ) {
        let mu = effective_permeability(m(r), m(l), Ratio::new::<ratio>(mu_r))
            .unwrap()
            .get::<ratio>();
        prop_assert!(mu >= 1.0 - 1e-12);
        prop_assert!(mu <= mu_r * (1.0 + 1e-12));
    }
}

// ── Wire length ──────────────────────────────────────────────────────

proptest! {
    /// A coil without turns is a straight wire.
    #[test]
    fn zero_turns_is_coil_length(l in 1e-3f64..10.0, r in 0.0f64..1.0, n in 1usize..5000) {
        let length = wire_length(m(l), m(r), 0.0, Intervals::Total(n)).unwrap();
        prop_assert!(relative_error(length.get::<meter>(), l) < 1e-12);
    }

    /// Refining the integration never shortens the wire and converges on the helix length.
    #[test]
    fn refinement_converges_on_helix_length(
        l in 1e-2f64..1.0,
        r in 1e-3f64..0.1,
        turns in 1.0f64..200.0,
    ) {
        let helix = l.hypot(2.0 * PI * r * turns);

        let mut previous = 0.0;
        for n in [10, 100, 1_000, 10_000] {
            let length = wire_length(m(l), m(r), turns, Intervals::Total(n))
                .unwrap()
                .get::<meter>();
            prop_assert!(length >= previous * (1.0 - 1e-10));
            previous = length;
        }
        prop_assert!(relative_error(previous, helix) < 1e-9);
    }
}

// ── Electrical ───────────────────────────────────────────────────────

proptest! {
    /// Resistance is linear in length and resistivity and inverse in diameter squared.
    #[test]
    fn resistance_scaling(
        length in 1e-2f64..1e3,
        diameter in 1e-5f64..1e-2,
        rho in 1e-9f64..1e-5,
        k in 0.1f64..10.0,
    ) {
        let resistance = |length: f64, diameter: f64, rho: f64| {
            wire_resistance(m(length), m(diameter), ohm_meters(rho)).unwrap().get::<ohm>()
        };
        let base = resistance(length, diameter, rho);

        prop_assert!(relative_error(resistance(k * length, diameter, rho), k * base) < 1e-12);
        prop_assert!(relative_error(resistance(length, diameter, k * rho), k * base) < 1e-12);
        prop_assert!(relative_error(resistance(length, k * diameter, rho), base / (k * k)) < 1e-12);
    }

    /// Current follows Ohm's law for any non-zero resistance.
    #[test]
    fn ohms_law(v in -1e3f64..1e3, r in prop_oneof![-1e3f64..-1e-6, 1e-6f64..1e3]) {
        let i = current(ElectricPotential::new::<volt>(v), ElectricalResistance::new::<ohm>(r))
            .unwrap()
            .get::<ampere>();
        prop_assert!((i - v / r).abs() <= 1e-12 * (v / r).abs().max(1.0));
    }
}

#[test]
fn zero_resistance_is_a_domain_error() {
    let err = current(
        ElectricPotential::new::<volt>(5.0),
        ElectricalResistance::new::<ohm>(0.0),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        DomainError::InvalidInput {
            stage: Stage::Current,
            ..
        }
    ));
}

// ── Pipeline ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any physically valid coil yields five finite derived values.
    #[test]
    fn valid_coils_solve(
        coil_length in 1e-2f64..1.0,
        coil_radius in 1e-3f64..0.1,
        turns in 1.0f64..500.0,
        mu_r in 1.0f64..5000.0,
        wire_diameter in 1e-4f64..5e-3,
        rho in 1e-8f64..1e-6,
        voltage in 0.1f64..100.0,
    ) {
        let spec = SolenoidSpec {
            coil_length: m(coil_length),
            coil_radius: m(coil_radius),
            turns,
            relative_permeability: Ratio::new::<ratio>(mu_r),
            wire_diameter: m(wire_diameter),
            wire_resistivity: ohm_meters(rho),
            voltage: ElectricPotential::new::<volt>(voltage),
        };

        let result = Solenoid::default().solve(&spec).unwrap();

        prop_assert!(result.effective_permeability.get::<ratio>().is_finite());
        prop_assert!(result.wire_length.value > 0.0 && result.wire_length.value.is_finite());
        prop_assert!(result.wire_resistance.value > 0.0 && result.wire_resistance.value.is_finite());
        prop_assert!(result.current.value > 0.0 && result.current.value.is_finite());
        prop_assert!(result.magnetic_field.value > 0.0 && result.magnetic_field.value.is_finite());
    }
}
