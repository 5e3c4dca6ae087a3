//! Property-based tests for impact energetics, crater depth and seismic
//! magnitudes using proptest.
//!
//! These tests verify the scaling laws hold across the whole range of
//! asteroid sizes and speeds, not just at the reference impactor.

use proptest::prelude::*;

use crate::config::CraterConfig;
use crate::crater::{crater_depth, elevation_correction};
use crate::geology::compute_geological_effects;
use crate::impact::compute_impact;
use crate::test_utils::assertions;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every positive impactor yields positive mass, energy and crater size.
    #[test]
    fn prop_impact_outputs_positive(
        diameter in 1.0f64..20_000.0,
        velocity in 1.0f64..72.0,
        rho_i in 500.0f64..8000.0,
        rho_t in 900.0f64..3500.0,
    ) {
        let result = compute_impact(diameter, velocity, rho_i, rho_t).unwrap();
        prop_assert!(result.mass_kg > 0.0);
        prop_assert!(result.energy_megatons_tnt > 0.0);
        prop_assert!(result.crater_diameter_km > 0.0);
    }

    /// E ∝ v² at fixed size and density.
    #[test]
    fn prop_energy_quadratic_in_velocity(
        diameter in 1.0f64..5000.0,
        velocity in 1.0f64..36.0,
        factor in 1.0f64..2.0,
    ) {
        let base = compute_impact(diameter, velocity, 3000.0, 2500.0).unwrap();
        let fast = compute_impact(diameter, velocity * factor, 3000.0, 2500.0).unwrap();
        assertions::assert_ratio(
            fast.energy_joules / base.energy_joules,
            factor * factor,
            1e-9,
        );
    }

    /// D_crater ∝ D^0.78 at fixed velocity and densities.
    #[test]
    fn prop_crater_sublinear_in_diameter(
        diameter in 1.0f64..5000.0,
        factor in 1.01f64..10.0,
    ) {
        let small = compute_impact(diameter, 20.0, 3000.0, 2500.0).unwrap();
        let large = compute_impact(diameter * factor, 20.0, 3000.0, 2500.0).unwrap();
        let ratio = large.crater_diameter_km / small.crater_diameter_km;

        assertions::assert_ratio(ratio, factor.powf(0.78), 1e-9);
        prop_assert!(
            ratio < factor,
            "crater ratio {} should be below size ratio {}",
            ratio,
            factor
        );
    }

    /// Depth never grows with elevation on [0, 10 km].
    #[test]
    fn prop_depth_non_increasing_in_elevation(
        crater_km in 0.01f64..200.0,
        low in 0.0f64..10_000.0,
        high in 0.0f64..10_000.0,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let depths = [
            crater_depth(crater_km, Some(low)),
            crater_depth(crater_km, Some(high)),
        ];
        assertions::assert_non_increasing(&depths);
    }

    /// The correction factor is floored at 0.5 for any elevation.
    #[test]
    fn prop_correction_floor(elevation in -1e7f64..1e9) {
        let factor = elevation_correction(Some(elevation), &CraterConfig::default());
        prop_assert!(factor >= 0.5);
    }

    /// Magnitudes ascend with seismic efficiency for any positive energy.
    #[test]
    fn prop_magnitudes_ordered(
        exponent in -6.0f64..9.0,
        crater_km in 0.0f64..200.0,
        ocean in any::<bool>(),
    ) {
        let energy = 10f64.powf(exponent);
        let result = compute_geological_effects(energy, crater_km, ocean).unwrap();
        assertions::assert_non_decreasing(&result.magnitude_estimates);
        prop_assert!(result.felt_radius_km >= 10.0);
    }
}
