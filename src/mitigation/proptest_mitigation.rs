//! Property-based tests for the deflection planner.
//!
//! These tests verify the scaling laws hold across the range of plausible
//! near-Earth asteroids and warning times.

use proptest::prelude::*;

use super::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Δv ∝ 1 / lead time at fixed miss distance.
    #[test]
    fn prop_delta_v_inverse_in_lead_time(
        miss_distance in 1e6f64..1e9,
        lead_time in 1.0f64..1e10,
        factor in 1.0f64..100.0,
    ) {
        let short = required_delta_v_mps(miss_distance, lead_time);
        let long = required_delta_v_mps(miss_distance, lead_time * factor);
        let ratio = short / long;
        prop_assert!(
            (ratio - factor).abs() / factor < 1e-9,
            "ratio {} should equal lead-time factor {}", ratio, factor
        );
    }

    /// At least one impactor is always needed, and enough of them meet the requirement.
    #[test]
    fn prop_impactor_count_positive_and_sufficient(
        diameter in 10.0f64..2000.0,
        density in 1000.0f64..5000.0,
        velocity in 5.0f64..70.0,
        years in 0.01f64..100.0,
    ) {
        let request = MitigationRequest::from_years(diameter, density, velocity, years);
        let result = plan_mitigation(&request).unwrap();
        let kinetic = result.kinetic;

        prop_assert!(kinetic.impactors_needed_for_req >= 1);
        let delivered = kinetic.impactors_needed_for_req as f64 * kinetic.per_impactor_delta_v_mps;
        prop_assert!(
            delivered >= result.delta_v_required_mps * (1.0 - 1e-12),
            "{} impactors deliver {} m/s, need {} m/s",
            kinetic.impactors_needed_for_req, delivered, result.delta_v_required_mps
        );
    }

    /// The planner is total: every plausible asteroid gets finite numbers.
    #[test]
    fn prop_planner_total(
        diameter in 1.0f64..10_000.0,
        density in 500.0f64..8000.0,
        velocity in 0.5f64..80.0,
        years in 1e-6f64..1000.0,
    ) {
        let request = MitigationRequest::from_years(diameter, density, velocity, years);
        let result = plan_mitigation(&request).unwrap();

        prop_assert!(result.v_inf_kms >= MIN_EXCESS_VELOCITY_KMS);
        prop_assert!(result.miss_distance_m.is_finite() && result.miss_distance_m > 0.0);
        prop_assert!(result.delta_v_required_mps.is_finite());
        prop_assert!(result.gravity_tractor.spacecraft_mass_required_kg.is_finite());
        prop_assert!(result.nuclear.required_yield_megatons.is_finite());
    }

    /// A slower arrival never needs a smaller miss distance.
    #[test]
    fn prop_miss_distance_grows_as_excess_velocity_drops(
        v_inf in 0.316f64..60.0,
        drop in 0.0f64..1.0,
    ) {
        let slower = (v_inf * (1.0 - drop * 0.5)).max(0.316);
        prop_assert!(required_miss_distance_m(slower, 1.0) >= required_miss_distance_m(v_inf, 1.0));
    }
}
