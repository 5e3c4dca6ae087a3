//! Test utilities for impact calculator tests.
//!
//! Provides fixtures for common impactors and sites, and assertions for
//! the scaling laws the calculators must obey.

use crate::impact::ImpactParameters;
use crate::site::{ImpactSite, LandCover};

/// Fixtures for creating test impactors and sites.
pub mod fixtures {
    use super::*;

    /// A stony impactor of the given size and speed hitting crustal rock.
    pub fn rocky_impactor(diameter_m: f64, velocity_kms: f64) -> ImpactParameters {
        ImpactParameters::rocky(diameter_m, velocity_kms).expect("fixture parameters are positive")
    }

    /// The 100 m, 20 km/s reference impactor.
    pub fn reference_impactor() -> ImpactParameters {
        rocky_impactor(100.0, 20.0)
    }

    /// A deep-ocean site.
    pub fn open_ocean() -> ImpactSite {
        ImpactSite::new(30.0, -40.0)
            .expect("valid coordinates")
            .with_elevation(-4000.0)
            .with_land_cover(LandCover::Water)
    }

    /// A dry, inland site at the given elevation.
    pub fn inland(elevation_m: f64) -> ImpactSite {
        ImpactSite::new(39.7, -105.0)
            .expect("valid coordinates")
            .with_elevation(elevation_m)
            .with_land_cover(LandCover::Vegetation)
    }
}

/// Assertions for verifying scaling laws.
pub mod assertions {
    /// Assert `actual / expected` is within `tolerance` of 1.
    ///
    /// # Panics
    /// Panics if the relative error exceeds tolerance.
    pub fn assert_ratio(actual: f64, expected: f64, tolerance: f64) {
        let error = ((actual / expected) - 1.0).abs();
        assert!(
            error <= tolerance,
            "Ratio mismatch: actual={actual:.6e}, expected={expected:.6e}, error={error:.3e}, tolerance={tolerance:.3e}"
        );
    }

    /// Assert a sequence never increases.
    pub fn assert_non_increasing(values: &[f64]) {
        for (i, pair) in values.windows(2).enumerate() {
            assert!(
                pair[1] <= pair[0],
                "Sequence increased at index {}: {} -> {}",
                i + 1,
                pair[0],
                pair[1]
            );
        }
    }

    /// Assert a sequence never decreases.
    pub fn assert_non_decreasing(values: &[f64]) {
        for (i, pair) in values.windows(2).enumerate() {
            assert!(
                pair[1] >= pair[0],
                "Sequence decreased at index {}: {} -> {}",
                i + 1,
                pair[0],
                pair[1]
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::compute_impact_with;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_impactor_fixture() {
        let params = fixtures::reference_impactor();
        assert_eq!(params.diameter_m, 100.0);
        assert_eq!(params.target_density_kg_m3, 2500.0);

        let result = compute_impact_with(&params, &Default::default()).unwrap();
        assert_relative_eq!(result.mass_kg, params.mass_kg());
    }

    #[test]
    fn test_site_fixtures() {
        assert!(fixtures::open_ocean().is_ocean_impact());
        assert!(!fixtures::inland(1600.0).is_ocean_impact());
    }

    #[test]
    fn test_sequence_assertions() {
        assertions::assert_non_increasing(&[3.0, 2.0, 2.0, 1.0]);
        assertions::assert_non_decreasing(&[1.0, 1.0, 4.0]);
        assertions::assert_ratio(2.0, 2.0 + 1e-12, 1e-9);
    }

    #[test]
    #[should_panic(expected = "Sequence increased")]
    fn test_non_increasing_catches_rise() {
        assertions::assert_non_increasing(&[1.0, 2.0]);
    }
}
