//! Property-based tests for the tsunami model.

use proptest::prelude::*;

use super::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A taller wave never floods fewer cells.
    #[test]
    fn prop_flood_monotonic_in_wave_height(
        lat in -80.0f64..80.0,
        lon in -170.0f64..170.0,
        base in -50.0f64..20.0,
        low in 0.0f64..30.0,
        extra in 0.0f64..30.0,
    ) {
        let grid = FloodGrid::new(lat, lon, base, &TsunamiConfig::default()).unwrap();
        let small = grid.flood(low, 100).unwrap();
        let large = grid.flood(low + extra, 100).unwrap();

        prop_assert!(
            large.total_flooded >= small.total_flooded,
            "wave {} flooded {} cells, wave {} flooded {}",
            low, small.total_flooded, low + extra, large.total_flooded
        );
        prop_assert!(large.cells.len() >= small.cells.len());
    }

    /// Same inputs, same cells.
    #[test]
    fn prop_flood_deterministic(
        lat in -80.0f64..80.0,
        lon in -170.0f64..170.0,
        wave in 0.0f64..3000.0,
    ) {
        let a = flood_extent(lat, lon, wave, 50).unwrap();
        let b = flood_extent(lat, lon, wave, 50).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Reported cells never exceed the cap, and cells stay near the site.
    #[test]
    fn prop_flood_cells_bounded(
        lat in -80.0f64..80.0,
        lon in -170.0f64..170.0,
        wave in 0.0f64..3000.0,
    ) {
        let extent = flood_extent(lat, lon, wave, 50).unwrap();
        prop_assert!(extent.cells.len() <= 100);
        prop_assert!(extent.cells.len() <= extent.total_flooded);
        prop_assert!(extent.total_flooded <= extent.grid_cells);
        for cell in &extent.cells {
            prop_assert!((cell.lat - lat).abs() <= 0.05 + 1e-9);
            prop_assert!((cell.lon - lon).abs() <= 0.05 + 1e-9);
            prop_assert!(cell.elevation_m.is_finite());
        }
    }

    /// Inland sites report nothing, whatever the energy.
    #[test]
    fn prop_inland_has_no_wave(
        elevation in 20.0f64..9000.0,
        energy in 1e-6f64..1e9,
    ) {
        let state = simulate(10.0, 10.0, energy, Some(elevation)).unwrap();
        prop_assert!(!state.coastal);
        prop_assert_eq!(state.wave_height_m, 0.0);
        prop_assert!(state.flood_cells.is_empty());
    }

    /// Wave height stays within [0, cap] and grows with energy.
    #[test]
    fn prop_wave_height_bounded_and_monotonic(
        energy in 1e-12f64..1e12,
        factor in 1.0f64..1e3,
    ) {
        let h = wave_height(energy).unwrap();
        let h_more = wave_height(energy * factor).unwrap();
        prop_assert!((0.0..=3000.0).contains(&h));
        prop_assert!(h_more >= h);
    }
}
