//! Common test utilities for integration tests.

#![allow(dead_code)]

use impactcalc::site::{ImpactSite, LandCover};

/// Relative error between two values.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

/// Site with every lookup answered.
pub fn site(
    lat: f64,
    lon: f64,
    elevation_m: f64,
    land_cover: LandCover,
    population: f64,
) -> ImpactSite {
    ImpactSite::new(lat, lon)
        .unwrap()
        .with_elevation(elevation_m)
        .with_land_cover(land_cover)
        .with_population_density(population)
}

/// Site where every lookup failed.
pub fn unknown_site(lat: f64, lon: f64) -> ImpactSite {
    ImpactSite::new(lat, lon).unwrap()
}
