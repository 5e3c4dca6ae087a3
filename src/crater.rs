//! Crater depth from diameter and site elevation.
//!
//! Simple (bowl-shaped) craters are roughly a fifth as deep as they are
//! wide; above ~3 km they collapse into complex craters with a depth ratio
//! near a tenth. High-elevation sites get a shallower crater, with the
//! correction floored so depth never falls below half the base estimate.

use crate::config::CraterConfig;

/// Depth (km) of a crater of the given diameter.
///
/// An unknown (or non-finite) elevation is treated as sea level.
pub fn crater_depth(crater_diameter_km: f64, elevation_m: Option<f64>) -> f64 {
    crater_depth_with(crater_diameter_km, elevation_m, &CraterConfig::default())
}

pub fn crater_depth_with(
    crater_diameter_km: f64,
    elevation_m: Option<f64>,
    config: &CraterConfig,
) -> f64 {
    base_depth_km(crater_diameter_km, config) * elevation_correction(elevation_m, config)
}

/// Depth before elevation correction.
pub fn base_depth_km(crater_diameter_km: f64, config: &CraterConfig) -> f64 {
    if crater_diameter_km < config.complex_transition_km {
        config.simple_depth_ratio * crater_diameter_km
    } else {
        config.complex_depth_ratio * crater_diameter_km
    }
}

/// Multiplier in `[min_correction, ∞)` applied to the base depth.
pub fn elevation_correction(elevation_m: Option<f64>, config: &CraterConfig) -> f64 {
    let elevation = elevation_m.filter(|e| e.is_finite()).unwrap_or(0.0);
    (1.0 - elevation / config.elevation_scale_m).max(config.min_correction)
}
