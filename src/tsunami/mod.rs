//! Coastal tsunami risk and local flood extent.
//!
//! A site is first classified as inland or coastal. Inland sites stop
//! there: no wave, no flooding. Coastal sites get a wave height scaled from
//! the impact energy, which then floods a synthetic grid around the site
//! (see [`flood`] for the limits of that approximation).

pub mod flood;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use flood::{FloodCell, FloodExtent, FloodGrid};

use crate::config::TsunamiConfig;
use crate::error::{ensure_within, ImpactError, Result};

/// Coastal exposure of a site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoastalClass {
    /// No tsunami computation is performed.
    Inland,
    /// Proceeds to wave height and flood simulation.
    Coastal,
}

impl CoastalClass {
    pub fn is_coastal(&self) -> bool {
        matches!(self, CoastalClass::Coastal)
    }
}

/// Outcome of a tsunami simulation at one site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TsunamiState {
    pub coastal: bool,
    pub wave_height_m: f64,
    /// Flooded cells, at most `max_reported_cells` of them.
    pub flood_cells: Vec<FloodCell>,
    /// Flooded cell count before the reporting cap.
    pub flooded_cell_count: usize,
}

impl TsunamiState {
    /// State of a site with no coastal exposure.
    pub fn inland() -> Self {
        Self::default()
    }
}

/// Classify a site by elevation.
///
/// Without a known elevation the site is treated as inland: coastal risk is
/// never asserted without data.
pub fn classify_site(elevation_m: Option<f64>, config: &TsunamiConfig) -> CoastalClass {
    match elevation_m {
        Some(e) if e.is_finite() && e < config.coastal_threshold_m => CoastalClass::Coastal,
        _ => CoastalClass::Inland,
    }
}

/// Whether a site is low enough (including underwater) to be coastal.
pub fn classify_coastal(elevation_m: Option<f64>) -> bool {
    classify_site(elevation_m, &TsunamiConfig::default()).is_coastal()
}

/// Local wave amplitude (m) for an impact of the given energy.
///
/// h = min(3000, 30 × log10(E_Mt × 10¹⁵)), floored at zero.
///
/// # Errors
/// `DomainError` for non-positive energy.
pub fn wave_height(energy_megatons: f64) -> Result<f64> {
    wave_height_with(energy_megatons, &TsunamiConfig::default())
}

pub fn wave_height_with(energy_megatons: f64, config: &TsunamiConfig) -> Result<f64> {
    if !energy_megatons.is_finite() || energy_megatons <= 0.0 {
        return Err(ImpactError::DomainError {
            operation: "wave height",
            value: energy_megatons,
            reason: "log10 requires positive energy",
        });
    }

    let height = config.wave_scale_m * (energy_megatons * 1e15).log10();
    if height > config.max_wave_height_m {
        warn!(
            energy_megatons,
            uncapped_m = height,
            "wave height capped at {} m",
            config.max_wave_height_m
        );
        return Ok(config.max_wave_height_m);
    }
    Ok(height.max(0.0))
}

/// Flooded cells around (lat, lon) for a wave of the given height, using a
/// `grid_size` × `grid_size` grid at sea level.
pub fn flood_extent(
    lat: f64,
    lon: f64,
    wave_height_m: f64,
    grid_size: usize,
) -> Result<FloodExtent> {
    let config = TsunamiConfig {
        grid_size,
        ..Default::default()
    };
    FloodGrid::new(lat, lon, 0.0, &config)?.flood(wave_height_m, config.max_reported_cells)
}

/// Classify the site, then compute wave height and flood extent if coastal.
pub fn simulate(
    lat: f64,
    lon: f64,
    energy_megatons: f64,
    elevation_m: Option<f64>,
) -> Result<TsunamiState> {
    simulate_with(lat, lon, energy_megatons, elevation_m, &TsunamiConfig::default())
}

pub fn simulate_with(
    lat: f64,
    lon: f64,
    energy_megatons: f64,
    elevation_m: Option<f64>,
    config: &TsunamiConfig,
) -> Result<TsunamiState> {
    ensure_within("lat", lat, -90.0, 90.0)?;
    ensure_within("lon", lon, -180.0, 180.0)?;

    let class = classify_site(elevation_m, config);
    debug!(lat, lon, ?elevation_m, ?class, "tsunami site classified");

    match class {
        CoastalClass::Inland => Ok(TsunamiState::inland()),
        CoastalClass::Coastal => {
            let wave_height_m = wave_height_with(energy_megatons, config)?;
            // Coastal implies a known elevation
            let base = elevation_m.unwrap_or(0.0);
            let extent = FloodGrid::new(lat, lon, base, config)?
                .flood(wave_height_m, config.max_reported_cells)?;

            Ok(TsunamiState {
                coastal: true,
                wave_height_m,
                flood_cells: extent.cells,
                flooded_cell_count: extent.total_flooded,
            })
        }
    }
}

#[cfg(test)]
mod proptest_tsunami;
