//! Tunable coefficients for each calculator.
//!
//! Every struct defaults to the published constants, so the free functions
//! in each module (`compute_impact`, `simulate`, ...) behave identically to
//! their `*_with` counterparts called with `Default::default()`. Configs
//! deserialize with `#[serde(default)]`, letting a caller override a single
//! coefficient from JSON or TOML without restating the rest.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, ImpactError, Result};

/// Crater scaling law coefficients.
///
/// D_crater = k × (ρ_i/ρ_t)^(1/3) × D^a × v^b
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Scaling constant k (dimensionless).
    pub crater_scaling_k: f64,
    /// Exponent on impactor diameter (meters).
    pub diameter_exponent: f64,
    /// Exponent on impact velocity (m/s).
    pub velocity_exponent: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            crater_scaling_k: 1.8,
            diameter_exponent: 0.78,
            velocity_exponent: 0.44,
        }
    }
}

impl ImpactConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("crater_scaling_k", self.crater_scaling_k)?;
        ensure_positive("diameter_exponent", self.diameter_exponent)?;
        ensure_positive("velocity_exponent", self.velocity_exponent)?;
        Ok(())
    }
}

/// One row of the felt-radius table: magnitudes at or above
/// `min_magnitude` are felt out to `radius_km`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeltRadiusBand {
    pub min_magnitude: f64,
    pub radius_km: f64,
}

/// Seismic and tsunami-risk coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeologyConfig {
    /// Seismic coupling efficiencies η, ascending.
    pub seismic_efficiencies: [f64; 3],
    /// Energy (J) above which an ocean impact is a regional tsunami risk.
    pub regional_tsunami_joules: f64,
    /// Energy (J) above which an ocean impact is a local tsunami risk.
    pub local_tsunami_joules: f64,
    /// Felt-radius bands, checked in order; first match wins.
    pub felt_radius_bands: Vec<FeltRadiusBand>,
    /// Felt radius (km) when no band matches.
    pub min_felt_radius_km: f64,
}

impl Default for GeologyConfig {
    fn default() -> Self {
        Self {
            seismic_efficiencies: [1e-6, 1e-5, 1e-4],
            regional_tsunami_joules: 1e18,
            local_tsunami_joules: 1e17,
            felt_radius_bands: vec![
                FeltRadiusBand { min_magnitude: 7.0, radius_km: 1000.0 },
                FeltRadiusBand { min_magnitude: 6.0, radius_km: 500.0 },
                FeltRadiusBand { min_magnitude: 5.0, radius_km: 200.0 },
                FeltRadiusBand { min_magnitude: 4.0, radius_km: 50.0 },
            ],
            min_felt_radius_km: 10.0,
        }
    }
}

impl GeologyConfig {
    pub fn validate(&self) -> Result<()> {
        for eta in self.seismic_efficiencies {
            ensure_positive("seismic_efficiency", eta)?;
        }
        if self.seismic_efficiencies.windows(2).any(|w| w[0] > w[1]) {
            return Err(ImpactError::InvalidParameter {
                name: "seismic_efficiencies",
                value: self.seismic_efficiencies[0],
                reason: "must be ascending",
            });
        }
        ensure_positive("local_tsunami_joules", self.local_tsunami_joules)?;
        ensure_positive("regional_tsunami_joules", self.regional_tsunami_joules)?;
        if self.regional_tsunami_joules < self.local_tsunami_joules {
            return Err(ImpactError::InvalidParameter {
                name: "regional_tsunami_joules",
                value: self.regional_tsunami_joules,
                reason: "must not be below the local threshold",
            });
        }
        for band in &self.felt_radius_bands {
            ensure_positive("felt_radius_km", band.radius_km)?;
        }
        ensure_positive("min_felt_radius_km", self.min_felt_radius_km)?;
        Ok(())
    }
}

/// Crater depth-to-diameter ratios and elevation correction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraterConfig {
    /// Diameter (km) separating simple from complex craters.
    pub complex_transition_km: f64,
    /// Depth/diameter ratio of simple craters.
    pub simple_depth_ratio: f64,
    /// Depth/diameter ratio of complex craters.
    pub complex_depth_ratio: f64,
    /// Elevation (m) at which the linear correction reaches zero.
    pub elevation_scale_m: f64,
    /// Floor on the elevation correction factor.
    pub min_correction: f64,
}

impl Default for CraterConfig {
    fn default() -> Self {
        Self {
            complex_transition_km: 3.0,
            simple_depth_ratio: 0.2,
            complex_depth_ratio: 0.1,
            elevation_scale_m: 10_000.0,
            min_correction: 0.5,
        }
    }
}

impl CraterConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("complex_transition_km", self.complex_transition_km)?;
        ensure_positive("simple_depth_ratio", self.simple_depth_ratio)?;
        ensure_positive("complex_depth_ratio", self.complex_depth_ratio)?;
        ensure_positive("elevation_scale_m", self.elevation_scale_m)?;
        ensure_non_negative("min_correction", self.min_correction)?;
        Ok(())
    }
}

/// Coastal classification, wave scaling and synthetic flood grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsunamiConfig {
    /// Sites below this elevation (m) are coastal.
    pub coastal_threshold_m: f64,
    /// Multiplier on log10 of the scaled energy (m).
    pub wave_scale_m: f64,
    /// Maximum local wave amplitude (m).
    pub max_wave_height_m: f64,
    /// Cells per side of the square flood grid.
    pub grid_size: usize,
    /// Angular size of one grid cell (degrees, ~200 m).
    pub cell_size_deg: f64,
    /// Elevation gain per cell along the sloped axis (m).
    pub slope_m_per_cell: f64,
    /// Maximum number of flooded cells reported individually.
    pub max_reported_cells: usize,
}

impl Default for TsunamiConfig {
    fn default() -> Self {
        Self {
            coastal_threshold_m: 20.0,
            wave_scale_m: 30.0,
            max_wave_height_m: 3000.0,
            grid_size: 50,
            cell_size_deg: 0.002,
            slope_m_per_cell: 0.5,
            max_reported_cells: 100,
        }
    }
}

impl TsunamiConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("wave_scale_m", self.wave_scale_m)?;
        ensure_positive("max_wave_height_m", self.max_wave_height_m)?;
        ensure_positive("grid_size", self.grid_size as f64)?;
        ensure_positive("cell_size_deg", self.cell_size_deg)?;
        ensure_non_negative("slope_m_per_cell", self.slope_m_per_cell)?;
        Ok(())
    }
}

/// Deflection requirement and technique coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MitigationConfig {
    /// Safety multiple on the gravitationally focused capture radius.
    pub margin_factor: f64,
    /// Kinetic impactor closing speed (km/s).
    pub impactor_speed_kms: f64,
    /// Momentum enhancement factor β from ejecta.
    pub momentum_enhancement: f64,
    /// Reference kinetic impactor mass (kg).
    pub impactor_mass_kg: f64,
    /// Gravity tractor hover radius as a multiple of the asteroid radius.
    pub hover_factor: f64,
    /// Fixed gravity tractor mass (kg) to evaluate, if any.
    pub spacecraft_mass_kg: Option<f64>,
    /// Nuclear standoff distance as a multiple of the asteroid radius.
    pub standoff_factor: f64,
    /// Impulse per joule of deposited energy (N·s/J).
    pub momentum_coupling: f64,
    /// Fraction of intercepted yield deposited in the surface.
    pub energy_coupling_fraction: f64,
}

impl Default for MitigationConfig {
    fn default() -> Self {
        Self {
            margin_factor: 2.0,
            impactor_speed_kms: 7.0,
            momentum_enhancement: 2.5,
            impactor_mass_kg: 600.0,
            hover_factor: 2.0,
            spacecraft_mass_kg: None,
            standoff_factor: 1.5,
            momentum_coupling: 1e-4,
            energy_coupling_fraction: 0.2,
        }
    }
}

impl MitigationConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("margin_factor", self.margin_factor)?;
        ensure_positive("impactor_speed_kms", self.impactor_speed_kms)?;
        ensure_positive("momentum_enhancement", self.momentum_enhancement)?;
        ensure_positive("impactor_mass_kg", self.impactor_mass_kg)?;
        ensure_positive("hover_factor", self.hover_factor)?;
        if let Some(mass) = self.spacecraft_mass_kg {
            ensure_positive("spacecraft_mass_kg", mass)?;
        }
        ensure_positive("standoff_factor", self.standoff_factor)?;
        ensure_positive("momentum_coupling", self.momentum_coupling)?;
        ensure_positive("energy_coupling_fraction", self.energy_coupling_fraction)?;
        Ok(())
    }
}

/// All calculator settings in one place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub impact: ImpactConfig,
    pub geology: GeologyConfig,
    pub crater: CraterConfig,
    pub tsunami: TsunamiConfig,
    pub mitigation: MitigationConfig,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<()> {
        self.impact.validate()?;
        self.geology.validate()?;
        self.crater.validate()?;
        self.tsunami.validate()?;
        self.mitigation.validate()?;
        Ok(())
    }
}
