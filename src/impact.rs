//! Impact energetics and crater scaling.
//!
//! Converts the size, speed and density of an impactor into its mass,
//! kinetic energy and final crater diameter using the Collins et al.
//! empirical scaling law:
//!
//! D_crater = k × (ρ_i/ρ_t)^(1/3) × D^0.78 × v^0.44
//!
//! with D in meters and v in m/s.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ImpactConfig;
use crate::error::{ensure_positive, Result};
use crate::types::{joules_to_megatons, kms_to_mps, sphere_mass_kg};

/// Typical stony asteroid bulk density (kg/m³).
pub const DEFAULT_IMPACTOR_DENSITY_KG_M3: f64 = 3000.0;

/// Average crustal target density (kg/m³).
pub const DEFAULT_TARGET_DENSITY_KG_M3: f64 = 2500.0;

/// Size, speed and densities describing a single impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Impactor diameter (m).
    pub diameter_m: f64,
    /// Impact velocity (km/s).
    pub velocity_kms: f64,
    /// Impactor bulk density (kg/m³).
    pub impactor_density_kg_m3: f64,
    /// Surface material density at the impact site (kg/m³).
    pub target_density_kg_m3: f64,
}

impl ImpactParameters {
    /// Build validated parameters. Every field must be finite and positive.
    pub fn new(
        diameter_m: f64,
        velocity_kms: f64,
        impactor_density_kg_m3: f64,
        target_density_kg_m3: f64,
    ) -> Result<Self> {
        let params = Self {
            diameter_m,
            velocity_kms,
            impactor_density_kg_m3,
            target_density_kg_m3,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parameters with the default stony impactor and crustal target densities.
    pub fn rocky(diameter_m: f64, velocity_kms: f64) -> Result<Self> {
        Self::new(
            diameter_m,
            velocity_kms,
            DEFAULT_IMPACTOR_DENSITY_KG_M3,
            DEFAULT_TARGET_DENSITY_KG_M3,
        )
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("diameter_m", self.diameter_m)?;
        ensure_positive("velocity_kms", self.velocity_kms)?;
        ensure_positive("impactor_density_kg_m3", self.impactor_density_kg_m3)?;
        ensure_positive("target_density_kg_m3", self.target_density_kg_m3)?;
        Ok(())
    }

    pub fn mass_kg(&self) -> f64 {
        sphere_mass_kg(self.diameter_m, self.impactor_density_kg_m3)
    }
}

/// Energetics and crater size of an impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub mass_kg: f64,
    pub energy_joules: f64,
    pub energy_megatons_tnt: f64,
    pub crater_diameter_km: f64,
}

/// Compute mass, kinetic energy and crater diameter of an impact.
///
/// # Errors
/// `InvalidParameter` if any input is non-positive or non-finite.
pub fn compute_impact(
    diameter_m: f64,
    velocity_kms: f64,
    impactor_density: f64,
    target_density: f64,
) -> Result<ImpactResult> {
    let params = ImpactParameters::new(diameter_m, velocity_kms, impactor_density, target_density)?;
    compute_impact_with(&params, &ImpactConfig::default())
}

/// Compute an impact with explicit scaling coefficients.
pub fn compute_impact_with(
    params: &ImpactParameters,
    config: &ImpactConfig,
) -> Result<ImpactResult> {
    params.validate()?;
    config.validate()?;

    let mass_kg = params.mass_kg();

    // E = ½ m v²
    let v = kms_to_mps(params.velocity_kms);
    let energy_joules = 0.5 * mass_kg * v * v;
    let energy_megatons_tnt = joules_to_megatons(energy_joules);

    let density_ratio = params.impactor_density_kg_m3 / params.target_density_kg_m3;
    let crater_diameter_m = config.crater_scaling_k
        * density_ratio.cbrt()
        * params.diameter_m.powf(config.diameter_exponent)
        * v.powf(config.velocity_exponent);
    let crater_diameter_km = crater_diameter_m / 1000.0;

    debug!(
        mass_kg,
        energy_megatons_tnt,
        crater_diameter_km,
        "computed impact energetics"
    );

    Ok(ImpactResult {
        mass_kg,
        energy_joules,
        energy_megatons_tnt,
        crater_diameter_km,
    })
}
