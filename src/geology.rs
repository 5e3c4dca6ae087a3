//! Secondary geological effects of an impact.
//!
//! Seismic magnitude uses the Gutenberg-Richter energy relation
//! M = (log10(E_seismic) − 4.8) / 1.5, where E_seismic is the fraction η of
//! the impact energy coupled into seismic waves. Since η is poorly
//! constrained (10⁻⁶ to 10⁻⁴), a magnitude is reported for each value,
//! giving a plausible range rather than a point estimate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeologyConfig;
use crate::error::{ensure_non_negative, ImpactError, Result};
use crate::types::{megatons_to_joules, round2};

/// Qualitative tsunami risk of an ocean impact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TsunamiRisk {
    #[default]
    None,
    Local,
    Regional,
}

impl TsunamiRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            TsunamiRisk::None => "none",
            TsunamiRisk::Local => "local",
            TsunamiRisk::Regional => "regional",
        }
    }

    pub fn is_threat(&self) -> bool {
        !matches!(self, TsunamiRisk::None)
    }
}

/// Seismic and tsunami consequences of an impact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeologicalEffectsResult {
    pub energy_joules: f64,
    /// Moment magnitudes, one per seismic efficiency, ascending.
    pub magnitude_estimates: [f64; 3],
    pub tsunami_risk: TsunamiRisk,
    pub felt_radius_km: f64,
    pub crater_radius_km: f64,
}

impl GeologicalEffectsResult {
    pub fn max_magnitude(&self) -> f64 {
        self.magnitude_estimates
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_magnitude(&self) -> f64 {
        self.magnitude_estimates
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}

/// Moment magnitude for seismic energy `efficiency × energy_joules`.
///
/// # Errors
/// `DomainError` when the coupled energy is not positive.
pub fn seismic_magnitude(energy_joules: f64, efficiency: f64) -> Result<f64> {
    let seismic_joules = efficiency * energy_joules;
    if !seismic_joules.is_finite() || seismic_joules <= 0.0 {
        return Err(ImpactError::DomainError {
            operation: "seismic magnitude",
            value: seismic_joules,
            reason: "log10 requires positive seismic energy",
        });
    }
    Ok((seismic_joules.log10() - 4.8) / 1.5)
}

/// Classify the tsunami risk of an impact.
///
/// Land impacts never raise a tsunami, regardless of energy.
pub fn classify_tsunami_risk(
    energy_joules: f64,
    ocean_impact: bool,
    config: &GeologyConfig,
) -> TsunamiRisk {
    if !ocean_impact {
        return TsunamiRisk::None;
    }
    if energy_joules > config.regional_tsunami_joules {
        TsunamiRisk::Regional
    } else if energy_joules > config.local_tsunami_joules {
        TsunamiRisk::Local
    } else {
        TsunamiRisk::None
    }
}

/// Distance (km) out to which shaking of the given magnitude is felt.
pub fn felt_radius_km(magnitude: f64, config: &GeologyConfig) -> f64 {
    config
        .felt_radius_bands
        .iter()
        .find(|band| magnitude >= band.min_magnitude)
        .map(|band| band.radius_km)
        .unwrap_or(config.min_felt_radius_km)
}

/// Derive seismic magnitudes, felt radius and tsunami risk from impact energy.
///
/// # Errors
/// - `InvalidParameter` if energy or crater diameter is negative.
/// - `DomainError` if energy is zero, since the magnitude relation is undefined.
pub fn compute_geological_effects(
    energy_megatons_tnt: f64,
    crater_diameter_km: f64,
    ocean_impact: bool,
) -> Result<GeologicalEffectsResult> {
    compute_geological_effects_with(
        energy_megatons_tnt,
        crater_diameter_km,
        ocean_impact,
        &GeologyConfig::default(),
    )
}

pub fn compute_geological_effects_with(
    energy_megatons_tnt: f64,
    crater_diameter_km: f64,
    ocean_impact: bool,
    config: &GeologyConfig,
) -> Result<GeologicalEffectsResult> {
    ensure_non_negative("energy_megatons_tnt", energy_megatons_tnt)?;
    ensure_non_negative("crater_diameter_km", crater_diameter_km)?;
    config.validate()?;

    let energy_joules = megatons_to_joules(energy_megatons_tnt);

    let mut magnitude_estimates = [0.0; 3];
    for (slot, &eta) in magnitude_estimates.iter_mut().zip(&config.seismic_efficiencies) {
        *slot = round2(seismic_magnitude(energy_joules, eta)?);
    }

    let mut result = GeologicalEffectsResult {
        energy_joules,
        magnitude_estimates,
        tsunami_risk: classify_tsunami_risk(energy_joules, ocean_impact, config),
        felt_radius_km: config.min_felt_radius_km,
        crater_radius_km: round2(crater_diameter_km / 2.0),
    };
    result.felt_radius_km = felt_radius_km(result.max_magnitude(), config);

    debug!(
        ?magnitude_estimates,
        tsunami_risk = result.tsunami_risk.as_str(),
        felt_radius_km = result.felt_radius_km,
        "computed geological effects"
    );

    Ok(result)
}
