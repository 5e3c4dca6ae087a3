//! End-to-end impact assessment at a site.
//!
//! Chains the calculators in dependency order:
//! impact energetics → geological effects → crater depth → tsunami → exposure.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CoreConfig;
use crate::crater::crater_depth_with;
use crate::error::Result;
use crate::geology::{compute_geological_effects_with, GeologicalEffectsResult};
use crate::impact::{compute_impact_with, ImpactParameters, ImpactResult};
use crate::neo::{ImpactOverrides, NeoRecord};
use crate::site::ImpactSite;
use crate::tsunami::{simulate_with, TsunamiState};

/// People living inside the crater and inside the felt radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExposureEstimate {
    pub crater_population: f64,
    pub felt_population: f64,
}

impl ExposureEstimate {
    /// Uniform-density estimate: density × π r² for each radius.
    pub fn from_density(
        population_density_per_km2: f64,
        crater_radius_km: f64,
        felt_radius_km: f64,
    ) -> Self {
        let disc = |radius_km: f64| population_density_per_km2 * PI * radius_km * radius_km;
        Self {
            crater_population: disc(crater_radius_km),
            felt_population: disc(felt_radius_km),
        }
    }
}

/// Everything the core can say about one impact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub parameters: ImpactParameters,
    pub site: ImpactSite,
    pub ocean_impact: bool,
    pub impact: ImpactResult,
    pub geological: GeologicalEffectsResult,
    pub crater_depth_km: f64,
    pub tsunami: TsunamiState,
    /// `None` when the site's population density is unknown.
    pub exposure: Option<ExposureEstimate>,
}

/// Assess an impact with default coefficients.
pub fn assess_impact(params: &ImpactParameters, site: &ImpactSite) -> Result<ImpactAssessment> {
    assess_impact_with(params, site, &CoreConfig::default())
}

pub fn assess_impact_with(
    params: &ImpactParameters,
    site: &ImpactSite,
    config: &CoreConfig,
) -> Result<ImpactAssessment> {
    site.validate()?;

    let impact = compute_impact_with(params, &config.impact)?;
    let ocean_impact = site.is_ocean_impact();
    let geological = compute_geological_effects_with(
        impact.energy_megatons_tnt,
        impact.crater_diameter_km,
        ocean_impact,
        &config.geology,
    )?;
    let crater_depth_km =
        crater_depth_with(impact.crater_diameter_km, site.elevation_m, &config.crater);

    // Flooding only follows an impact that can raise a wave
    let tsunami = if geological.tsunami_risk.is_threat() {
        simulate_with(
            site.lat,
            site.lon,
            impact.energy_megatons_tnt,
            site.elevation_m,
            &config.tsunami,
        )?
    } else {
        TsunamiState::inland()
    };

    let exposure = site.population_density_per_km2.map(|density| {
        ExposureEstimate::from_density(
            density,
            geological.crater_radius_km,
            geological.felt_radius_km,
        )
    });

    info!(
        lat = site.lat,
        lon = site.lon,
        energy_mt = impact.energy_megatons_tnt,
        crater_km = impact.crater_diameter_km,
        tsunami_risk = geological.tsunami_risk.as_str(),
        "impact assessed"
    );

    Ok(ImpactAssessment {
        parameters: *params,
        site: *site,
        ocean_impact,
        impact,
        geological,
        crater_depth_km,
        tsunami,
        exposure,
    })
}

/// Assess a catalogued object striking the site, taking the target density
/// from the site's land cover.
pub fn assess_neo_impact(
    record: &NeoRecord,
    site: &ImpactSite,
    overrides: &ImpactOverrides,
) -> Result<ImpactAssessment> {
    let params = record.to_impact_parameters(site.target_density_kg_m3(), overrides)?;
    assess_impact(&params, site)
}
