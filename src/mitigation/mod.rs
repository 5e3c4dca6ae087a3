//! Deflection requirements for a given warning time.
//!
//! Given the asteroid and how long before impact a mission can act, the
//! planner works out how far the asteroid must be pushed (the miss
//! distance, inflated by Earth's gravitational focusing) and the velocity
//! change that achieves it over the lead time. It then expresses that
//! requirement as the equivalent kinetic impactor, gravity tractor and
//! nuclear standoff missions.
//!
//! Unlike the impact calculators, the planner clamps rather than fails on
//! degenerate kinematics (near-escape-velocity impactors, zero warning
//! time) so that it always returns a result for plausible asteroids.

pub mod techniques;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use techniques::{
    gravity_tractor_equivalence, kinetic_impactor_equivalence, nuclear_standoff_equivalence,
    DeflectionTechnique, FixedSpacecraft, GravityTractorResult, KineticResult, NuclearResult,
};

use crate::config::MitigationConfig;
use crate::error::{ensure_positive, Result};
use crate::types::{
    sphere_mass_kg, years_to_seconds, EARTH_ESCAPE_VELOCITY_KMS, EARTH_RADIUS_M, SECONDS_PER_YEAR,
};

/// Floor on hyperbolic excess velocity (km/s), √0.1.
pub const MIN_EXCESS_VELOCITY_KMS: f64 = 0.316;

/// Radicand v² − v_esc² (km²/s²) at or below which the floor applies.
const MIN_EXCESS_RADICAND: f64 = 0.1;

/// Shortest lead time (s) used when dividing by the warning time.
const MIN_LEAD_TIME_S: f64 = 1.0;

/// Asteroid and warning time to plan a deflection for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MitigationRequest {
    pub asteroid_diameter_m: f64,
    pub asteroid_density_kg_m3: f64,
    pub impact_velocity_kms: f64,
    pub lead_time_seconds: f64,
}

impl MitigationRequest {
    /// Build a request with the lead time given in years.
    pub fn from_years(
        asteroid_diameter_m: f64,
        asteroid_density_kg_m3: f64,
        impact_velocity_kms: f64,
        lead_time_years: f64,
    ) -> Self {
        Self {
            asteroid_diameter_m,
            asteroid_density_kg_m3,
            impact_velocity_kms,
            lead_time_seconds: years_to_seconds(lead_time_years),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("asteroid_diameter_m", self.asteroid_diameter_m)?;
        ensure_positive("asteroid_density_kg_m3", self.asteroid_density_kg_m3)?;
        ensure_positive("impact_velocity_kms", self.impact_velocity_kms)?;
        ensure_positive("lead_time_seconds", self.lead_time_seconds)?;
        Ok(())
    }

    pub fn lead_time_years(&self) -> f64 {
        self.lead_time_seconds / SECONDS_PER_YEAR
    }

    pub fn asteroid_radius_m(&self) -> f64 {
        self.asteroid_diameter_m / 2.0
    }
}

/// Deflection requirement and its equivalent missions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MitigationResult {
    pub lead_time_seconds: f64,
    pub lead_time_years: f64,
    pub asteroid_mass_kg: f64,
    pub v_inf_kms: f64,
    pub miss_distance_m: f64,
    pub delta_v_required_mps: f64,
    pub kinetic: KineticResult,
    pub gravity_tractor: GravityTractorResult,
    pub nuclear: NuclearResult,
}

/// Mass (kg) of a spherical asteroid.
///
/// # Errors
/// `InvalidParameter` for non-positive diameter or density.
pub fn asteroid_mass_kg(diameter_m: f64, density: f64) -> Result<f64> {
    ensure_positive("diameter_m", diameter_m)?;
    ensure_positive("density", density)?;
    Ok(sphere_mass_kg(diameter_m, density))
}

/// Hyperbolic excess velocity (km/s) of an impactor arriving at the given speed.
///
/// v_inf = √(v² − v_esc²), with v_esc = 11.2 km/s. Impactors at or near
/// escape velocity get a floor of 0.316 km/s instead of a near-zero or
/// imaginary result.
pub fn infer_excess_velocity_kms(impact_velocity_kms: f64) -> f64 {
    let radicand = impact_velocity_kms * impact_velocity_kms
        - EARTH_ESCAPE_VELOCITY_KMS * EARTH_ESCAPE_VELOCITY_KMS;
    if radicand.is_nan() || radicand <= MIN_EXCESS_RADICAND {
        warn!(
            impact_velocity_kms,
            "impact velocity near escape velocity, excess velocity floored at {} km/s",
            MIN_EXCESS_VELOCITY_KMS
        );
        return MIN_EXCESS_VELOCITY_KMS;
    }
    radicand.sqrt()
}

/// Miss distance (m) needed to clear the Earth.
///
/// Earth's gravity focuses slow asteroids onto it, growing its effective
/// capture radius to R_earth × √(1 + (v_esc/v_inf)²).
pub fn required_miss_distance_m(v_inf_kms: f64, margin_factor: f64) -> f64 {
    let focusing = EARTH_ESCAPE_VELOCITY_KMS / v_inf_kms;
    margin_factor * EARTH_RADIUS_M * (1.0 + focusing * focusing).sqrt()
}

/// Velocity change (m/s) that shifts the asteroid by `miss_distance_m` over
/// the lead time. Lead times under one second are treated as one second.
pub fn required_delta_v_mps(miss_distance_m: f64, lead_time_s: f64) -> f64 {
    if lead_time_s.is_nan() || lead_time_s < MIN_LEAD_TIME_S {
        warn!(lead_time_s, "lead time floored at {} s", MIN_LEAD_TIME_S);
    }
    miss_distance_m / lead_time_s.max(MIN_LEAD_TIME_S)
}

/// Plan a deflection with default coefficients.
pub fn plan_mitigation(request: &MitigationRequest) -> Result<MitigationResult> {
    plan_mitigation_with(request, &MitigationConfig::default())
}

/// Plan a deflection for a single lead-time scenario.
///
/// # Errors
/// `InvalidParameter` for non-positive diameter, density, velocity or lead
/// time, or an invalid config.
pub fn plan_mitigation_with(
    request: &MitigationRequest,
    config: &MitigationConfig,
) -> Result<MitigationResult> {
    request.validate()?;
    config.validate()?;

    let mass_kg = asteroid_mass_kg(request.asteroid_diameter_m, request.asteroid_density_kg_m3)?;
    let radius_m = request.asteroid_radius_m();

    let v_inf_kms = infer_excess_velocity_kms(request.impact_velocity_kms);
    let miss_distance_m = required_miss_distance_m(v_inf_kms, config.margin_factor);
    let delta_v = required_delta_v_mps(miss_distance_m, request.lead_time_seconds);

    let kinetic = kinetic_impactor_equivalence(
        mass_kg,
        delta_v,
        config.impactor_speed_kms,
        config.momentum_enhancement,
        config.impactor_mass_kg,
    )?;
    let gravity_tractor = gravity_tractor_equivalence(
        delta_v,
        request.lead_time_seconds,
        radius_m,
        config.hover_factor,
        config.spacecraft_mass_kg,
    )?;
    let nuclear = nuclear_standoff_equivalence(
        mass_kg,
        radius_m,
        delta_v,
        config.standoff_factor,
        config.momentum_coupling,
        config.energy_coupling_fraction,
    )?;

    debug!(
        lead_time_years = request.lead_time_years(),
        delta_v_required_mps = delta_v,
        impactors = kinetic.impactors_needed_for_req,
        tractor_mass_kg = gravity_tractor.spacecraft_mass_required_kg,
        yield_mt = nuclear.required_yield_megatons,
        "deflection planned"
    );

    Ok(MitigationResult {
        lead_time_seconds: request.lead_time_seconds,
        lead_time_years: request.lead_time_years(),
        asteroid_mass_kg: mass_kg,
        v_inf_kms,
        miss_distance_m,
        delta_v_required_mps: delta_v,
        kinetic,
        gravity_tractor,
        nuclear,
    })
}

/// Plan one deflection per lead time (years), in the order given.
pub fn plan_mitigation_sweep(
    asteroid_diameter_m: f64,
    asteroid_density_kg_m3: f64,
    impact_velocity_kms: f64,
    lead_times_years: &[f64],
    config: &MitigationConfig,
) -> Result<Vec<MitigationResult>> {
    lead_times_years
        .iter()
        .map(|&years| {
            let request = MitigationRequest::from_years(
                asteroid_diameter_m,
                asteroid_density_kg_m3,
                impact_velocity_kms,
                years,
            );
            plan_mitigation_with(&request, config)
        })
        .collect()
}

#[cfg(test)]
mod proptest_mitigation;
