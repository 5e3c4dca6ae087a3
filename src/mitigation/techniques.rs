//! Deflection technique equivalence calculators.
//!
//! Each calculator answers "what would it take" for one technique family:
//! - Kinetic impactor (DART-style): momentum transfer with ejecta amplification
//! - Gravity tractor: spacecraft mass hovering near the asteroid for the lead time
//! - Nuclear standoff: surface ablation from a detonation at a standoff distance

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, Result};
use crate::types::{joules_to_megatons, kms_to_mps, G};

/// Deflection technique family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionTechnique {
    KineticImpactor,
    GravityTractor,
    NuclearStandoff,
}

impl DeflectionTechnique {
    pub const ALL: [DeflectionTechnique; 3] = [
        DeflectionTechnique::KineticImpactor,
        DeflectionTechnique::GravityTractor,
        DeflectionTechnique::NuclearStandoff,
    ];

    /// Get a short name for this technique.
    pub fn name(&self) -> &'static str {
        match self {
            DeflectionTechnique::KineticImpactor => "Kinetic Impactor",
            DeflectionTechnique::GravityTractor => "Gravity Tractor",
            DeflectionTechnique::NuclearStandoff => "Nuclear Standoff",
        }
    }

    /// Get a description of this technique.
    pub fn description(&self) -> &'static str {
        match self {
            DeflectionTechnique::KineticImpactor => {
                "Kinetic Impactor: Spacecraft collides with the asteroid, ejecta amplify the momentum transfer"
            }
            DeflectionTechnique::GravityTractor => {
                "Gravity Tractor: Spacecraft mass gravitationally pulls asteroid over time"
            }
            DeflectionTechnique::NuclearStandoff => {
                "Nuclear Standoff: Detonation above the surface ablates material, producing thrust"
            }
        }
    }
}

/// Kinetic impactor requirement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KineticResult {
    /// Delta-v from one impactor of the reference mass (m/s).
    pub per_impactor_delta_v_mps: f64,
    /// Mass of a single impactor delivering the full requirement (kg).
    pub impactor_mass_needed_kg: f64,
    /// Reference-mass impactors needed to meet the requirement (≥ 1).
    pub impactors_needed_for_req: u64,
    pub impactor_speed_kms: f64,
    pub beta: f64,
    pub reference_impactor_mass_kg: f64,
}

/// Kinetic impactor equivalence.
///
/// Δv = β × m × v / M per impactor, where β is the momentum enhancement
/// factor from ejecta (DART measured β ≈ 3.6 for Dimorphos).
///
/// # Arguments
/// * `mass_kg` - Asteroid mass (kg)
/// * `delta_v_req` - Required delta-v (m/s)
/// * `impactor_speed_kms` - Impactor closing speed (km/s)
/// * `beta` - Momentum enhancement factor
/// * `impactor_mass_kg` - Reference impactor mass (kg)
pub fn kinetic_impactor_equivalence(
    mass_kg: f64,
    delta_v_req: f64,
    impactor_speed_kms: f64,
    beta: f64,
    impactor_mass_kg: f64,
) -> Result<KineticResult> {
    ensure_positive("mass_kg", mass_kg)?;
    ensure_non_negative("delta_v_req", delta_v_req)?;
    ensure_positive("impactor_speed_kms", impactor_speed_kms)?;
    ensure_positive("beta", beta)?;
    ensure_positive("impactor_mass_kg", impactor_mass_kg)?;

    let v_impactor = kms_to_mps(impactor_speed_kms);
    let per_impactor_delta_v_mps = beta * impactor_mass_kg * v_impactor / mass_kg;
    let impactor_mass_needed_kg = delta_v_req * mass_kg / (beta * v_impactor);
    let impactors_needed_for_req = (delta_v_req / per_impactor_delta_v_mps).ceil().max(1.0) as u64;

    Ok(KineticResult {
        per_impactor_delta_v_mps,
        impactor_mass_needed_kg,
        impactors_needed_for_req,
        impactor_speed_kms,
        beta,
        reference_impactor_mass_kg: impactor_mass_kg,
    })
}

/// A specific gravity tractor spacecraft evaluated against the requirement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedSpacecraft {
    pub mass_kg: f64,
    pub achievable_delta_v_mps: f64,
    pub meets_requirement: bool,
}

/// Gravity tractor requirement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GravityTractorResult {
    /// Hover distance from the asteroid centre (m).
    pub hover_radius_m: f64,
    /// Spacecraft mass needed to deliver the requirement over the lead time (kg).
    pub spacecraft_mass_required_kg: f64,
    pub fixed_spacecraft: Option<FixedSpacecraft>,
}

/// Gravity tractor equivalence.
///
/// The spacecraft hovering at r pulls the asteroid with a = G m / r², so
/// over the lead time t it delivers Δv = G m t / r². Solving for m gives
/// the spacecraft mass needed.
pub fn gravity_tractor_equivalence(
    delta_v_req: f64,
    lead_time_s: f64,
    asteroid_radius_m: f64,
    hover_factor: f64,
    spacecraft_mass_kg: Option<f64>,
) -> Result<GravityTractorResult> {
    ensure_non_negative("delta_v_req", delta_v_req)?;
    ensure_positive("lead_time_s", lead_time_s)?;
    ensure_positive("asteroid_radius_m", asteroid_radius_m)?;
    ensure_positive("hover_factor", hover_factor)?;

    let hover_radius_m = hover_factor * asteroid_radius_m;
    let r2 = hover_radius_m * hover_radius_m;
    let spacecraft_mass_required_kg = delta_v_req * r2 / (G * lead_time_s);

    let fixed_spacecraft = match spacecraft_mass_kg {
        Some(mass_kg) => {
            ensure_positive("spacecraft_mass_kg", mass_kg)?;
            let achievable_delta_v_mps = G * mass_kg * lead_time_s / r2;
            Some(FixedSpacecraft {
                mass_kg,
                achievable_delta_v_mps,
                meets_requirement: achievable_delta_v_mps >= delta_v_req,
            })
        }
        None => None,
    };

    Ok(GravityTractorResult {
        hover_radius_m,
        spacecraft_mass_required_kg,
        fixed_spacecraft,
    })
}

/// Nuclear standoff requirement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NuclearResult {
    /// Detonation distance from the asteroid centre (m).
    pub standoff_distance_m: f64,
    /// Fraction of an isotropic yield intercepted by the asteroid.
    pub geometric_fraction: f64,
    pub required_yield_joules: f64,
    pub required_yield_megatons: f64,
}

/// Nuclear standoff equivalence.
///
/// A detonation at distance d radiates isotropically, so the asteroid's
/// cross-section πR² intercepts R² / (4d²) of the yield. A fraction of the
/// intercepted energy is deposited in the surface and converted to impulse
/// at `momentum_coupling` N·s per joule:
///
/// Δv × M = Y × f_geo × energy_coupling × momentum_coupling
pub fn nuclear_standoff_equivalence(
    mass_kg: f64,
    asteroid_radius_m: f64,
    delta_v_req: f64,
    standoff_factor: f64,
    momentum_coupling: f64,
    energy_coupling_fraction: f64,
) -> Result<NuclearResult> {
    ensure_positive("mass_kg", mass_kg)?;
    ensure_positive("asteroid_radius_m", asteroid_radius_m)?;
    ensure_non_negative("delta_v_req", delta_v_req)?;
    ensure_positive("standoff_factor", standoff_factor)?;
    ensure_positive("momentum_coupling", momentum_coupling)?;
    ensure_positive("energy_coupling_fraction", energy_coupling_fraction)?;

    let standoff_distance_m = standoff_factor * asteroid_radius_m;
    let geometric_fraction = asteroid_radius_m * asteroid_radius_m
        / (4.0 * standoff_distance_m * standoff_distance_m);

    let impulse = delta_v_req * mass_kg;
    let required_yield_joules =
        impulse / (momentum_coupling * energy_coupling_fraction * geometric_fraction);

    Ok(NuclearResult {
        standoff_distance_m,
        geometric_fraction,
        required_yield_joules,
        required_yield_megatons: joules_to_megatons(required_yield_joules),
    })
}
