//! Near-Earth object catalogue records.
//!
//! Mirrors the fields a NEO catalogue lookup returns that matter for an
//! impact estimate, and turns them into [`ImpactParameters`]. Fetching the
//! record is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive, Result};
use crate::impact::{ImpactParameters, DEFAULT_IMPACTOR_DENSITY_KG_M3};

/// Impact velocity (km/s) assumed when a record has no usable close approach.
pub const DEFAULT_IMPACT_VELOCITY_KMS: f64 = 20.0;

/// Catalogue diameter bounds, derived from absolute magnitude and an
/// assumed albedo range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub min_m: f64,
    pub max_m: f64,
}

impl EstimatedDiameter {
    pub fn mean_m(&self) -> f64 {
        (self.min_m + self.max_m) / 2.0
    }
}

/// One recorded or predicted close approach.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub date: String,
    pub velocity_kms: f64,
    pub miss_distance_km: f64,
    pub orbiting_body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub potentially_hazardous: bool,
    #[serde(default)]
    pub close_approaches: Vec<CloseApproach>,
}

/// Caller-supplied values that replace catalogue data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactOverrides {
    pub velocity_kms: Option<f64>,
    pub diameter_m: Option<f64>,
    pub impactor_density_kg_m3: Option<f64>,
}

impl ImpactOverrides {
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = self.velocity_kms {
            ensure_positive("velocity_kms", v)?;
        }
        if let Some(d) = self.diameter_m {
            ensure_positive("diameter_m", d)?;
        }
        if let Some(rho) = self.impactor_density_kg_m3 {
            ensure_positive("impactor_density_kg_m3", rho)?;
        }
        Ok(())
    }
}

impl NeoRecord {
    /// Mean of the catalogue diameter bounds (m).
    pub fn diameter_m(&self) -> f64 {
        self.estimated_diameter.mean_m()
    }

    /// Relative velocity of the first close approach, or 20 km/s when
    /// there is none or it is unusable.
    pub fn impact_velocity_kms(&self) -> f64 {
        self.close_approaches
            .first()
            .map(|approach| approach.velocity_kms)
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_IMPACT_VELOCITY_KMS)
    }

    /// Closest recorded approach to the Earth, if any.
    pub fn closest_earth_approach(&self) -> Option<&CloseApproach> {
        self.close_approaches
            .iter()
            .filter(|approach| approach.orbiting_body.eq_ignore_ascii_case("earth"))
            .min_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km))
    }

    /// Build impact parameters for this object striking a surface of the
    /// given density.
    ///
    /// # Errors
    /// `InvalidParameter` if an override or the resulting parameters are
    /// non-positive.
    pub fn to_impact_parameters(
        &self,
        target_density_kg_m3: f64,
        overrides: &ImpactOverrides,
    ) -> Result<ImpactParameters> {
        overrides.validate()?;

        let params = ImpactParameters::new(
            overrides.diameter_m.unwrap_or_else(|| self.diameter_m()),
            overrides.velocity_kms.unwrap_or_else(|| self.impact_velocity_kms()),
            overrides
                .impactor_density_kg_m3
                .unwrap_or(DEFAULT_IMPACTOR_DENSITY_KG_M3),
            target_density_kg_m3,
        )?;

        debug!(id = %self.id, name = %self.name, ?params, "impact parameters from NEO record");
        Ok(params)
    }
}
