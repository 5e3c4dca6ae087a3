//! Named reference impactors for demonstrations and regression checks.
//!
//! Provides a collection of preset scenarios spanning the size range from
//! airburst-class bolides to a dinosaur killer:
//! - Chelyabinsk airburst
//! - Tunguska event
//! - Apophis ocean strike
//! - Bennu coastal strike
//! - Chicxulub
//! - Mid-Atlantic strike

pub mod presets;

use crate::error::Result;
use crate::impact::ImpactParameters;
use crate::mitigation::MitigationRequest;
use crate::site::{ImpactSite, LandCover};

pub use presets::SCENARIOS;

/// A predefined impact scenario.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Impactor diameter (m).
    pub diameter_m: f64,
    /// Impact velocity (km/s).
    pub velocity_kms: f64,
    /// Impactor bulk density (kg/m³).
    pub impactor_density_kg_m3: f64,
    pub lat: f64,
    pub lon: f64,
    pub elevation_m: Option<f64>,
    pub land_cover: Option<LandCover>,
    pub population_density_per_km2: Option<f64>,
    /// Warning time assumed for deflection planning (years).
    pub lead_time_years: f64,
}

impl Scenario {
    /// Impact site with every known fact attached.
    pub fn site(&self) -> Result<ImpactSite> {
        let site = ImpactSite {
            lat: self.lat,
            lon: self.lon,
            elevation_m: self.elevation_m,
            land_cover: self.land_cover,
            population_density_per_km2: self.population_density_per_km2,
        };
        site.validate()?;
        Ok(site)
    }

    /// Impact parameters, with the target density taken from the site.
    pub fn parameters(&self) -> Result<ImpactParameters> {
        ImpactParameters::new(
            self.diameter_m,
            self.velocity_kms,
            self.impactor_density_kg_m3,
            self.site()?.target_density_kg_m3(),
        )
    }

    /// Deflection request at this scenario's lead time.
    pub fn mitigation_request(&self) -> MitigationRequest {
        MitigationRequest::from_years(
            self.diameter_m,
            self.impactor_density_kg_m3,
            self.velocity_kms,
            self.lead_time_years,
        )
    }
}

/// Look up a preset scenario by id.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.id == id)
}
