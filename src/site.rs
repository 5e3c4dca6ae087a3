//! Facts about the impact site supplied by external lookups.
//!
//! Elevation, land cover and population density come from collaborating
//! services outside this crate. Each may be unknown; unknown is kept as
//! `None` and only replaced by a default where a calculation documents one.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_within, Result};

/// Target density (kg/m³) of open water.
pub const WATER_DENSITY_KG_M3: f64 = 1000.0;

/// Target density (kg/m³) of vegetated soil.
pub const VEGETATION_DENSITY_KG_M3: f64 = 1500.0;

/// Target density (kg/m³) of rock, urban fill and anything unclassified.
pub const ROCK_DENSITY_KG_M3: f64 = 2500.0;

/// Surface class at the impact site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCover {
    Water,
    Vegetation,
    Urban,
    Other,
}

const WATER_KEYWORDS: &[&str] = &[
    "water", "ocean", "sea", "lake", "river", "reservoir", "bay", "estuary", "marsh",
];

const VEGETATION_KEYWORDS: &[&str] = &[
    "forest", "woodland", "shrub", "shrubland", "grass", "grassland", "vegetation", "crop",
    "cropland", "meadow", "savanna", "tundra", "wetland",
];

const URBAN_KEYWORDS: &[&str] = &[
    "developed", "urban", "built", "city", "residential", "industrial",
];

/// Whole-word match, allowing a plural "s".
fn is_keyword(word: &str, keyword: &str) -> bool {
    word == keyword || word.strip_suffix('s') == Some(keyword)
}

impl LandCover {
    /// Classify a free-text land-cover label, e.g. "Open Water" or
    /// "Developed, Medium Intensity".
    ///
    /// The label is split into words on anything not alphanumeric, so
    /// "Seasonally" never matches "sea". Keyword families are checked in the
    /// order water, vegetation, urban; the first family that matches wins.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        let words: Vec<&str> = label
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let mentions = |keywords: &[&str]| {
            words
                .iter()
                .any(|word| keywords.iter().any(|k| is_keyword(word, k)))
        };

        if mentions(WATER_KEYWORDS) {
            LandCover::Water
        } else if mentions(VEGETATION_KEYWORDS) {
            LandCover::Vegetation
        } else if mentions(URBAN_KEYWORDS) {
            LandCover::Urban
        } else {
            LandCover::Other
        }
    }

    /// Density of the surface material, used as the crater target density.
    pub fn target_density_kg_m3(&self) -> f64 {
        match self {
            LandCover::Water => WATER_DENSITY_KG_M3,
            LandCover::Vegetation => VEGETATION_DENSITY_KG_M3,
            LandCover::Urban | LandCover::Other => ROCK_DENSITY_KG_M3,
        }
    }
}

/// Where the asteroid strikes, and what is known about that place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactSite {
    pub lat: f64,
    pub lon: f64,
    pub elevation_m: Option<f64>,
    pub land_cover: Option<LandCover>,
    pub population_density_per_km2: Option<f64>,
}

impl ImpactSite {
    /// A site with nothing known beyond its coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let site = Self {
            lat,
            lon,
            elevation_m: None,
            land_cover: None,
            population_density_per_km2: None,
        };
        site.validate()?;
        Ok(site)
    }

    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = Some(elevation_m).filter(|e| e.is_finite());
        self
    }

    pub fn with_land_cover(mut self, land_cover: LandCover) -> Self {
        self.land_cover = Some(land_cover);
        self
    }

    pub fn with_population_density(mut self, per_km2: f64) -> Self {
        self.population_density_per_km2 = Some(per_km2);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_within("lat", self.lat, -90.0, 90.0)?;
        ensure_within("lon", self.lon, -180.0, 180.0)?;
        if let Some(density) = self.population_density_per_km2 {
            ensure_non_negative("population_density_per_km2", density)?;
        }
        Ok(())
    }

    /// Target density for the crater scaling law; unknown cover is rock.
    pub fn target_density_kg_m3(&self) -> f64 {
        self.land_cover
            .map(|cover| cover.target_density_kg_m3())
            .unwrap_or(ROCK_DENSITY_KG_M3)
    }

    /// Whether the asteroid lands in water: open-water cover, or a known
    /// elevation below sea level.
    ///
    /// A low-lying coastal site on dry land is not an ocean impact, so
    /// [`crate::assessment::assess_impact`] never floods it. Flooding of such
    /// a site is only available through a direct [`crate::tsunami::simulate`]
    /// call.
    pub fn is_ocean_impact(&self) -> bool {
        matches!(self.land_cover, Some(LandCover::Water))
            || self.elevation_m.is_some_and(|e| e < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_policy() {
        assert_eq!(LandCover::Water.target_density_kg_m3(), 1000.0);
        assert_eq!(LandCover::Vegetation.target_density_kg_m3(), 1500.0);
        assert_eq!(LandCover::Urban.target_density_kg_m3(), 2500.0);
        assert_eq!(LandCover::Other.target_density_kg_m3(), 2500.0);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(LandCover::from_label("Open Water"), LandCover::Water);
        assert_eq!(LandCover::from_label("Great Lakes Shoreline"), LandCover::Water);
        assert_eq!(LandCover::from_label("Deciduous FOREST"), LandCover::Vegetation);
        assert_eq!(LandCover::from_label("Temperate Grassland"), LandCover::Vegetation);
        assert_eq!(LandCover::from_label("Developed, High Intensity"), LandCover::Urban);
        assert_eq!(LandCover::from_label("Barren Rock"), LandCover::Other);
        assert_eq!(LandCover::from_label(""), LandCover::Other);
    }

    #[test]
    fn test_from_label_matches_whole_words() {
        assert_eq!(
            LandCover::from_label("Tropical Seasonally Dry Forest"),
            LandCover::Vegetation
        );
        assert_eq!(
            LandCover::from_label("Riverine Forest & Woodland"),
            LandCover::Vegetation
        );
        assert_eq!(LandCover::from_label("Research Station Grounds"), LandCover::Other);
        assert_eq!(LandCover::from_label("Open Seas"), LandCover::Water);
        assert_eq!(LandCover::from_label("Mixed Shrublands"), LandCover::Vegetation);
        assert_eq!(LandCover::from_label("Built-up area"), LandCover::Urban);
    }

    #[test]
    fn test_dry_forest_label_is_not_ocean() {
        let cover = LandCover::from_label("Tropical Seasonally Dry Forest");
        let site = ImpactSite::new(10.0, 20.0)
            .unwrap()
            .with_elevation(150.0)
            .with_land_cover(cover);

        assert_eq!(site.target_density_kg_m3(), 1500.0);
        assert!(!site.is_ocean_impact());
    }

    #[test]
    fn test_unknown_cover_is_rock() {
        let site = ImpactSite::new(40.0, -74.0).unwrap();
        assert_eq!(site.target_density_kg_m3(), 2500.0);
    }

    #[test]
    fn test_ocean_inference() {
        let open_sea = ImpactSite::new(30.0, -40.0)
            .unwrap()
            .with_land_cover(LandCover::Water);
        assert!(open_sea.is_ocean_impact());

        let seabed = ImpactSite::new(30.0, -40.0).unwrap().with_elevation(-4200.0);
        assert!(seabed.is_ocean_impact());

        // Low but dry
        let beach = ImpactSite::new(30.0, -40.0)
            .unwrap()
            .with_elevation(3.0)
            .with_land_cover(LandCover::Urban);
        assert!(!beach.is_ocean_impact());

        // Nothing known
        assert!(!ImpactSite::new(30.0, -40.0).unwrap().is_ocean_impact());
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        assert!(ImpactSite::new(91.0, 0.0).is_err());
        assert!(ImpactSite::new(0.0, 200.0).is_err());
        assert!(ImpactSite::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_rejects_negative_population() {
        let site = ImpactSite::new(0.0, 0.0).unwrap().with_population_density(-1.0);
        assert!(site.validate().is_err());
    }

    #[test]
    fn test_non_finite_elevation_is_unknown() {
        let site = ImpactSite::new(0.0, 0.0).unwrap().with_elevation(f64::NAN);
        assert_eq!(site.elevation_m, None);
    }
}
