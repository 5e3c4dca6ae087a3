//! Preset scenario definitions.
//!
//! Sizes, speeds and densities follow published estimates for each event
//! or object; sites for hypothetical strikes are chosen to exercise land,
//! coastal and deep-ocean paths.

use crate::site::LandCover;

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[
    CHELYABINSK,
    TUNGUSKA,
    APOPHIS,
    BENNU,
    CHICXULUB,
    MID_ATLANTIC,
];

/// Chelyabinsk, 15 February 2013.
///
/// A ~19 m chondrite that exploded in the air over a city of a million.
/// Treated here as a ground impact, so the result is an upper bound.
pub static CHELYABINSK: Scenario = Scenario {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "19 m stony bolide over a Russian city. Smallest preset.",
    diameter_m: 19.0,
    velocity_kms: 19.16,
    impactor_density_kg_m3: 3300.0,
    lat: 54.8,
    lon: 61.1,
    elevation_m: Some(220.0),
    land_cover: Some(LandCover::Urban),
    population_density_per_km2: Some(2700.0),
    lead_time_years: 0.1,
};

/// Tunguska, 30 June 1908.
///
/// Flattened ~2000 km² of Siberian forest.
pub static TUNGUSKA: Scenario = Scenario {
    id: "tunguska",
    name: "Tunguska",
    description: "50 m object over remote Siberian taiga.",
    diameter_m: 50.0,
    velocity_kms: 27.0,
    impactor_density_kg_m3: 2000.0,
    lat: 60.886,
    lon: 101.894,
    elevation_m: Some(500.0),
    land_cover: Some(LandCover::Vegetation),
    population_density_per_km2: Some(0.1),
    lead_time_years: 2.0,
};

/// Hypothetical Apophis strike in the central Pacific.
pub static APOPHIS: Scenario = Scenario {
    id: "apophis",
    name: "Apophis Ocean Strike",
    description: "370 m Aten asteroid striking the deep Pacific.",
    diameter_m: 370.0,
    velocity_kms: 12.6,
    impactor_density_kg_m3: 3200.0,
    lat: 5.0,
    lon: -150.0,
    elevation_m: Some(-4500.0),
    land_cover: Some(LandCover::Water),
    population_density_per_km2: Some(0.0),
    lead_time_years: 5.0,
};

/// Hypothetical Bennu strike on a low-lying coast.
///
/// Bennu is a rubble pile, barely denser than water.
pub static BENNU: Scenario = Scenario {
    id: "bennu",
    name: "Bennu Coastal Strike",
    description: "490 m rubble pile landing on a low coastal plain. Long warning.",
    diameter_m: 490.0,
    velocity_kms: 12.7,
    impactor_density_kg_m3: 1190.0,
    lat: 36.9,
    lon: -76.2,
    elevation_m: Some(4.0),
    land_cover: Some(LandCover::Vegetation),
    population_density_per_km2: Some(700.0),
    lead_time_years: 150.0,
};

/// Chicxulub, 66 million years ago, into a shallow carbonate sea.
pub static CHICXULUB: Scenario = Scenario {
    id: "chicxulub",
    name: "Chicxulub",
    description: "10 km impactor into a shallow sea. The end of the dinosaurs.",
    diameter_m: 10_000.0,
    velocity_kms: 20.0,
    impactor_density_kg_m3: 2630.0,
    lat: 21.4,
    lon: -89.5,
    elevation_m: Some(-20.0),
    land_cover: Some(LandCover::Water),
    population_density_per_km2: None,
    lead_time_years: 10.0,
};

/// Hypothetical mid-ocean strike far from any coast.
pub static MID_ATLANTIC: Scenario = Scenario {
    id: "mid_atlantic",
    name: "Mid-Atlantic Strike",
    description: "200 m asteroid into the open Atlantic. Elevation unknown.",
    diameter_m: 200.0,
    velocity_kms: 18.0,
    impactor_density_kg_m3: 3000.0,
    lat: 30.0,
    lon: -40.0,
    elevation_m: None,
    land_cover: Some(LandCover::Water),
    population_density_per_km2: None,
    lead_time_years: 20.0,
};
