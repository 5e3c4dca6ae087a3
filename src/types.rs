//! Physical constants and unit conversions shared by every calculator.

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Escape velocity at the Earth's surface (km/s)
pub const EARTH_ESCAPE_VELOCITY_KMS: f64 = 11.2;

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Days per Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds per Julian year
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

/// Convert km/s to m/s
#[inline]
pub fn kms_to_mps(kms: f64) -> f64 {
    kms * 1000.0
}

/// Convert joules to megatons of TNT
#[inline]
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

/// Convert megatons of TNT to joules
#[inline]
pub fn megatons_to_joules(megatons: f64) -> f64 {
    megatons * JOULES_PER_MEGATON
}

/// Convert a lead time in years to seconds
#[inline]
pub fn years_to_seconds(years: f64) -> f64 {
    years * SECONDS_PER_YEAR
}

/// Mass of a homogeneous sphere of the given diameter and density.
///
/// m = ρ × (4/3)π r³
#[inline]
pub fn sphere_mass_kg(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let r = diameter_m / 2.0;
    density_kg_m3 * (4.0 / 3.0) * std::f64::consts::PI * r * r * r
}

/// Round to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
