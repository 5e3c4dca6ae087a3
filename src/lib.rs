//! Impactcalc - Asteroid Impact and Deflection Calculators
//!
//! A library crate estimating the physical consequences of an asteroid
//! striking the Earth's surface, and what it would take to deflect the
//! asteroid before it arrives.
//!
//! Every entry point is a pure function over physical scalars. Lookups of
//! elevation, land cover and population live in the caller; this crate only
//! consumes their answers through [`site::ImpactSite`].

pub mod assessment;
pub mod config;
pub mod crater;
pub mod error;
pub mod geology;
pub mod impact;
pub mod mitigation;
pub mod neo;
pub mod scenarios;
pub mod site;
pub mod tsunami;
pub mod types;

pub use error::{ImpactError, Result};

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_impact;
