//! Synthetic flood-extent grid.
//!
//! This is NOT a hydrodynamic model. The terrain is a synthetic square grid
//! centred on the impact site, flat along longitude and rising linearly
//! with latitude. A cell floods when its elevation is below the site
//! elevation plus the wave height. The only guarantees are that the result
//! is deterministic and that the flooded area never shrinks as the wave
//! grows; it says nothing about real coastlines.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wide::f64x4;

use crate::config::TsunamiConfig;
use crate::error::{ensure_non_negative, ensure_within, Result};

/// One flooded grid cell mapped back to geographic coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodCell {
    pub lat: f64,
    pub lon: f64,
    pub elevation_m: f64,
}

/// Flooded cells of the local grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodExtent {
    /// Flooded cells in row-major order (south to north, west to east),
    /// truncated to the reporting cap.
    pub cells: Vec<FloodCell>,
    /// Total number of flooded cells before truncation.
    pub total_flooded: usize,
    /// Total number of cells in the grid.
    pub grid_cells: usize,
}

impl FloodExtent {
    pub fn is_truncated(&self) -> bool {
        self.total_flooded > self.cells.len()
    }

    /// Fraction of the grid under water.
    pub fn flooded_fraction(&self) -> f64 {
        if self.grid_cells == 0 {
            return 0.0;
        }
        self.total_flooded as f64 / self.grid_cells as f64
    }
}

/// Square elevation grid centred on a site.
#[derive(Clone, Debug)]
pub struct FloodGrid {
    /// Grid centre as (lon, lat) in degrees.
    center: DVec2,
    base_elevation_m: f64,
    grid_size: usize,
    cell_size_deg: f64,
    slope_m_per_cell: f64,
}

impl FloodGrid {
    pub fn new(lat: f64, lon: f64, base_elevation_m: f64, config: &TsunamiConfig) -> Result<Self> {
        ensure_within("lat", lat, -90.0, 90.0)?;
        ensure_within("lon", lon, -180.0, 180.0)?;
        ensure_within("base_elevation_m", base_elevation_m, f64::MIN, f64::MAX)?;
        config.validate()?;

        Ok(Self {
            center: DVec2::new(lon, lat),
            base_elevation_m,
            grid_size: config.grid_size,
            cell_size_deg: config.cell_size_deg,
            slope_m_per_cell: config.slope_m_per_cell,
        })
    }

    /// Signed cell offset of grid index `i` from the centre.
    #[inline]
    fn offset(&self, i: usize) -> f64 {
        i as f64 - (self.grid_size / 2) as f64
    }

    /// Geographic position (lon, lat) of the cell at the given offsets.
    ///
    /// Longitude wraps into [-180, 180) across the antimeridian; latitude
    /// clamps to the pole.
    #[inline]
    fn cell_position(&self, x_offset: f64, y_offset: f64) -> DVec2 {
        let pos = self.center + DVec2::new(x_offset, y_offset) * self.cell_size_deg;
        DVec2::new(
            (pos.x + 180.0).rem_euclid(360.0) - 180.0,
            pos.y.clamp(-90.0, 90.0),
        )
    }

    /// Elevation of every grid row, south to north.
    ///
    /// Uses f64x4 to evaluate four rows per step.
    pub fn row_elevations(&self) -> Vec<f64> {
        let n = self.grid_size;
        let mut elevations = Vec::with_capacity(n);

        let base = f64x4::new([self.base_elevation_m; 4]);
        let slope = f64x4::new([self.slope_m_per_cell; 4]);

        for start in (0..n).step_by(4) {
            let lane = |k: usize| self.offset((start + k).min(n - 1));
            let offsets = f64x4::new([lane(0), lane(1), lane(2), lane(3)]);
            let rows = (base + slope * offsets).to_array();

            let valid = (n - start).min(4);
            elevations.extend_from_slice(&rows[..valid]);
        }

        elevations
    }

    /// Flood the grid with a wave of the given height.
    pub fn flood(&self, wave_height_m: f64, max_reported_cells: usize) -> Result<FloodExtent> {
        ensure_non_negative("wave_height_m", wave_height_m)?;

        let water_level = self.base_elevation_m + wave_height_m;
        let mut cells = Vec::with_capacity(max_reported_cells.min(self.grid_size * self.grid_size));
        let mut total_flooded = 0;

        for (row, elevation_m) in self.row_elevations().into_iter().enumerate() {
            if elevation_m >= water_level {
                continue;
            }
            // Elevation only varies by row, so the whole row floods together
            total_flooded += self.grid_size;

            let y_offset = self.offset(row);
            for col in 0..self.grid_size {
                if cells.len() >= max_reported_cells {
                    break;
                }
                let pos = self.cell_position(self.offset(col), y_offset);
                cells.push(FloodCell {
                    lat: pos.y,
                    lon: pos.x,
                    elevation_m,
                });
            }
        }

        let extent = FloodExtent {
            cells,
            total_flooded,
            grid_cells: self.grid_size * self.grid_size,
        };

        if extent.is_truncated() {
            warn!(
                total_flooded,
                reported = extent.cells.len(),
                "flood extent truncated to reporting cap"
            );
        }
        debug!(wave_height_m, total_flooded, "flood extent computed");

        Ok(extent)
    }
}
