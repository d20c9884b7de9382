//! Generation tunables.
//!
//! One immutable [`GenConfig`] is passed by reference to every stage. Density
//! knobs are "higher means more likely": the stage draws a uniform integer from
//! `0..=(scale - density)` and fires on a fixed trigger value.

use bogland_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Scale of the sinkhole and swamp density knobs.
pub const FEATURE_DENSITY_SCALE: i32 = 1000;

/// Scale of the nest density knobs.
pub const NEST_DENSITY_SCALE: i32 = 10;

/// How queries and growth treat the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Symmetric in-bounds guards everywhere.
    #[default]
    Clamped,
    /// Historical edge handling kept for map parity: distance scans skip the
    /// last row and column, the lower-left adjacency probe of a left-edge cell
    /// wraps to the last column, periphery arms stop when their mirror step
    /// leaves the grid, and swamp walks never touch row 0.
    Legacy,
}

/// Parameters controlling world generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    // === Sinkholes ===
    /// Sinkhole core spawn chance (0-1000).
    pub sinkhole_density: i32,
    /// Extra spacing between sinkholes on top of `sinkhole_avg_size`.
    pub sinkhole_min_dist: i32,
    /// Average arm length of a sinkhole rosette.
    pub sinkhole_avg_size: i32,
    /// Max amount an arm may fall short of `sinkhole_avg_size`.
    pub sinkhole_size_deviation: i32,

    // === Swamps ===
    /// Swamp seed chance (0-1000).
    pub swamp_density: i32,
    /// Draw value that seeds a swamp.
    pub swamp_seed_trigger: i32,

    // === BC nests ===
    /// BC nest spawn chance (0-10).
    pub bc_nest_density: i32,
    /// Max distance from a BC nest tile to a sinkhole tile.
    pub bc_nest_max_dist: i32,
    /// Plus-radius in which sinkhole and BC tiles are counted.
    pub bc_check_radius: i32,
    /// Sinkhole tiles consumed by each BC tile already in range.
    pub bc_load: i32,
    /// Max extension tiles per BC spawn.
    pub bc_max_nest_size: i32,

    // === SC nests ===
    /// SC nest spawn chance (0-10).
    pub sc_nest_density: i32,
    /// Max distance from an SC nest to a sinkhole tile.
    pub sc_nest_max_hole_dist: i32,
    /// Max distance from an SC nest to a swamp tile.
    pub sc_nest_max_swamp_dist: i32,
    /// Plus-radius in which sinkhole and BC tiles are counted.
    pub sc_check_radius: i32,

    // === Starvation ===
    /// Plus-radius in which SC support is counted.
    pub bc_starve_range: i32,
    /// BC tiles one SC tile can feed.
    pub sc_feed_multiplier: i32,

    /// Edge handling.
    pub boundary_mode: BoundaryMode,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            sinkhole_density: 400,
            sinkhole_min_dist: 14,
            sinkhole_avg_size: 7,
            sinkhole_size_deviation: 2,

            swamp_density: 650,
            swamp_seed_trigger: 2,

            bc_nest_density: 8,
            bc_nest_max_dist: 4,
            bc_check_radius: 16,
            bc_load: 800,
            bc_max_nest_size: 2,

            sc_nest_density: 8,
            sc_nest_max_hole_dist: 14,
            sc_nest_max_swamp_dist: 3,
            sc_check_radius: 30,

            bc_starve_range: 30,
            sc_feed_multiplier: 4,

            boundary_mode: BoundaryMode::Clamped,
        }
    }
}

impl GenConfig {
    /// Checks every knob against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scaled = [
            ("sinkhole_density", self.sinkhole_density, FEATURE_DENSITY_SCALE),
            ("swamp_density", self.swamp_density, FEATURE_DENSITY_SCALE),
            ("bc_nest_density", self.bc_nest_density, NEST_DENSITY_SCALE),
            ("sc_nest_density", self.sc_nest_density, NEST_DENSITY_SCALE),
        ];
        for (field, value, max) in scaled {
            if !(0..=max).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: 0,
                    max,
                });
            }
        }

        let non_negative = [
            ("sinkhole_min_dist", self.sinkhole_min_dist),
            ("sinkhole_avg_size", self.sinkhole_avg_size),
            ("sinkhole_size_deviation", self.sinkhole_size_deviation),
            ("bc_nest_max_dist", self.bc_nest_max_dist),
            ("bc_check_radius", self.bc_check_radius),
            ("bc_load", self.bc_load),
            ("bc_max_nest_size", self.bc_max_nest_size),
            ("sc_nest_max_hole_dist", self.sc_nest_max_hole_dist),
            ("sc_nest_max_swamp_dist", self.sc_nest_max_swamp_dist),
            ("sc_check_radius", self.sc_check_radius),
            ("bc_starve_range", self.bc_starve_range),
            ("sc_feed_multiplier", self.sc_feed_multiplier),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Shortest arm a sinkhole may grow.
    #[must_use]
    pub const fn sinkhole_min_arm(&self) -> i32 {
        self.sinkhole_avg_size - 3
    }

    /// Distance a new core must exceed from every existing sinkhole tile.
    #[must_use]
    pub const fn sinkhole_spacing(&self) -> i32 {
        self.sinkhole_min_dist.saturating_add(self.sinkhole_avg_size)
    }
}
