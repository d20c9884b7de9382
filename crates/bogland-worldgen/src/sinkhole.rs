//! Sinkhole placement and periphery growth.
//!
//! All cores are placed first. A second, independent row-major scan then grows
//! a four-armed rosette of side tiles around every core.

use bogland_common::{Cardinal, GridCoord};
use fastrand::Rng;
use tracing::{debug, trace};

use crate::config::{BoundaryMode, GenConfig, FEATURE_DENSITY_SCALE};
use crate::query::{distance_to_sinkhole, is_sinkhole_adjacent};
use crate::terrain::{Terrain, TerrainGrid};

/// Arm growth order around a core.
const ARM_ORDER: [Cardinal; 4] = [
    Cardinal::North,
    Cardinal::South,
    Cardinal::West,
    Cardinal::East,
];

/// Runs both sinkhole phases.
pub fn create_sinkholes(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) {
    let cores = seed_cores(grid, config, rng);
    let sides = grow_peripheries(grid, config, rng);
    debug!("Sinkholes: {cores} cores, {sides} side tiles");
}

/// Places the mandatory first core at a random cell, then scans for more.
///
/// A sand cell with no sinkhole neighbour becomes a core when its draw from
/// `0..=(1000 - sinkhole_density)` is 0 and every existing sinkhole tile is
/// farther than `sinkhole_min_dist + sinkhole_avg_size`. Returns the number of
/// cores placed.
pub fn seed_cores(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) -> usize {
    let mode = config.boundary_mode;
    let first = GridCoord::new(rng.i32(0..grid.width()), rng.i32(0..grid.height()));
    grid.set(first.x, first.y, Terrain::SinkholeCore);
    trace!("First sinkhole core at ({}, {})", first.x, first.y);

    let draw_max = FEATURE_DENSITY_SCALE - config.sinkhole_density;
    let spacing = config.sinkhole_spacing();
    let mut placed = 1;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) != Some(Terrain::Sand) || is_sinkhole_adjacent(grid, x, y, mode) {
                continue;
            }
            if rng.i32(0..=draw_max) != 0 {
                continue;
            }
            if distance_to_sinkhole(grid, x, y, mode) > spacing {
                grid.set(x, y, Terrain::SinkholeCore);
                placed += 1;
                trace!("Sinkhole core at ({x}, {y})");
            }
        }
    }
    placed
}

/// Grows side tiles around every core. Returns the number of tiles written.
pub fn grow_peripheries(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) -> usize {
    let mode = config.boundary_mode;
    let mut written = 0;

    for core in grid.positions_of(Terrain::SinkholeCore) {
        let pointy_offset = rng.i32(0..=1);
        for dir in ARM_ORDER {
            let arm = arm_length(config, rng);
            written += grow_arm(grid, core, dir, arm, pointy_offset, mode);
        }
    }
    written
}

/// Draws one arm length: the average size minus a random deviation, raised
/// to `sinkhole_avg_size - 3` when it falls to or below that floor.
fn arm_length(config: &GenConfig, rng: &mut Rng) -> i32 {
    let arm = config.sinkhole_avg_size - rng.i32(0..=config.sinkhole_size_deviation);
    let floor = config.sinkhole_min_arm();
    if arm <= floor {
        floor
    } else {
        arm
    }
}

/// Walks `arm - 1` steps from `core` along `dir`, laying a perpendicular
/// cross-cut at each step whose half-width tapers from `arm - 1 + pointy`.
fn grow_arm(
    grid: &mut TerrainGrid,
    core: GridCoord,
    dir: Cardinal,
    arm: i32,
    pointy_offset: i32,
    mode: BoundaryMode,
) -> usize {
    let (px, py) = dir.perpendicular();
    let mut written = 0;

    for b in 1..arm {
        let spine = core.step(dir, b);
        if !grid.in_bounds(spine.x, spine.y) {
            break;
        }
        if mode == BoundaryMode::Legacy {
            let mirror = core.step(dir.opposite(), b);
            if !grid.in_bounds(mirror.x, mirror.y) {
                break;
            }
        }

        written += usize::from(grid.fill_sand(spine.x, spine.y, Terrain::SinkholeSide));
        for c in 0..(arm - b + pointy_offset) {
            for sign in [1, -1] {
                let (cx, cy) = (spine.x + px * c * sign, spine.y + py * c * sign);
                written += usize::from(grid.fill_sand(cx, cy, Terrain::SinkholeSide));
            }
        }
    }
    written
}
