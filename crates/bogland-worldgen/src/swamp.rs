//! Swamp seeding and growth.
//!
//! Swamps are seeded at random sand cells and grown by a looping random walk
//! (east, north, west, south) whose cursor drifts between loops. Sinkhole vapour
//! stunts growth, so seeds far from any sinkhole loop more times.

use bogland_common::{Cardinal, GridCoord};
use fastrand::Rng;
use tracing::{debug, trace};

use crate::config::{BoundaryMode, GenConfig, FEATURE_DENSITY_SCALE};
use crate::query::{distance_to_sinkhole, is_sinkhole_adjacent};
use crate::terrain::{Terrain, TerrainGrid};

/// Walk order of one growth loop.
const WALK_ORDER: [Cardinal; 4] = [
    Cardinal::East,
    Cardinal::North,
    Cardinal::West,
    Cardinal::South,
];

/// Shortest and longest leg of the walk.
const LEG_RANGE: std::ops::RangeInclusive<i32> = 1..=3;

/// Seeds and grows every swamp. Returns the number of blobs seeded.
pub fn create_swamps(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) -> usize {
    let mode = config.boundary_mode;
    let draw_max = FEATURE_DENSITY_SCALE - config.swamp_density;
    let mut seeds = 0;
    let mut cells = 0;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) != Some(Terrain::Sand) || is_sinkhole_adjacent(grid, x, y, mode) {
                continue;
            }
            if rng.i32(0..=draw_max) == config.swamp_seed_trigger {
                cells += grow_swamp(grid, x, y, config, rng);
                seeds += 1;
            }
        }
    }

    debug!("Swamps: {seeds} seeds, {cells} cells");
    seeds
}

/// Growth multiplier for a seed at `distance` from the closest sinkhole tile
/// on a grid whose width plus height is `span`.
#[must_use]
pub fn distance_bonus(span: i32, distance: i32) -> i32 {
    let ratio = f64::from(span) / f64::from(distance);
    match ratio {
        r if r < 5.0 => 12,
        r if r < 8.0 => 8,
        r if r < 12.0 => 5,
        r if r < 16.0 => 3,
        _ => 1,
    }
}

/// Grows one swamp blob from `(x, y)`. Returns the number of cells turned to
/// swamp.
pub fn grow_swamp(
    grid: &mut TerrainGrid,
    x: i32,
    y: i32,
    config: &GenConfig,
    rng: &mut Rng,
) -> usize {
    let mode = config.boundary_mode;
    let span = grid.width() + grid.height();
    let bonus = distance_bonus(span, distance_to_sinkhole(grid, x, y, mode));
    trace!("Swamp seed at ({x}, {y}), bonus {bonus}");

    let mut written = 0;
    if !is_sinkhole_adjacent(grid, x, y, mode) {
        written += usize::from(grid.fill_sand(x, y, Terrain::Swamp));
    }

    let mut cursor = GridCoord::new(x, y);
    for _ in 0..rng.i32(1..=2 * bonus) {
        for dir in WALK_ORDER {
            for _ in 0..rng.i32(LEG_RANGE) {
                cursor = cursor.step(dir, 1);
                written += usize::from(mark_swamp(grid, cursor, mode));
                if dir == Cardinal::West && rng.bool() {
                    cursor = cursor.step(Cardinal::West, 1);
                }
            }
        }
    }
    written
}

fn mark_swamp(grid: &mut TerrainGrid, at: GridCoord, mode: BoundaryMode) -> bool {
    // Legacy walks never write the top row.
    if mode == BoundaryMode::Legacy && at.y == 0 {
        return false;
    }
    if is_sinkhole_adjacent(grid, at.x, at.y, mode) {
        return false;
    }
    grid.fill_sand(at.x, at.y, Terrain::Swamp)
}
