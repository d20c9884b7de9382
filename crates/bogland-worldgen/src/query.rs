//! Read-only distance and adjacency queries over a terrain grid.
//!
//! Every generation stage leans on these. They are brute force: a distance
//! query walks the whole grid and a plus-radius count walks `4 * radius + 1`
//! cells.

use bogland_common::GridCoord;

use crate::config::BoundaryMode;
use crate::terrain::{Terrain, TerrainGrid};

/// Distance returned when no cell matches.
pub const NO_MATCH_DISTANCE: i32 = i32::MAX;

/// Matches a terrain tag. `Terrain::is_*` methods coerce to this.
pub type TerrainPredicate = fn(Terrain) -> bool;

/// Manhattan distance from `(x, y)` to the closest cell matching `predicate`,
/// or [`NO_MATCH_DISTANCE`].
///
/// In [`BoundaryMode::Legacy`] the last row and last column are never scanned.
#[must_use]
pub fn distance_to_nearest(
    grid: &TerrainGrid,
    x: i32,
    y: i32,
    mode: BoundaryMode,
    predicate: TerrainPredicate,
) -> i32 {
    let (scan_w, scan_h) = match mode {
        BoundaryMode::Clamped => (grid.width(), grid.height()),
        BoundaryMode::Legacy => (grid.width() - 1, grid.height() - 1),
    };
    let origin = GridCoord::new(x, y);

    grid.iter()
        .filter(|&(c, t)| c.x < scan_w && c.y < scan_h && predicate(t))
        .map(|(c, _)| origin.manhattan(c))
        .min()
        .unwrap_or(NO_MATCH_DISTANCE)
}

/// Distance to the closest sinkhole core or side tile.
#[must_use]
pub fn distance_to_sinkhole(grid: &TerrainGrid, x: i32, y: i32, mode: BoundaryMode) -> i32 {
    distance_to_nearest(grid, x, y, mode, Terrain::is_sinkhole)
}

/// Whether any of the eight neighbours of `(x, y)` is a sinkhole tile.
///
/// [`BoundaryMode::Legacy`] adds one probe: a cell in column 0 also looks at
/// the last column of the row below it.
#[must_use]
pub fn is_sinkhole_adjacent(grid: &TerrainGrid, x: i32, y: i32, mode: BoundaryMode) -> bool {
    let is_hole = |nx: i32, ny: i32| grid.get(nx, ny).is_some_and(Terrain::is_sinkhole);

    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx, dy) != (0, 0) && is_hole(x + dx, y + dy) {
                return true;
            }
        }
    }

    mode == BoundaryMode::Legacy && x == 0 && is_hole(grid.width() - 1, y + 1)
}

/// Counts cells matching each predicate on a plus-shaped footprint: the centre
/// once, then `radius` cells along each of the four cardinal rays.
///
/// Diagonal cells are never visited. Rays stop at the grid edge, so any radius
/// beyond the longer grid side counts the same as that side.
#[must_use]
pub fn count_in_plus_radius<const N: usize>(
    grid: &TerrainGrid,
    x: i32,
    y: i32,
    radius: i32,
    predicates: [TerrainPredicate; N],
) -> [i32; N] {
    let mut totals = [0; N];
    let mut tally = |t: Terrain| {
        for (total, predicate) in totals.iter_mut().zip(predicates) {
            if predicate(t) {
                *total += 1;
            }
        }
    };

    if let Some(t) = grid.get(x, y) {
        tally(t);
    }
    let reach = radius.min(grid.width().max(grid.height()));
    for step in 1..=reach {
        for (nx, ny) in [
            (x, y.saturating_sub(step)),
            (x, y.saturating_add(step)),
            (x.saturating_add(step), y),
            (x.saturating_sub(step), y),
        ] {
            if let Some(t) = grid.get(nx, ny) {
                tally(t);
            }
        }
    }
    totals
}
