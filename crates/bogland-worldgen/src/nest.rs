//! Creature nest placement.
//!
//! BC nests cling to sinkholes and may sprout extra tiles when the sinkhole
//! tiles around them outweigh the BC tiles already there. SC nests need both a
//! nearby swamp and a nearby sinkhole, and only settle where the swamp is
//! closer than any BC nest.

use bogland_common::{Cardinal, GridCoord};
use fastrand::Rng;
use tracing::{debug, trace};

use crate::config::{GenConfig, NEST_DENSITY_SCALE};
use crate::query::{count_in_plus_radius, distance_to_nearest, distance_to_sinkhole};
use crate::terrain::{Terrain, TerrainGrid};

/// Draw value that starts a nest spawn attempt.
const SPAWN_TRIGGER: i32 = 1;

/// Tiles written by the nest stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NestReport {
    /// BC tiles placed, extensions included.
    pub bc_tiles: usize,
    /// SC tiles placed, dry and swamp variants together.
    pub sc_tiles: usize,
}

/// Places BC nests, then SC nests.
pub fn create_nests(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) -> NestReport {
    let report = NestReport {
        bc_tiles: create_bc_nests(grid, config, rng),
        sc_tiles: create_sc_nests(grid, config, rng),
    };
    debug!(
        "Nests: {} BC tiles, {} SC tiles",
        report.bc_tiles, report.sc_tiles
    );
    report
}

/// Row-major BC spawn scan. Returns the number of BC tiles placed.
pub fn create_bc_nests(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) -> usize {
    let mode = config.boundary_mode;
    let draw_max = NEST_DENSITY_SCALE - config.bc_nest_density;
    let mut placed = 0;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if rng.i32(0..=draw_max) != SPAWN_TRIGGER {
                continue;
            }
            if distance_to_sinkhole(grid, x, y, mode) <= config.bc_nest_max_dist {
                placed += spawn_bc_nest(grid, x, y, config, rng);
            }
        }
    }
    placed
}

/// Spawns a BC nest on the sand cell `(x, y)` and rolls for extension tiles.
///
/// The surplus is the sinkhole tiles in a plus-radius of `bc_check_radius`
/// minus `bc_load` for every BC tile already there, clamped to
/// `0..=bc_max_nest_size`. Extension `k` lands `k` cells out in a random
/// cardinal direction. Returns the number of tiles placed.
pub fn spawn_bc_nest(
    grid: &mut TerrainGrid,
    x: i32,
    y: i32,
    config: &GenConfig,
    rng: &mut Rng,
) -> usize {
    if grid.get(x, y) != Some(Terrain::Sand) {
        return 0;
    }
    let mode = config.boundary_mode;
    let [holes, bc] = count_in_plus_radius(
        grid,
        x,
        y,
        config.bc_check_radius,
        [Terrain::is_sinkhole, Terrain::is_bc_nest],
    );
    let surplus = holes
        .saturating_sub(bc.saturating_mul(config.bc_load))
        .clamp(0, config.bc_max_nest_size);

    grid.set(x, y, Terrain::NestBc);
    let mut placed = 1;
    trace!("BC nest at ({x}, {y}), surplus {surplus}");

    let draw_max = NEST_DENSITY_SCALE - config.bc_nest_density;
    let centre = GridCoord::new(x, y);
    for k in 1..=surplus {
        if rng.i32(0..=draw_max) != 0 {
            continue;
        }
        let dir = Cardinal::ALL[rng.usize(..Cardinal::ALL.len())];
        let target = centre.step(dir, k);
        if grid.at(target) == Some(Terrain::Sand)
            && distance_to_sinkhole(grid, target.x, target.y, mode) <= config.bc_nest_max_dist
        {
            grid.set(target.x, target.y, Terrain::NestBc);
            placed += 1;
        }
    }
    placed
}

/// Row-major SC spawn scan. Returns the number of SC tiles placed.
pub fn create_sc_nests(grid: &mut TerrainGrid, config: &GenConfig, rng: &mut Rng) -> usize {
    let mode = config.boundary_mode;
    let draw_max = NEST_DENSITY_SCALE - config.sc_nest_density;
    let mut placed = 0;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if rng.i32(0..=draw_max) != SPAWN_TRIGGER {
                continue;
            }
            let near_hole = distance_to_sinkhole(grid, x, y, mode) <= config.sc_nest_max_hole_dist;
            if near_hole
                && distance_to_nearest(grid, x, y, mode, Terrain::is_swamp)
                    <= config.sc_nest_max_swamp_dist
                && spawn_sc_nest(grid, x, y, config)
            {
                placed += 1;
            }
        }
    }
    placed
}

/// Tries to settle an SC nest at `(x, y)`.
///
/// The cell must be sand or swamp, closer to a swamp than to any BC nest, and
/// see more sinkhole tiles than BC tiles within `sc_check_radius`. A swamp
/// cell becomes [`Terrain::NestSwampSc`].
pub fn spawn_sc_nest(grid: &mut TerrainGrid, x: i32, y: i32, config: &GenConfig) -> bool {
    let tag = match grid.get(x, y) {
        Some(Terrain::Sand) => Terrain::NestSc,
        Some(Terrain::Swamp) => Terrain::NestSwampSc,
        _ => return false,
    };

    let mode = config.boundary_mode;
    let to_swamp = distance_to_nearest(grid, x, y, mode, Terrain::is_swamp);
    let to_bc = distance_to_nearest(grid, x, y, mode, Terrain::is_bc_nest);
    if to_swamp >= to_bc {
        return false;
    }

    let [holes, bc] = count_in_plus_radius(
        grid,
        x,
        y,
        config.sc_check_radius,
        [Terrain::is_sinkhole, Terrain::is_bc_nest],
    );
    if holes <= bc {
        return false;
    }

    grid.set(x, y, tag);
    trace!("{} at ({x}, {y})", tag.display_name());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: i32, height: i32) -> TerrainGrid {
        TerrainGrid::new(width, height).expect("valid size")
    }

    /// A vertical sinkhole wall in column 10 of a 21x21 grid.
    fn walled() -> TerrainGrid {
        let mut g = grid(21, 21);
        for y in 0..21 {
            g.set(10, y, Terrain::SinkholeSide);
        }
        g
    }

    #[test]
    fn test_bc_nest_only_on_sand() {
        let mut g = walled();
        let mut rng = Rng::with_seed(1);
        assert_eq!(spawn_bc_nest(&mut g, 10, 5, &GenConfig::default(), &mut rng), 0);
        assert_eq!(g.get(10, 5), Some(Terrain::SinkholeSide));
    }

    #[test]
    fn test_bc_nest_extensions_stay_near_sinkholes() {
        let config = GenConfig {
            bc_nest_density: 10,
            bc_max_nest_size: 4,
            ..Default::default()
        };
        for seed in 0..16 {
            let mut g = walled();
            let mut rng = Rng::with_seed(seed);
            let placed = spawn_bc_nest(&mut g, 9, 10, &config, &mut rng);
            assert_eq!(g.get(9, 10), Some(Terrain::NestBc));
            assert_eq!(placed, g.census().count(Terrain::NestBc));
            assert!(placed <= 5);
            for c in g.positions_of(Terrain::NestBc) {
                assert!(
                    distance_to_sinkhole(&g, c.x, c.y, config.boundary_mode)
                        <= config.bc_nest_max_dist
                );
                assert!(c.x == 9 || c.y == 10, "extensions sit on the spawn's axes");
            }
        }
    }

    #[test]
    fn test_bc_extension_k_lands_k_steps_out() {
        // Walls east and south of (9, 10) give a surplus of exactly two, and
        // density 10 collapses the extension draw so every roll extends.
        let config = GenConfig {
            bc_nest_density: 10,
            bc_max_nest_size: 2,
            ..Default::default()
        };
        let centre = GridCoord::new(9, 10);
        for seed in 0..32 {
            let mut g = walled();
            for x in 0..21 {
                g.set(x, 14, Terrain::SinkholeSide);
            }
            let mut rng = Rng::with_seed(seed);
            let placed = spawn_bc_nest(&mut g, centre.x, centre.y, &config, &mut rng);

            let mut offsets: Vec<i32> = g
                .positions_of(Terrain::NestBc)
                .into_iter()
                .map(|c| centre.manhattan(c))
                .collect();
            offsets.sort_unstable();
            assert_eq!(offsets.len(), placed);
            assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{offsets:?}");
            assert_eq!(offsets.first(), Some(&0));
            // Every cell two steps out is open sand near a wall.
            assert_eq!(offsets.last(), Some(&2));
        }
    }

    #[test]
    fn test_crowded_bc_nest_gets_no_extension() {
        let config = GenConfig {
            bc_nest_density: 10,
            ..Default::default()
        };
        let mut g = walled();
        g.set(9, 12, Terrain::NestBc);
        let mut rng = Rng::with_seed(3);
        // One BC tile in range consumes `bc_load` sinkhole tiles.
        assert_eq!(spawn_bc_nest(&mut g, 9, 10, &config, &mut rng), 1);
    }

    #[test]
    fn test_bc_scan_needs_sinkhole() {
        let config = GenConfig {
            bc_nest_density: 9,
            ..Default::default()
        };
        let mut g = grid(12, 12);
        let mut rng = Rng::with_seed(8);
        assert_eq!(create_bc_nests(&mut g, &config, &mut rng), 0);
        assert!(g.cells().iter().all(|t| t.is_sand()));
    }

    #[test]
    fn test_bc_scan_places_near_sinkholes() {
        let config = GenConfig {
            bc_nest_density: 9,
            ..Default::default()
        };
        let mut g = walled();
        let mut rng = Rng::with_seed(8);
        let placed = create_bc_nests(&mut g, &config, &mut rng);
        assert!(placed > 0);
        for c in g.positions_of(Terrain::NestBc) {
            assert!((c.x - 10).abs() <= config.bc_nest_max_dist);
        }
    }

    #[test]
    fn test_sc_nest_on_swamp_variant() {
        let mut g = walled();
        g.set(7, 10, Terrain::Swamp);
        assert!(spawn_sc_nest(&mut g, 7, 10, &GenConfig::default()));
        assert_eq!(g.get(7, 10), Some(Terrain::NestSwampSc));
    }

    #[test]
    fn test_sc_nest_on_sand_variant() {
        let mut g = walled();
        g.set(7, 11, Terrain::Swamp);
        assert!(spawn_sc_nest(&mut g, 7, 10, &GenConfig::default()));
        assert_eq!(g.get(7, 10), Some(Terrain::NestSc));
    }

    #[test]
    fn test_sc_nest_rejected_closer_to_bc() {
        let mut g = walled();
        g.set(4, 10, Terrain::Swamp);
        g.set(8, 10, Terrain::NestBc);
        assert!(!spawn_sc_nest(&mut g, 7, 10, &GenConfig::default()));
        assert_eq!(g.get(7, 10), Some(Terrain::Sand));
    }

    #[test]
    fn test_sc_nest_rejected_without_swamp() {
        let mut g = walled();
        assert!(!spawn_sc_nest(&mut g, 7, 10, &GenConfig::default()));
    }

    #[test]
    fn test_sc_nest_needs_more_holes_than_bc() {
        let mut g = grid(21, 21);
        g.set(10, 0, Terrain::SinkholeSide);
        g.set(10, 20, Terrain::NestBc);
        g.set(0, 10, Terrain::NestBc);
        g.set(9, 10, Terrain::Swamp);
        let config = GenConfig::default();
        assert!(!spawn_sc_nest(&mut g, 10, 10, &config));

        g.set(20, 10, Terrain::SinkholeSide);
        g.set(10, 5, Terrain::SinkholeSide);
        assert!(spawn_sc_nest(&mut g, 10, 10, &config));
    }

    #[test]
    fn test_sc_nest_never_overwrites() {
        let mut g = walled();
        g.set(9, 10, Terrain::Swamp);
        assert!(!spawn_sc_nest(&mut g, 10, 10, &GenConfig::default()));
        assert_eq!(g.get(10, 10), Some(Terrain::SinkholeSide));
    }
}
