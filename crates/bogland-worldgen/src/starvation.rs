//! Nest starvation pass.
//!
//! Each dry SC tile feeds `sc_feed_multiplier` BC tiles; SC nests sitting on
//! swamp feed nothing. A BC tile that sees more
//! BC tiles than its SC neighbours can feed starves. The pass runs in place in
//! row-major order, so a tile starved earlier no longer counts against the
//! tiles scanned after it.

use tracing::{debug, trace};

use crate::config::GenConfig;
use crate::query::count_in_plus_radius;
use crate::terrain::{Terrain, TerrainGrid};

/// Starves under-fed BC nests. Returns the number of tiles starved.
pub fn starve_nests(grid: &mut TerrainGrid, config: &GenConfig) -> usize {
    let mut starved = 0;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) != Some(Terrain::NestBc) {
                continue;
            }
            let [sc, bc] = count_in_plus_radius(
                grid,
                x,
                y,
                config.bc_starve_range,
                [Terrain::is_dry_sc_nest, Terrain::is_bc_nest],
            );
            if bc > sc.saturating_mul(config.sc_feed_multiplier) {
                grid.set(x, y, Terrain::NestStarvedBc);
                starved += 1;
                trace!("BC nest at ({x}, {y}) starved: {bc} BC vs {sc} SC");
            }
        }
    }

    debug!("Starvation: {starved} BC tiles starved");
    starved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: i32, height: i32) -> TerrainGrid {
        TerrainGrid::new(width, height).expect("valid size")
    }

    #[test]
    fn test_lonely_bc_nest_starves() {
        let mut g = grid(9, 9);
        g.set(4, 4, Terrain::NestBc);
        assert_eq!(starve_nests(&mut g, &GenConfig::default()), 1);
        assert_eq!(g.get(4, 4), Some(Terrain::NestStarvedBc));
    }

    #[test]
    fn test_fed_bc_nest_survives() {
        let mut g = grid(9, 9);
        g.set(4, 4, Terrain::NestBc);
        g.set(4, 8, Terrain::NestSc);
        assert_eq!(starve_nests(&mut g, &GenConfig::default()), 0);
        assert_eq!(g.get(4, 4), Some(Terrain::NestBc));
    }

    #[test]
    fn test_swamp_sc_does_not_feed() {
        let mut g = grid(9, 9);
        g.set(4, 4, Terrain::NestBc);
        g.set(0, 4, Terrain::NestSwampSc);
        assert_eq!(starve_nests(&mut g, &GenConfig::default()), 1);
        assert_eq!(g.get(4, 4), Some(Terrain::NestStarvedBc));
        assert_eq!(g.get(0, 4), Some(Terrain::NestSwampSc));
    }

    #[test]
    fn test_huge_starve_range_is_clipped() {
        let config = GenConfig {
            bc_starve_range: i32::MAX,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
        let mut g = grid(2, 1);
        g.set(0, 0, Terrain::NestBc);
        assert_eq!(starve_nests(&mut g, &config), 1);
        assert_eq!(g.get(0, 0), Some(Terrain::NestStarvedBc));
    }

    #[test]
    fn test_diagonal_sc_does_not_feed() {
        let mut g = grid(9, 9);
        g.set(4, 4, Terrain::NestBc);
        g.set(5, 5, Terrain::NestSc);
        assert_eq!(starve_nests(&mut g, &GenConfig::default()), 1);
    }

    #[test]
    fn test_feed_ceiling_with_row_major_release() {
        // One SC feeds two BC tiles; six BC tiles share a row with it.
        let config = GenConfig {
            sc_feed_multiplier: 2,
            ..Default::default()
        };
        let mut g = grid(10, 1);
        g.set(0, 0, Terrain::NestSc);
        for x in 1..7 {
            g.set(x, 0, Terrain::NestBc);
        }

        // The first four starve (6, 5, 4, 3 live BC seen); the last two see
        // only two live BC tiles and are fed.
        assert_eq!(starve_nests(&mut g, &config), 4);
        for x in 1..5 {
            assert_eq!(g.get(x, 0), Some(Terrain::NestStarvedBc));
        }
        assert_eq!(g.get(5, 0), Some(Terrain::NestBc));
        assert_eq!(g.get(6, 0), Some(Terrain::NestBc));
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let config = GenConfig {
            sc_feed_multiplier: 1,
            ..Default::default()
        };
        let mut g = grid(7, 7);
        for (x, y) in [(1, 1), (1, 3), (3, 1), (5, 5), (3, 3)] {
            g.set(x, y, Terrain::NestBc);
        }
        g.set(1, 5, Terrain::NestSc);
        starve_nests(&mut g, &config);
        let once = g.clone();
        assert_eq!(starve_nests(&mut g, &config), 0);
        assert_eq!(g, once);
    }

    #[test]
    fn test_other_tags_untouched() {
        let mut g = grid(4, 4);
        let tags = [
            Terrain::SinkholeCore,
            Terrain::SinkholeSide,
            Terrain::Swamp,
            Terrain::NestSc,
            Terrain::NestSwampSc,
            Terrain::NestStarvedBc,
        ];
        for (i, t) in tags.iter().enumerate() {
            g.set(i as i32 % 4, i as i32 / 4, *t);
        }
        let before = g.clone();
        assert_eq!(starve_nests(&mut g, &GenConfig::default()), 0);
        assert_eq!(g, before);
    }
}
