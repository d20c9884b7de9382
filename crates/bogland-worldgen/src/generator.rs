//! World generation pipeline.
//!
//! Stages run in a fixed order over one grid: sinkholes, swamps, nests,
//! starvation. Each stage sees everything the earlier ones wrote. All
//! randomness comes from the caller's [`Rng`], so a fixed seed reproduces the
//! same map.

use bogland_common::BoglandResult;
use fastrand::Rng;
use tracing::info;

use crate::config::GenConfig;
use crate::nest::create_nests;
use crate::sinkhole::create_sinkholes;
use crate::starvation::starve_nests;
use crate::swamp::create_swamps;
use crate::terrain::TerrainGrid;

/// Generates a `width × height` map.
///
/// Fails with `InvalidDimension` when either side is below 1 and with a config
/// error when a knob is out of range. Features that do not fit on a small map
/// are clipped or skipped.
pub fn generate_world(
    width: i32,
    height: i32,
    config: &GenConfig,
    rng: &mut Rng,
) -> BoglandResult<TerrainGrid> {
    let mut grid = TerrainGrid::new(width, height)?;
    config.validate()?;

    info!(
        "Generating {}x{} world, boundary mode {:?}",
        width, height, config.boundary_mode
    );

    create_sinkholes(&mut grid, config, rng);
    create_swamps(&mut grid, config, rng);
    create_nests(&mut grid, config, rng);
    starve_nests(&mut grid, config);

    info!("World generated: {}", grid.census());
    Ok(grid)
}

/// Seeded world generator.
///
/// Owns a configuration and a seed; every call to [`WorldGenerator::generate`]
/// starts a fresh random stream from that seed.
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    /// Generation parameters.
    config: GenConfig,
    /// World seed.
    seed: u64,
}

impl WorldGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: GenConfig, seed: u64) -> Self {
        info!("WorldGenerator initialized: seed={seed}");
        Self { config, seed }
    }

    /// Creates a generator with the default config.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GenConfig::default(), seed)
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Returns the world seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a map of the given size.
    pub fn generate(&self, width: i32, height: i32) -> BoglandResult<TerrainGrid> {
        let mut rng = Rng::with_seed(self.seed);
        generate_world(width, height, &self.config, &mut rng)
    }
}
