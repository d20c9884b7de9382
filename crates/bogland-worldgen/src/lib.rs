//! # Bogland Worldgen
//!
//! Procedural generation of a 2D terrain grid:
//! - Sinkhole cores and their rosette peripheries
//! - Swamp blobs grown away from sinkholes
//! - BC and SC creature nests placed by local density counts
//! - A starvation pass for BC nests that SC nests cannot feed
//!
//! The grid is owned by one pipeline run and mutated in place by each stage.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod generator;
pub mod nest;
pub mod query;
pub mod sinkhole;
pub mod starvation;
pub mod swamp;
pub mod terrain;

pub use config::{BoundaryMode, GenConfig};
pub use generator::{generate_world, WorldGenerator};
pub use nest::NestReport;
pub use query::{NO_MATCH_DISTANCE, TerrainPredicate};
pub use terrain::{Terrain, TerrainCensus, TerrainGrid};
