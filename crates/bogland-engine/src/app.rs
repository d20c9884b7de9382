//! Command-line driver.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bogland_worldgen::{TerrainGrid, WorldGenerator};
use tracing::{debug, info};

use crate::config::{EngineConfig, CONFIG_FILE};

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a map using the settings file at the path.
    Generate(PathBuf),
    /// Write the default settings to the path and exit.
    WriteConfig(PathBuf),
}

impl Command {
    /// Parses arguments, program name excluded.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (None, _, _) => Ok(Self::Generate(PathBuf::from(CONFIG_FILE))),
            (Some(flag), Some(path), None) if flag == "--write-config" => {
                Ok(Self::WriteConfig(PathBuf::from(path)))
            },
            (Some(flag), None, None) if flag == "--write-config" => {
                Ok(Self::WriteConfig(PathBuf::from(CONFIG_FILE)))
            },
            (Some(path), None, None) if !path.starts_with("--") => {
                Ok(Self::Generate(PathBuf::from(path)))
            },
            _ => bail!("usage: bogland [CONFIG] | bogland --write-config [PATH]"),
        }
    }
}

/// Runs the command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::WriteConfig(path) => EngineConfig::default()
            .save_to(&path)
            .with_context(|| format!("writing {}", path.display())),
        Command::Generate(path) => {
            let config = EngineConfig::load_from(&path);
            let grid = generate(&config)?;
            for (terrain, count) in grid.census().iter() {
                info!("{:>16}: {count}", terrain.display_name());
            }
            debug!("\n{grid}");
            Ok(())
        },
    }
}

/// Generates the map described by `config`.
pub fn generate(config: &EngineConfig) -> Result<TerrainGrid> {
    let seed = config.resolve_seed();
    info!("Seed: {seed}");
    let generator = WorldGenerator::new(config.worldgen.clone(), seed);
    generator
        .generate(config.width, config.height)
        .context("world generation failed")
}
