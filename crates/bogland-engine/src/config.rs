//! Engine settings.
//!
//! Map size, seed and generation parameters, loaded from a TOML file.

use std::fs;
use std::path::Path;

use bogland_common::{BoglandError, BoglandResult};
use bogland_worldgen::GenConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Settings file read when no path is given.
pub const CONFIG_FILE: &str = "bogland.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Map width in cells
    pub width: i32,
    /// Map height in cells
    pub height: i32,
    /// World seed (None = random)
    pub seed: Option<u64>,
    /// Generation parameters
    pub worldgen: GenConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: None,
            worldgen: GenConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to load config file: {e}");
                Self::default()
            },
        }
    }

    fn read(path: &Path) -> BoglandResult<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| BoglandError::Parse(e.to_string()))
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> BoglandResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| BoglandError::Parse(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| fastrand::u64(..))
    }
}
