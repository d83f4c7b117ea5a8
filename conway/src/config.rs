// config.rs - TOML configuration for grid size, timing and seeding

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::seed::{SeedPlan, DRAWS_PER_ROUND, SEED_ROUNDS};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 55,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SeedingConfig {
    pub rounds: usize,
    pub draws_per_round: usize,
    /// Fixed RNG seed for reproducible runs. Entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            rounds: SEED_ROUNDS,
            draws_per_round: DRAWS_PER_ROUND,
            seed: None,
        }
    }
}

impl SeedingConfig {
    pub fn plan(&self) -> SeedPlan {
        SeedPlan {
            rounds: self.rounds,
            draws_per_round: self.draws_per_round,
        }
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LifeConfig {
    /// Milliseconds between generations.
    pub interval_ms: u64,
    pub grid: GridConfig,
    pub seeding: SeedingConfig,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            grid: GridConfig::default(),
            seeding: SeedingConfig::default(),
        }
    }
}

impl LifeConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml(&content)?;
                debug!(path = %path.display(), "configuration loaded");
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.columns == 0 || self.grid.rows == 0 {
            return Err(ConfigError::invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.columns, self.grid.rows
            )));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::invalid("interval_ms must be positive"));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
