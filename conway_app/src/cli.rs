// cli.rs - Command line arguments and config overrides

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use conway::LifeConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Conway's Game of Life on a bounded grid", long_about = None)]
pub struct Args {
    /// Where to run the simulation
    #[arg(short, long, value_enum, default_value = "gui")]
    pub mode: Mode,

    /// Config file path; defaults are used if it does not exist
    #[arg(short, long, default_value = "life.toml")]
    pub config: PathBuf,

    /// Grid width, overrides the config file
    #[arg(long)]
    pub columns: Option<usize>,

    /// Grid height, overrides the config file
    #[arg(long)]
    pub rows: Option<usize>,

    /// Milliseconds between generations
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Fixed seed for the random population
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of a random population
    #[arg(long)]
    pub pattern: Option<String>,

    /// Stop after this many generations (headless only)
    #[arg(long)]
    pub generations: Option<u64>,

    /// Stop once a recent state repeats (headless only)
    #[arg(long)]
    pub stop_on_cycle: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Gui,
    Headless,
}

impl Args {
    /// Loads the config file, applies command line overrides and validates
    /// the result.
    pub fn load_config(&self) -> Result<LifeConfig> {
        let mut config = LifeConfig::load(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut LifeConfig) {
        if let Some(columns) = self.columns {
            config.grid.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if self.seed.is_some() {
            config.seeding.seed = self.seed;
        }
    }
}
