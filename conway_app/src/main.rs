// main.rs - Conway's Game of Life on a bounded grid
// Runs in an egui window, or headless in the terminal on a tokio timer

use anyhow::{Context, Result};
use clap::Parser;
use conway::{Grid, LifeConfig, patterns};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;       // Command line and config overrides
mod gui;       // egui front end
mod headless;  // tokio interval driver
mod render;    // Text renderer

use cli::{Args, Mode};

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = args.load_config()?;
    let grid = build_grid(&config, args.pattern.as_deref())?;

    match args.mode {
        Mode::Gui => gui::run(grid, config),
        Mode::Headless => {
            let options = headless::HeadlessOptions::from_args(&args, &config);
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            let summary = runtime.block_on(headless::run(grid, options, std::io::stdout()))?;
            info!(
                generations = summary.generations,
                population = summary.population,
                reason = ?summary.reason,
                "headless run finished"
            );
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conway=info,conway_app=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the grid and gives it its first population: the named pattern if
/// one was requested, random clusters otherwise.
fn build_grid(config: &LifeConfig, pattern: Option<&str>) -> Result<Grid> {
    let mut grid = Grid::new(config.grid.columns, config.grid.rows)?;
    match pattern {
        Some(name) => {
            let pattern = patterns::find(name)?;
            grid.apply_pattern(pattern, &mut ())
                .with_context(|| format!("cannot place {} on the grid", pattern.name))?;
        }
        None => {
            let mut rng = config.seeding.rng();
            grid.seed_random_population_with(config.seeding.plan(), &mut rng, &mut ());
        }
    }
    info!(
        columns = grid.columns(),
        rows = grid.rows(),
        population = grid.population(),
        "grid ready"
    );
    Ok(grid)
}
