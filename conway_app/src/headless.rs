// headless.rs - Drives the grid from a tokio interval and prints each generation

use std::io::{IsTerminal, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use conway::{CycleDetector, GenerationStats, Grid, LifeConfig};
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use crate::cli::Args;
use crate::render::TextRenderer;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub interval: Duration,
    /// Stop once the grid reaches this generation.
    pub generations: Option<u64>,
    pub stop_on_cycle: bool,
    pub clear_screen: bool,
}

impl HeadlessOptions {
    pub fn from_args(args: &Args, config: &LifeConfig) -> Self {
        Self {
            interval: config.interval(),
            generations: args.generations,
            stop_on_cycle: args.stop_on_cycle,
            clear_screen: std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Cycle,
    Interrupted,
}

#[derive(Debug)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

/// Advances `grid` once per tick and renders every generation to `out`.
///
/// A late tick delays the schedule rather than firing a burst, so one
/// advance always completes before the next starts. Runs until the
/// generation limit, a repeated state (if asked) or Ctrl-C.
pub async fn run<W: Write>(mut grid: Grid, options: HeadlessOptions, mut out: W) -> Result<RunSummary> {
    let mut renderer = TextRenderer::new(&grid).with_clear_screen(options.clear_screen);
    let mut stats = GenerationStats::default();
    let mut cycles = CycleDetector::new();
    cycles.check(&grid);
    renderer.present(&mut out, &grid, None).context("failed to write frame")?;

    let mut ticker = time::interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(interval_ms = options.interval.as_millis() as u64, "headless run started");

    let reason = loop {
        if options.generations.is_some_and(|limit| grid.generation() >= limit) {
            break StopReason::GenerationLimit;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => break StopReason::Interrupted,
        }

        stats.reset();
        grid.advance_generation_with(&mut (&mut renderer, &mut stats));
        renderer
            .present(&mut out, &grid, Some(&stats))
            .context("failed to write frame")?;

        if options.stop_on_cycle && cycles.check(&grid) {
            info!(generation = grid.generation(), "state repeated");
            break StopReason::Cycle;
        }
    };

    Ok(RunSummary {
        generations: grid.generation(),
        population: grid.population(),
        reason,
    })
}
