// lib.rs - Conway's Game of Life on a fixed, edge-bounded grid
// Grid owns every Cell and wires it to its neighbors once at construction.
// Generations advance as if all cells update at once; renderers learn about
// state flips through CellObserver.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod neighbors;
pub mod observer;
pub mod patterns;
pub mod rule;
pub mod seed;

pub use cell::{Cell, CellChange, CellId};
pub use config::{GridConfig, LifeConfig, SeedingConfig};
pub use error::{ConfigError, GridError, Result};
pub use grid::Grid;
pub use history::CycleDetector;
pub use neighbors::{Direction, NeighborSet};
pub use observer::{CellObserver, GenerationStats};
pub use patterns::{Pattern, PATTERNS};
pub use seed::SeedPlan;
