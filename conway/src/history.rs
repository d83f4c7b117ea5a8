// history.rs - Detects when the grid revisits a recent state

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

const HISTORY_LEN: usize = 10;

/// Remembers hashes of the last ten observed generations.
///
/// Still lifes repeat after one generation and short oscillators within a
/// few, so a repeat means the run has settled.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_grid(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        for cell in grid.cells() {
            cell.is_alive().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Records the grid's state. Returns true if it matches one of the
    /// remembered states.
    pub fn check(&mut self, grid: &Grid) -> bool {
        let current = Self::hash_grid(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.history[..filled].contains(&current) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = current;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
