// cell.rs - A single automaton unit

use std::fmt;

use crate::neighbors::NeighborSet;

/// Stable identity of a cell, assigned in row-major order from 0.
///
/// Only renderers use it, as a key for their visual elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A state flip, reported to observers after it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub id: CellId,
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    x: usize,
    y: usize,
    alive: bool,
    pub(crate) neighbors: NeighborSet,
}

impl Cell {
    pub(crate) fn new(id: CellId, x: usize, y: usize) -> Self {
        Self {
            id,
            x,
            y,
            alive: false,
            neighbors: NeighborSet::default(),
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// Column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row.
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn neighbors(&self) -> &NeighborSet {
        &self.neighbors
    }

    /// Marks the cell dead. Returns the change only if it was alive.
    pub fn kill(&mut self) -> Option<CellChange> {
        self.set(false)
    }

    /// Marks the cell alive. Returns the change only if it was dead.
    pub fn give_birth(&mut self) -> Option<CellChange> {
        self.set(true)
    }

    fn set(&mut self, alive: bool) -> Option<CellChange> {
        if self.alive == alive {
            return None;
        }
        self.alive = alive;
        Some(CellChange {
            id: self.id,
            x: self.x,
            y: self.y,
            alive,
        })
    }
}
