// observer.rs - One-way notification from the grid to whoever renders it
// The grid never holds visual handles. Every committed state flip is pushed
// to a CellObserver; cells whose state does not change are not reported.

use crate::cell::CellChange;

pub trait CellObserver {
    fn cell_changed(&mut self, change: &CellChange);
}

/// Discards notifications.
impl CellObserver for () {
    fn cell_changed(&mut self, _change: &CellChange) {}
}

impl<O: CellObserver + ?Sized> CellObserver for &mut O {
    fn cell_changed(&mut self, change: &CellChange) {
        (**self).cell_changed(change);
    }
}

/// Fans a notification out to two observers.
impl<A: CellObserver, B: CellObserver> CellObserver for (A, B) {
    fn cell_changed(&mut self, change: &CellChange) {
        self.0.cell_changed(change);
        self.1.cell_changed(change);
    }
}

/// Birth and death tallies, reset by the caller between generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub births: usize,
    pub deaths: usize,
}

impl GenerationStats {
    pub fn changed(&self) -> usize {
        self.births + self.deaths
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CellObserver for GenerationStats {
    fn cell_changed(&mut self, change: &CellChange) {
        if change.alive {
            self.births += 1;
        } else {
            self.deaths += 1;
        }
    }
}
