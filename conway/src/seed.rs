// seed.rs - Randomized initial population

use rand::Rng;
use tracing::debug;

use crate::grid::Grid;
use crate::neighbors::Direction;
use crate::observer::CellObserver;

pub const SEED_ROUNDS: usize = 50;
pub const DRAWS_PER_ROUND: usize = 5;

/// Shape of the random clusters dropped by [`Grid::seed_random_population`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    /// Number of clusters; each one is centred on a random anchor cell.
    pub rounds: usize,
    /// Random-direction draws around the anchor per cluster.
    pub draws_per_round: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            rounds: SEED_ROUNDS,
            draws_per_round: DRAWS_PER_ROUND,
        }
    }
}

impl Grid {
    pub fn seed_random_population<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.seed_random_population_with(SeedPlan::default(), rng, &mut ());
    }

    /// Brings random clusters to life.
    ///
    /// Each round gives birth to a uniformly chosen anchor, then draws a
    /// direction `draws_per_round` times and gives birth to the neighbor
    /// there. Draws that fall off the edge are skipped.
    pub fn seed_random_population_with<R, O>(&mut self, plan: SeedPlan, rng: &mut R, observer: &mut O)
    where
        R: Rng + ?Sized,
        O: CellObserver + ?Sized,
    {
        for _ in 0..plan.rounds {
            let row = rng.gen_range(0..self.rows());
            let column = rng.gen_range(0..self.columns());
            let anchor = row * self.columns() + column;
            self.set_index(anchor, true, observer);

            for _ in 0..plan.draws_per_round {
                let direction = Direction::random(rng);
                let neighbor = self
                    .cell_at(anchor)
                    .and_then(|cell| cell.neighbors().get(direction));
                if let Some(index) = neighbor {
                    self.set_index(index, true, observer);
                }
            }
        }
        debug!(
            rounds = plan.rounds,
            draws = plan.draws_per_round,
            population = self.population(),
            "random population seeded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn single_cell_grid_only_ever_gets_its_anchor() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        grid.seed_random_population(&mut rng);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn zero_rounds_leaves_grid_dead() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = SeedPlan { rounds: 0, ..SeedPlan::default() };
        grid.seed_random_population_with(plan, &mut rng, &mut ());
        assert_eq!(grid.population(), 0);
    }
}
