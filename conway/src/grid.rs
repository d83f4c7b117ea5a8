// grid.rs - Edge-bounded grid of cells for Conway's Game of Life

use tracing::{debug, trace};

use crate::cell::{Cell, CellId};
use crate::error::{GridError, Result};
use crate::neighbors::Direction;
use crate::observer::CellObserver;
use crate::rule;

/// Fixed-size rectangular grid. Cells beyond the edges do not exist.
///
/// Cells are stored row-major: the cell at `(row, column)` lives at
/// `row * columns + column` and has `y == row`, `x == column`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// Builds a `columns` wide, `rows` high grid of dead cells and wires
    /// every cell to its neighbors.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(GridError::InvalidDimensions { columns, rows });
        }

        let cells = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| (x, y)))
            .enumerate()
            .map(|(id, (x, y))| Cell::new(CellId(id), x, y))
            .collect();

        let mut grid = Self {
            rows,
            columns,
            cells,
            generation: 0,
        };
        grid.wire_neighbors();
        debug!(columns, rows, "grid constructed");
        Ok(grid)
    }

    // Runs once all cells exist.
    fn wire_neighbors(&mut self) {
        for index in 0..self.cells.len() {
            let (row, column) = (index / self.columns, index % self.columns);
            for direction in Direction::ALL {
                if let Some(neighbor) = self.offset_index(row, column, direction) {
                    self.cells[index].neighbors.link(direction, neighbor);
                }
            }
        }
    }

    fn offset_index(&self, row: usize, column: usize, direction: Direction) -> Option<usize> {
        let (dr, dc) = direction.offset();
        let r = row.checked_add_signed(dr)?;
        let c = column.checked_add_signed(dc)?;
        (r < self.rows && c < self.columns).then(|| r * self.columns + c)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, `rows * columns`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Generations advanced since construction or the last [`clear`](Self::clear).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn index_of(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(GridError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        let index = self.index_of(row, column)?;
        Ok(&self.cells[index])
    }

    /// Resolves a neighbor link or any other row-major index.
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn is_alive(&self, row: usize, column: usize) -> Result<bool> {
        self.cell(row, column).map(Cell::is_alive)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// One slice per row, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns)
    }

    /// The neighbor of `(row, column)` in `direction`; `None` at the edge.
    pub fn neighbor(&self, row: usize, column: usize, direction: Direction) -> Result<Option<&Cell>> {
        let cell = self.cell(row, column)?;
        Ok(cell.neighbors().get(direction).map(|index| &self.cells[index]))
    }

    pub fn alive_neighbor_count(&self, row: usize, column: usize) -> Result<u8> {
        let cell = self.cell(row, column)?;
        Ok(cell.neighbors().alive_count(|index| self.cells[index].is_alive()))
    }

    /// Alive flags of every cell, row-major.
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_alive).collect()
    }

    pub fn set_alive(&mut self, row: usize, column: usize, alive: bool) -> Result<()> {
        self.set_alive_with(row, column, alive, &mut ())
    }

    pub fn set_alive_with<O>(&mut self, row: usize, column: usize, alive: bool, observer: &mut O) -> Result<()>
    where
        O: CellObserver + ?Sized,
    {
        let index = self.index_of(row, column)?;
        self.set_index(index, alive, observer);
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, column: usize) -> Result<()> {
        self.toggle_with(row, column, &mut ())
    }

    pub fn toggle_with<O>(&mut self, row: usize, column: usize, observer: &mut O) -> Result<()>
    where
        O: CellObserver + ?Sized,
    {
        let index = self.index_of(row, column)?;
        let alive = !self.cells[index].is_alive();
        self.set_index(index, alive, observer);
        Ok(())
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.clear_with(&mut ());
    }

    pub fn clear_with<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        for cell in &mut self.cells {
            if let Some(change) = cell.kill() {
                observer.cell_changed(&change);
            }
        }
        self.generation = 0;
    }

    pub(crate) fn set_index<O>(&mut self, index: usize, alive: bool, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        let cell = &mut self.cells[index];
        let change = if alive { cell.give_birth() } else { cell.kill() };
        if let Some(change) = change {
            observer.cell_changed(&change);
        }
    }

    pub fn advance_generation(&mut self) {
        self.advance_generation_with(&mut ());
    }

    /// Advances one generation, reporting each flipped cell to `observer`.
    ///
    /// Every next state is decided from a snapshot taken before any cell is
    /// written, so the result does not depend on traversal order.
    pub fn advance_generation_with<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        let current = self.snapshot();

        let flips: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let count = cell.neighbors().alive_count(|n| current[n]);
                (rule::next_state(current[index], count) != current[index]).then_some(index)
            })
            .collect();

        for &index in &flips {
            self.set_index(index, !current[index], observer);
        }

        self.generation += 1;
        trace!(generation = self.generation, flips = flips.len(), "generation advanced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::GenerationStats;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.set_alive(r, c, true).unwrap();
                }
            }
        }
        grid
    }

    fn picture(grid: &Grid) -> Vec<String> {
        grid.row_slices()
            .map(|row| row.iter().map(|c| if c.is_alive() { '#' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 4).unwrap_err(),
            GridError::InvalidDimensions { columns: 0, rows: 4 }
        );
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn cells_are_laid_out_row_major() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        for r in 0..3 {
            for c in 0..4 {
                let cell = grid.cell(r, c).unwrap();
                assert_eq!((cell.x(), cell.y()), (c, r));
                assert_eq!(cell.id(), CellId(r * 4 + c));
            }
        }
    }

    #[test]
    fn lookups_outside_the_grid_fail() {
        let grid = Grid::new(3, 2).unwrap();
        let err = grid.cell(2, 0).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds { row: 2, column: 0, rows: 2, columns: 3 });
        assert!(grid.neighbor(0, 3, Direction::Left).is_err());
        assert!(grid.alive_neighbor_count(5, 5).is_err());
    }

    #[test]
    fn neighbor_resolves_links() {
        let grid = Grid::new(3, 3).unwrap();
        let up = grid.neighbor(1, 1, Direction::Upper).unwrap().unwrap();
        assert_eq!((up.y(), up.x()), (0, 1));
        let corner = grid.neighbor(1, 1, Direction::RightBottom).unwrap().unwrap();
        assert_eq!((corner.y(), corner.x()), (2, 2));
        assert!(grid.neighbor(0, 0, Direction::LeftUpper).unwrap().is_none());
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = grid_from(&["...", "###", "..."]);
        grid.advance_generation();
        assert_eq!(picture(&grid), [".#.", ".#.", ".#."]);
        grid.advance_generation();
        assert_eq!(picture(&grid), ["...", "###", "..."]);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn only_flipped_cells_are_reported() {
        let mut grid = grid_from(&["...", "###", "..."]);
        let mut stats = GenerationStats::default();
        grid.advance_generation_with(&mut stats);
        // Two ends die, top and bottom middles are born; the centre stays.
        assert_eq!(stats, GenerationStats { births: 2, deaths: 2 });
    }

    #[test]
    fn toggle_and_clear() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.toggle(1, 1).unwrap();
        assert!(grid.is_alive(1, 1).unwrap());
        grid.advance_generation();
        grid.toggle(0, 0).unwrap();
        assert_eq!(grid.population(), 1);

        let mut stats = GenerationStats::default();
        grid.clear_with(&mut stats);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert_eq!(stats.deaths, 1);
    }
}
