// patterns.rs - Named starting patterns

use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::observer::CellObserver;

/// A named arrangement of live cells, as `(row, column)` offsets from its
/// top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
}

impl Pattern {
    /// Bounding box as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

impl Grid {
    /// Errors unless the pattern's bounding box fits with its top-left
    /// corner at `(row, column)`.
    pub fn check_pattern_fits(&self, pattern: &Pattern, row: usize, column: usize) -> Result<()> {
        let (height, width) = pattern.size();
        let overflows_rows = row.checked_add(height).is_none_or(|end| end > self.rows());
        let overflows_columns = column.checked_add(width).is_none_or(|end| end > self.columns());
        if overflows_rows || overflows_columns {
            return Err(GridError::PatternDoesNotFit {
                name: pattern.name,
                row,
                column,
                height,
                width,
            });
        }
        Ok(())
    }

    /// Brings the pattern's cells to life with its top-left corner at
    /// `(row, column)`. Cells outside the pattern are left untouched.
    pub fn place_pattern<O>(&mut self, pattern: &Pattern, row: usize, column: usize, observer: &mut O) -> Result<()>
    where
        O: CellObserver + ?Sized,
    {
        self.check_pattern_fits(pattern, row, column)?;
        for &(r, c) in pattern.cells {
            self.set_alive_with(row + r, column + c, true, observer)?;
        }
        Ok(())
    }

    /// Clears the grid and places the pattern in its centre. A pattern
    /// larger than the grid is rejected before anything is cleared.
    pub fn apply_pattern<O>(&mut self, pattern: &Pattern, observer: &mut O) -> Result<()>
    where
        O: CellObserver + ?Sized,
    {
        let (height, width) = pattern.size();
        let row = self.rows().saturating_sub(height) / 2;
        let column = self.columns().saturating_sub(width) / 2;
        self.check_pattern_fits(pattern, row, column)?;
        self.clear_with(observer);
        self.place_pattern(pattern, row, column, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("glider").unwrap().name, "Glider");
        assert_eq!(find("r-PENTOMINO").unwrap().name, "R-pentomino");
        assert_eq!(find("nope").unwrap_err(), GridError::UnknownPattern("nope".into()));
    }

    #[test]
    fn sizes_match_bounding_boxes() {
        assert_eq!(find("block").unwrap().size(), (2, 2));
        assert_eq!(find("blinker").unwrap().size(), (1, 3));
        assert_eq!(find("beacon").unwrap().size(), (4, 4));
    }

    #[test]
    fn placement_must_fit() {
        let mut grid = Grid::new(4, 4).unwrap();
        let glider = find("glider").unwrap();
        assert!(grid.place_pattern(glider, 1, 1, &mut ()).is_ok());
        assert_eq!(grid.population(), 5);
        assert!(matches!(
            grid.place_pattern(glider, 2, 0, &mut ()),
            Err(GridError::PatternDoesNotFit { .. })
        ));
    }

    #[test]
    fn apply_centres_and_replaces() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive(0, 0, true).unwrap();
        grid.apply_pattern(find("blinker").unwrap(), &mut ()).unwrap();
        assert!(!grid.is_alive(0, 0).unwrap());
        assert_eq!(grid.population(), 3);
        for c in 1..4 {
            assert!(grid.is_alive(2, c).unwrap());
        }
    }

    #[test]
    fn failed_apply_leaves_grid_untouched() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(0, 0, true).unwrap();
        grid.advance_generation();
        grid.set_alive(0, 0, true).unwrap();
        let before = (grid.snapshot(), grid.generation());

        let result = grid.apply_pattern(find("beacon").unwrap(), &mut ());
        assert!(matches!(result, Err(GridError::PatternDoesNotFit { .. })));
        assert_eq!((grid.snapshot(), grid.generation()), before);
    }

    #[test]
    fn huge_origin_is_rejected_without_overflow() {
        let mut grid = Grid::new(4, 4).unwrap();
        let block = find("block").unwrap();
        assert!(matches!(
            grid.place_pattern(block, usize::MAX, 0, &mut ()),
            Err(GridError::PatternDoesNotFit { .. })
        ));
        assert!(grid.place_pattern(block, 0, usize::MAX - 1, &mut ()).is_err());
        assert_eq!(grid.population(), 0);
    }
}
