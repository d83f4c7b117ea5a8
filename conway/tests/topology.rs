use conway::{Direction, Grid, GridError};

fn link_count(grid: &Grid, row: usize, column: usize) -> usize {
    grid.cell(row, column).unwrap().neighbors().present_count()
}

#[test]
fn links_are_symmetric() {
    for (columns, rows) in [(1, 1), (1, 5), (4, 1), (3, 3), (7, 4)] {
        let grid = Grid::new(columns, rows).unwrap();
        for cell in grid.cells() {
            for (direction, index) in cell.neighbors().iter() {
                let other = grid.cell_at(index).expect("link points inside the grid");
                let back = other.neighbors().get(direction.opposite());
                assert_eq!(
                    back,
                    Some(cell.id().0),
                    "{columns}x{rows}: {:?} -> {:?} not mirrored",
                    cell.id(),
                    direction
                );
            }
        }
    }
}

#[test]
fn links_match_offsets() {
    let grid = Grid::new(5, 4).unwrap();
    for cell in grid.cells() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.offset();
            let row = cell.y() as isize + dr;
            let column = cell.x() as isize + dc;
            let inside = (0..4).contains(&row) && (0..5).contains(&column);
            let linked = grid.neighbor(cell.y(), cell.x(), direction).unwrap();
            match linked {
                Some(n) => {
                    assert!(inside);
                    assert_eq!((n.y() as isize, n.x() as isize), (row, column));
                }
                None => assert!(!inside),
            }
        }
    }
}

#[test]
fn corner_edge_and_interior_link_counts() {
    let grid = Grid::new(6, 5).unwrap();
    for (r, c) in [(0, 0), (0, 5), (4, 0), (4, 5)] {
        assert_eq!(link_count(&grid, r, c), 3, "corner ({r}, {c})");
    }
    for (r, c) in [(0, 2), (4, 3), (2, 0), (3, 5)] {
        assert_eq!(link_count(&grid, r, c), 5, "edge ({r}, {c})");
    }
    for r in 1..4 {
        for c in 1..5 {
            assert_eq!(link_count(&grid, r, c), 8, "interior ({r}, {c})");
        }
    }
}

#[test]
fn alive_count_never_exceeds_links() {
    let mut grid = Grid::new(4, 4).unwrap();
    for r in 0..4 {
        for c in 0..4 {
            grid.set_alive(r, c, true).unwrap();
        }
    }
    for cell in grid.cells() {
        let count = grid.alive_neighbor_count(cell.y(), cell.x()).unwrap();
        assert_eq!(count as usize, cell.neighbors().present_count());
    }

    grid.set_alive(1, 1, false).unwrap();
    // (0, 0) links to (0, 1), (1, 0) and the now-dead (1, 1).
    assert_eq!(grid.alive_neighbor_count(0, 0).unwrap(), 2);
}

#[test]
fn out_of_range_lookup_is_an_error() {
    let grid = Grid::new(2, 3).unwrap();
    assert!(matches!(
        grid.neighbor(3, 0, Direction::Upper),
        Err(GridError::OutOfBounds { row: 3, column: 0, .. })
    ));
    assert!(grid.index_of(0, 2).is_err());
    assert_eq!(grid.index_of(2, 1).unwrap(), 5);
}
