// neighbors.rs - Adjacency links between cells of one grid

use rand::Rng;

/// The eight compass directions around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Upper,
    Bottom,
    Left,
    Right,
    LeftUpper,
    RightUpper,
    LeftBottom,
    RightBottom,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Upper,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
        Direction::LeftUpper,
        Direction::RightUpper,
        Direction::LeftBottom,
        Direction::RightBottom,
    ];

    /// Row and column offset of the neighbor in this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Upper       => (-1,  0),
            Direction::Bottom      => ( 1,  0),
            Direction::Left        => ( 0, -1),
            Direction::Right       => ( 0,  1),
            Direction::LeftUpper   => (-1, -1),
            Direction::RightUpper  => (-1,  1),
            Direction::LeftBottom  => ( 1, -1),
            Direction::RightBottom => ( 1,  1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Upper       => Direction::Bottom,
            Direction::Bottom      => Direction::Upper,
            Direction::Left        => Direction::Right,
            Direction::Right       => Direction::Left,
            Direction::LeftUpper   => Direction::RightBottom,
            Direction::RightUpper  => Direction::LeftBottom,
            Direction::LeftBottom  => Direction::RightUpper,
            Direction::RightBottom => Direction::LeftUpper,
        }
    }

    /// Uniform draw over all eight directions.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Fixed links from one cell to its up-to-eight neighbors.
///
/// Links are indices into the owning grid's row-major cell storage. They
/// are written once while the grid wires itself and never change after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborSet {
    links: [Option<usize>; 8],
}

impl NeighborSet {
    pub(crate) fn link(&mut self, direction: Direction, index: usize) {
        self.links[direction.slot()] = Some(index);
    }

    /// Index of the neighbor in `direction`, or `None` at the grid edge.
    pub fn get(&self, direction: Direction) -> Option<usize> {
        self.links[direction.slot()]
    }

    /// Present links as `(direction, index)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.get(d).map(|index| (d, index)))
    }

    pub fn present_count(&self) -> usize {
        self.links.iter().filter(|link| link.is_some()).count()
    }

    /// Number of linked neighbors for which `is_alive` holds.
    ///
    /// Absent links contribute nothing, so the result never exceeds
    /// [`present_count`](Self::present_count).
    pub fn alive_count<F>(&self, is_alive: F) -> u8
    where
        F: Fn(usize) -> bool,
    {
        self.links
            .iter()
            .flatten()
            .map(|&index| u8::from(is_alive(index)))
            .sum()
    }
}
