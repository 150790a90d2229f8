//! Ship definitions and candidate placements.

use crate::config::GRID_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Fleet catalog entry: name, length and the symbol marking its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
    symbol: char,
}

impl ShipSpec {
    pub const fn new(name: &'static str, length: usize, symbol: char) -> Self {
        Self {
            name,
            length,
            symbol,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Symbol written into occupancy cells. Unique per ship within the fleet.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

/// Candidate placement: origin cell plus orientation. The origin is sampled
/// anywhere on the grid; whether the full extent fits is checked afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// The `i`-th cell of the extent, counted from the origin.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        }
    }

    /// Cells covered by a ship of `length` placed here.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..length).map(move |i| self.cell(i))
    }

    /// Whether the full extent lies inside the grid.
    pub fn fits(&self, length: usize) -> bool {
        let (row, col) = self.cell(length - 1);
        row < GRID_SIZE && col < GRID_SIZE
    }
}
