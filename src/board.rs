//! Per-game board state: occupancy, heuristic probabilities, shot history.

use crate::common::{BoardError, ShotResult};
use crate::config::{
    FLEET, GRID_SIZE, HIT_NEIGHBOR_BOOST, INITIAL_PROBABILITY, NUM_SHIPS, PROBABILITY_CEILING,
};
use crate::ship::{Orientation, Placement, ShipSpec};
use crate::shotmask::ShotMask;
use rand::Rng;

type Mask = ShotMask<u128, GRID_SIZE>;

/// One cell of the occupancy grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Occupied by the ship carrying this symbol, not yet hit.
    Ship(char),
    /// A fired-upon ship cell.
    HitMark,
    /// A fired-upon water cell.
    MissMark,
}

/// In-bounds orthogonal neighbors of a cell, in up/down/left/right order.
pub fn orthogonal_neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let nr = row as isize + dr;
        let nc = col as isize + dc;
        if nr >= 0 && nc >= 0 && (nr as usize) < GRID_SIZE && (nc as usize) < GRID_SIZE {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    })
}

/// Main per-game state. Owned exclusively by the game runner driving it and
/// discarded once the game completes.
///
/// Occupancy and the heuristic probability estimates are stored as two
/// independent grids.
pub struct Board {
    occupancy: [[Cell; GRID_SIZE]; GRID_SIZE],
    probability: [[f64; GRID_SIZE]; GRID_SIZE],
    shots: Mask,
    ships_remaining: usize,
}

impl Board {
    /// Create an empty board: no ships, uniform probability, no shots.
    pub fn new() -> Self {
        Board {
            occupancy: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            probability: [[INITIAL_PROBABILITY; GRID_SIZE]; GRID_SIZE],
            shots: Mask::new(),
            ships_remaining: NUM_SHIPS,
        }
    }

    /// Ships not yet fully sunk. The game is over at zero.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Number of cells fired upon so far.
    pub fn shots_fired(&self) -> usize {
        self.shots.count()
    }

    /// Whether (row, col) has already been fired upon.
    pub fn is_shot(&self, row: usize, col: usize) -> bool {
        self.shots.get(row, col).unwrap_or(false)
    }

    /// Occupancy at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.occupancy[row][col]
    }

    /// Heuristic hit-likelihood estimate at (row, col).
    pub fn probability(&self, row: usize, col: usize) -> f64 {
        self.probability[row][col]
    }

    /// Place one ship if `placement` fits in-bounds over exclusively empty
    /// cells, marking its cells with the ship's symbol. Returns whether the
    /// placement was accepted.
    pub fn place(&mut self, spec: &ShipSpec, placement: Placement) -> bool {
        if !placement.fits(spec.length()) {
            return false;
        }
        if placement
            .cells(spec.length())
            .any(|(r, c)| self.occupancy[r][c] != Cell::Empty)
        {
            return false;
        }
        for (r, c) in placement.cells(spec.length()) {
            self.occupancy[r][c] = Cell::Ship(spec.symbol());
        }
        true
    }

    /// Place the whole fleet in catalog order by rejection sampling: sample
    /// uniform origins and orientations until each ship lands in-bounds and
    /// overlap-free. Ships may touch; only overlap is rejected. Terminates
    /// with probability 1 on this grid, so retries are unbounded.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) {
        for spec in FLEET.iter() {
            loop {
                let placement = Placement {
                    row: rng.random_range(0..GRID_SIZE),
                    col: rng.random_range(0..GRID_SIZE),
                    orientation: if rng.random() {
                        Orientation::Horizontal
                    } else {
                        Orientation::Vertical
                    },
                };
                if self.place(spec, placement) {
                    break;
                }
            }
        }
    }

    /// Resolve a shot at (row, col): mark the cell, record it in the shot
    /// mask, zero its probability, and on a hit boost the estimates of its
    /// unshot orthogonal neighbors. Sinking detection runs on every hit and
    /// decrements `ships_remaining` exactly once per ship.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        if self.shots.get(row, col)? {
            return Err(BoardError::AlreadyFired { row, col });
        }
        self.shots.set(row, col)?;
        self.probability[row][col] = 0.0;
        match self.occupancy[row][col] {
            Cell::Ship(symbol) => {
                self.occupancy[row][col] = Cell::HitMark;
                self.boost_neighbors(row, col);
                if self.ship_sunk(symbol) {
                    self.ships_remaining -= 1;
                    Ok(ShotResult::Sunk(symbol))
                } else {
                    Ok(ShotResult::Hit)
                }
            }
            Cell::Empty => {
                self.occupancy[row][col] = Cell::MissMark;
                Ok(ShotResult::Miss)
            }
            // Marks only exist on cells already in the shot mask.
            Cell::HitMark | Cell::MissMark => Err(BoardError::AlreadyFired { row, col }),
        }
    }

    /// Whether the ship owning `symbol` is fully hit: true iff no cell still
    /// carries the symbol. Symbols are unique per ship, so a full-grid scan
    /// correctly detects coverage.
    pub fn ship_sunk(&self, symbol: char) -> bool {
        !self
            .occupancy
            .iter()
            .flatten()
            .any(|&cell| cell == Cell::Ship(symbol))
    }

    // "Heat" propagation around a fresh hit: unshot orthogonal neighbors
    // become more attractive to the density-guided strategy.
    fn boost_neighbors(&mut self, row: usize, col: usize) {
        for (nr, nc) in orthogonal_neighbors(row, col) {
            if self.is_shot(nr, nc) {
                continue;
            }
            let boosted = self.probability[nr][nc] * HIT_NEIGHBOR_BOOST;
            self.probability[nr][nc] = boosted.min(PROBABILITY_CEILING);
        }
    }
}
