//! Targeting policies: each maps the current board to the next shot.

use crate::board::{orthogonal_neighbors, Board, Cell};
use crate::config::GRID_SIZE;
use rand::rngs::SmallRng;
use rand::Rng;

/// Interface implemented by the targeting policies.
///
/// While any unshot cell exists, `next_shot` must return an in-bounds cell
/// not yet fired upon. The fleet occupies fewer cells than the grid, so such
/// a cell always exists until the game ends.
pub trait Strategy {
    /// Label used in result rows.
    fn name(&self) -> &'static str;

    /// Choose the next cell to fire upon.
    fn next_shot(&self, rng: &mut SmallRng, board: &Board) -> (usize, usize);
}

/// Uniform rejection sampling over the grid until an unshot cell turns up.
pub struct RandomSearch;

impl Strategy for RandomSearch {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn next_shot(&self, rng: &mut SmallRng, board: &Board) -> (usize, usize) {
        loop {
            let row = rng.random_range(0..GRID_SIZE);
            let col = rng.random_range(0..GRID_SIZE);
            if !board.is_shot(row, col) {
                return (row, col);
            }
        }
    }
}

/// Fires at the unshot cell with the highest heuristic probability. Ties
/// break to the first occurrence in row-major order, keeping the choice
/// deterministic for a given board.
pub struct PdfSearch;

impl Strategy for PdfSearch {
    fn name(&self) -> &'static str {
        "PDF"
    }

    fn next_shot(&self, _rng: &mut SmallRng, board: &Board) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_prob = -1.0f64;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !board.is_shot(row, col) && board.probability(row, col) > best_prob {
                    best_prob = board.probability(row, col);
                    best = (row, col);
                }
            }
        }
        best
    }
}

/// Finishes ships it has started hitting before exploring elsewhere: fire at
/// the first unshot orthogonal neighbor of any hit-marked cell, falling back
/// to random search when no such neighbor remains.
pub struct HuntAndTarget;

impl Strategy for HuntAndTarget {
    fn name(&self) -> &'static str {
        "Hunt and Target"
    }

    fn next_shot(&self, rng: &mut SmallRng, board: &Board) -> (usize, usize) {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if board.cell(row, col) != Cell::HitMark {
                    continue;
                }
                for (nr, nc) in orthogonal_neighbors(row, col) {
                    if !board.is_shot(nr, nc) {
                        return (nr, nc);
                    }
                }
            }
        }
        RandomSearch.next_shot(rng, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FLEET;
    use crate::ship::{Orientation, Placement};
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn random_search_never_repeats_a_shot() {
        let mut rng = rng();
        let mut board = Board::new();
        // leave a handful of cells unshot to stress the rejection loop
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if (row, col) != (3, 3) && (row, col) != (9, 0) {
                    board.fire(row, col).unwrap();
                }
            }
        }
        for _ in 0..20 {
            let (row, col) = RandomSearch.next_shot(&mut rng, &board);
            assert!(!board.is_shot(row, col));
        }
    }

    #[test]
    fn pdf_search_is_deterministic_on_equal_boards() {
        let mut rng = rng();
        let make_board = || {
            let mut board = Board::new();
            board.place(
                &FLEET[0],
                Placement {
                    row: 4,
                    col: 2,
                    orientation: Orientation::Horizontal,
                },
            );
            board.fire(4, 4).unwrap();
            board
        };
        let a = PdfSearch.next_shot(&mut rng, &make_board());
        let b = PdfSearch.next_shot(&mut rng, &make_board());
        assert_eq!(a, b);
    }

    #[test]
    fn pdf_search_returns_the_row_major_maximum() {
        let mut rng = rng();
        let board = Board::new();
        // uniform probabilities tie everywhere; first cell wins
        assert_eq!(PdfSearch.next_shot(&mut rng, &board), (0, 0));

        let mut board = Board::new();
        board.place(
            &FLEET[0],
            Placement {
                row: 4,
                col: 2,
                orientation: Orientation::Horizontal,
            },
        );
        board.fire(4, 4).unwrap();
        // the hit at (4,4) heats (3,4), (5,4), (4,3) and (4,5); the first
        // of those in row-major order is the strategy's pick
        let pick = PdfSearch.next_shot(&mut rng, &board);
        assert_eq!(pick, (3, 4));
        let max = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| !board.is_shot(r, c))
            .map(|(r, c)| board.probability(r, c))
            .fold(f64::MIN, f64::max);
        assert_eq!(board.probability(pick.0, pick.1), max);
    }

    #[test]
    fn pdf_search_skips_shot_cells() {
        let mut rng = rng();
        let mut board = Board::new();
        board.fire(0, 0).unwrap();
        board.fire(0, 1).unwrap();
        assert_eq!(PdfSearch.next_shot(&mut rng, &board), (0, 2));
    }

    #[test]
    fn hunt_and_target_fires_adjacent_to_a_hit() {
        let mut rng = rng();
        let mut board = Board::new();
        board.place(
            &FLEET[3],
            Placement {
                row: 5,
                col: 4,
                orientation: Orientation::Horizontal,
            },
        );
        board.fire(5, 5).unwrap();
        // neighbor scan order is up, down, left, right
        assert_eq!(HuntAndTarget.next_shot(&mut rng, &board), (4, 5));
        board.fire(4, 5).unwrap();
        assert_eq!(HuntAndTarget.next_shot(&mut rng, &board), (6, 5));
        board.fire(6, 5).unwrap();
        assert_eq!(HuntAndTarget.next_shot(&mut rng, &board), (5, 4));
    }

    #[test]
    fn hunt_and_target_falls_back_to_random_without_hits() {
        let mut rng = rng();
        let mut board = Board::new();
        board.fire(0, 0).unwrap(); // miss, no hit marks anywhere
        let (row, col) = HuntAndTarget.next_shot(&mut rng, &board);
        assert!(!board.is_shot(row, col));
    }

    #[test]
    fn hunt_and_target_ignores_exhausted_hits() {
        let mut rng = rng();
        let mut board = Board::new();
        board.place(
            &FLEET[4],
            Placement {
                row: 0,
                col: 0,
                orientation: Orientation::Horizontal,
            },
        );
        board.fire(0, 0).unwrap();
        // exhaust every neighbor of the hit at (0,0)
        board.fire(1, 0).unwrap();
        board.fire(0, 1).unwrap();
        // neighbors of the second hit at (0,1)
        board.fire(1, 1).unwrap();
        board.fire(0, 2).unwrap();
        let (row, col) = HuntAndTarget.next_shot(&mut rng, &board);
        assert!(!board.is_shot(row, col));
    }
}
