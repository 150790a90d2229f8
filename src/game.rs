//! Drives a single game to completion under one targeting policy.

use crate::board::Board;
use crate::common::BoardError;
use crate::strategy::Strategy;
use rand::rngs::SmallRng;

/// Fire shots chosen by `strategy` until every ship is sunk, returning the
/// total shot count. Sinking detection runs inside [`Board::fire`] on every
/// hit, so the loop only has to watch `ships_remaining`.
///
/// The only error path is a strategy violating its contract by returning an
/// already-shot or out-of-range cell, which is an engine defect rather than
/// a game condition.
pub fn play_game(
    board: &mut Board,
    strategy: &dyn Strategy,
    rng: &mut SmallRng,
) -> Result<usize, BoardError> {
    let mut shots = 0;
    while board.ships_remaining() > 0 {
        let (row, col) = strategy.next_shot(rng, board);
        board.fire(row, col)?;
        shots += 1;
    }
    Ok(shots)
}
