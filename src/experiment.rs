//! Repeated-game experiments measuring mean shots per strategy.

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{NUM_RUNS, NUM_SIMULATIONS};
use crate::game::play_game;
use crate::strategy::{HuntAndTarget, PdfSearch, RandomSearch, Strategy};
use log::info;
use rand::rngs::SmallRng;

/// Mean shot count for one (strategy, run) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub strategy: &'static str,
    pub run: usize,
    pub average_shots: f64,
}

/// Mean shots over `games` independent games under `strategy`, each on a
/// fresh board with a freshly placed fleet.
pub fn run_simulation(
    strategy: &dyn Strategy,
    games: usize,
    rng: &mut SmallRng,
) -> Result<f64, BoardError> {
    let mut total_shots = 0usize;
    for _ in 0..games {
        let mut board = Board::new();
        board.place_fleet(rng);
        total_shots += play_game(&mut board, strategy, rng)?;
    }
    Ok(total_shots as f64 / games as f64)
}

/// The full experiment: [`NUM_RUNS`] independent runs of [`NUM_SIMULATIONS`]
/// games for each strategy. Rows come out in run-major order (all three
/// strategies for run 1, then run 2, ...) so run-to-run variance is visible
/// per strategy.
pub fn run_experiment(rng: &mut SmallRng) -> Result<Vec<RunResult>, BoardError> {
    experiment_rows(NUM_SIMULATIONS, rng)
}

fn experiment_rows(games: usize, rng: &mut SmallRng) -> Result<Vec<RunResult>, BoardError> {
    let strategies: [&dyn Strategy; 3] = [&RandomSearch, &PdfSearch, &HuntAndTarget];
    let mut rows = Vec::with_capacity(NUM_RUNS * strategies.len());
    for run in 1..=NUM_RUNS {
        for strategy in strategies {
            let average_shots = run_simulation(strategy, games, rng)?;
            rows.push(RunResult {
                strategy: strategy.name(),
                run,
                average_shots,
            });
        }
        info!("run {}/{} complete", run, NUM_RUNS);
    }
    Ok(rows)
}
