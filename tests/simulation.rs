//! End-to-end statistical checks over full experiment-sized workloads.

use fleetsim::{run_simulation, HuntAndTarget, PdfSearch, RandomSearch, NUM_SIMULATIONS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn random_search_matches_the_closed_form_expectation() {
    let mut rng = SmallRng::seed_from_u64(0xF1EE7);
    let mean = run_simulation(&RandomSearch, NUM_SIMULATIONS, &mut rng).unwrap();
    // Random search never re-targets a cell, so a game is a random
    // permutation of the 100 cells ending at the last of the 17 fleet
    // cells: E = 101 - 101/18 ~ 95.4. Ten thousand games pin the mean to
    // well within a shot of that.
    assert!(
        (94.0..97.5).contains(&mean),
        "random search mean {} outside expected band",
        mean
    );
}

#[test]
fn informed_strategies_beat_random_search() {
    const GAMES: usize = 2_000;
    let mut rng = SmallRng::seed_from_u64(99);
    let random = run_simulation(&RandomSearch, GAMES, &mut rng).unwrap();
    let pdf = run_simulation(&PdfSearch, GAMES, &mut rng).unwrap();
    let hunt = run_simulation(&HuntAndTarget, GAMES, &mut rng).unwrap();
    assert!(
        pdf < random,
        "PDF mean {} should be below random mean {}",
        pdf,
        random
    );
    assert!(
        hunt < random,
        "hunt-and-target mean {} should be below random mean {}",
        hunt,
        random
    );
}
