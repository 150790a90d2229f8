use crate::ship::ShipSpec;

pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Carrier", 5, 'C'),
    ShipSpec::new("Battleship", 4, 'B'),
    ShipSpec::new("Destroyer", 3, 'D'),
    ShipSpec::new("Submarine", 3, 'S'),
    ShipSpec::new("Patrol Boat", 2, 'P'),
];
pub const TOTAL_SHIP_CELLS: usize = 17;

pub const NUM_SIMULATIONS: usize = 10_000;
pub const NUM_RUNS: usize = 10;

/// Heuristic hit-likelihood constants. These are not Bayesian posteriors;
/// they only bias the density-guided strategy toward cells next to hits.
pub const INITIAL_PROBABILITY: f64 = 0.17;
pub const HIT_NEIGHBOR_BOOST: f64 = 1.5;
pub const PROBABILITY_CEILING: f64 = 1.0;
