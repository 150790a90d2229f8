mod board;
mod common;
mod config;
mod experiment;
mod game;
mod logging;
mod ship;
mod shotmask;
mod strategy;

pub use board::*;
pub use common::*;
pub use config::*;
pub use experiment::*;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;
pub use shotmask::{ShotMask, ShotMaskError};
pub use strategy::*;
