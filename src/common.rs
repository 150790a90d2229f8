//! Common types for the simulator: shot outcomes and board errors.

use crate::shotmask::ShotMaskError;

/// Result of resolving one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship segment that did not complete the ship.
    Hit,
    /// Shot completed a ship, carrying its symbol.
    Sunk(char),
}

impl ShotResult {
    /// True for both plain hits and sinking hits.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Board operations. These indicate engine contract
/// violations (a strategy re-targeting a fired cell, or an out-of-range
/// index), not recoverable game conditions.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying shot mask error (invalid size or index).
    ShotMask(ShotMaskError),
    /// The cell has already been fired upon this game.
    AlreadyFired { row: usize, col: usize },
}

impl From<ShotMaskError> for BoardError {
    fn from(err: ShotMaskError) -> Self {
        BoardError::ShotMask(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShotMask(e) => write!(f, "Shot mask error: {}", e),
            BoardError::AlreadyFired { row, col } => {
                write!(f, "Cell ({}, {}) was already fired upon", row, col)
            }
        }
    }
}
