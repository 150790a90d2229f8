//! Bit-packed shot tracking for an N×N grid.
//!
//! The mask records which cells of a game's grid have already been fired
//! upon, packed into a single unsigned integer `T`. It avoids heap
//! allocations and makes the per-game duplicate-shot check a couple of
//! bit operations.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by shot mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotMaskError {
    /// Requested grid N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for ShotMaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotMaskError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            ShotMaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N shot mask stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShotMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> ShotMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty mask (no cells fired) without size check.
    #[inline]
    pub fn new() -> Self {
        ShotMask { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, ShotMaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if N * N > capacity {
            Err(ShotMaskError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(ShotMask { bits: T::zero() })
        }
    }

    /// Number of cells fired upon so far.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell has been fired upon.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (row, col) has been fired upon.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, ShotMaskError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Record a shot at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), ShotMaskError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), ShotMaskError> {
        if row >= N || col >= N {
            Err(ShotMaskError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for ShotMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for ShotMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShotMask<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
