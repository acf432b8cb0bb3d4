//! Discrete grid coordinate.
//!
//! `Cell` is `Copy + Ord + Hash` so it can key hash sets and sorted
//! collections without ceremony.  Rows grow southwards and columns grow
//! eastwards, matching row-major grid storage.

use std::fmt;

use crate::{CoreError, Direction};

/// A grid cell addressed by `(row, col)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Build a cell from signed coordinates, failing on negative or
    /// oversized values.
    pub fn try_from_signed(row: i64, col: i64) -> Result<Cell, CoreError> {
        match (u32::try_from(row), u32::try_from(col)) {
            (Ok(r), Ok(c)) => Ok(Cell::new(r, c)),
            _ => Err(CoreError::Coordinate { row, col }),
        }
    }

    /// Signed `(row, col)` pair, convenient for offset arithmetic.
    #[inline]
    pub fn signed(self) -> (i64, i64) {
        (self.row as i64, self.col as i64)
    }

    /// The neighbour one step away in `dir`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the grid's business, not the cell's.
    #[inline]
    pub fn offset(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let (r, c) = self.signed();
        Cell::try_from_signed(r + dr as i64, c + dc as i64).ok()
    }

    /// `true` if `other` is one of the eight ring neighbours of `self`.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.direction_to(other).is_some()
    }

    /// Heading from `self` to an adjacent `other`, or `None` if the two
    /// cells are equal or not adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        let (r0, c0) = self.signed();
        let (r1, c1) = other.signed();
        let (dr, dc) = (r1 - r0, c1 - c0);
        if dr.abs() > 1 || dc.abs() > 1 {
            return None;
        }
        Direction::from_delta(dr as i32, dc as i32)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
