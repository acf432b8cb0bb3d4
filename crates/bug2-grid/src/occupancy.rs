//! The occupancy oracle trait.
//!
//! # Pluggability
//!
//! `bug2-planner` senses the world only through [`OccupancyMap`], so
//! applications can back it with something other than the bundled
//! [`Workspace`](crate::Workspace) (a costmap threshold, a live sensor
//! buffer) without touching the planner.
//!
//! # Thread safety
//!
//! Implementations must be `Sync`: one map is routinely shared read-only by
//! many planners, including across Rayon workers in batch runs.

use bug2_core::Cell;

/// Read-only occupancy over a bounded `rows × cols` grid.
pub trait OccupancyMap: Sync {
    fn rows(&self) -> u32;

    fn cols(&self) -> u32;

    /// `true` if `(row, col)` is inside the grid and free.
    ///
    /// Signed coordinates let callers probe one step past the border; every
    /// out-of-bounds coordinate reports "not free".
    fn is_free_at(&self, row: i64, col: i64) -> bool;

    /// `true` if `cell` is inside the grid.
    #[inline]
    fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    #[inline]
    fn is_free(&self, cell: Cell) -> bool {
        let (r, c) = cell.signed();
        self.is_free_at(r, c)
    }
}

impl<M: OccupancyMap + ?Sized> OccupancyMap for &M {
    fn rows(&self) -> u32 {
        (**self).rows()
    }

    fn cols(&self) -> u32 {
        (**self).cols()
    }

    fn is_free_at(&self, row: i64, col: i64) -> bool {
        (**self).is_free_at(row, col)
    }
}
