//! Append-only record of visited positions.

use bug2_core::Cell;

/// Positions the robot has occupied, in order, starting with the start cell.
///
/// Consecutive entries are always neighbours permitted by the planner's
/// connectivity.  A cell may appear more than once (boundary following can
/// revisit cells).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathLog {
    cells: Vec<Cell>,
}

impl PathLog {
    pub fn new(start: Cell) -> Self {
        Self { cells: vec![start] }
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of recorded positions (moves + 1).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves made.
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> IntoIterator for &'a PathLog {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
