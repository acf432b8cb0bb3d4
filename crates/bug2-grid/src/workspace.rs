//! Bit-grid workspace and builder.
//!
//! # Data layout
//!
//! Occupancy is one `Vec<bool>` in row-major order: cell `(r, c)` lives at
//! index `r * cols + c`.  `true` means occupied.  The grid is immutable once
//! built, which is what lets any number of planners borrow it at once.

use std::fmt;

use bug2_core::Cell;

use crate::{GridError, GridResult, OccupancyMap};

// ── Workspace ─────────────────────────────────────────────────────────────────

/// Rectangular free/occupied grid.
///
/// Construct with [`WorkspaceBuilder`], [`Workspace::from_rows`],
/// [`Workspace::parse`], or from a
/// [`WorkspaceDescriptor`](crate::WorkspaceDescriptor).
#[derive(Clone, PartialEq, Eq)]
pub struct Workspace {
    rows:     u32,
    cols:     u32,
    occupied: Vec<bool>,
}

impl Workspace {
    /// Build from a row-major 0/1 matrix.
    ///
    /// Every row must have the same, non-zero length and hold only 0 (free)
    /// or 1 (occupied).
    pub fn from_rows<R: AsRef<[u8]>>(matrix: &[R]) -> GridResult<Workspace> {
        let height = matrix.len();
        let width = matrix.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::Empty { rows: height, cols: width });
        }

        let mut b = WorkspaceBuilder::new(dim(height)?, dim(width)?);
        for (r, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRow { row: r, declared: width, got: row.len() });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => b.block(Cell::new(r as u32, c as u32)),
                    _ => return Err(GridError::BadCellValue { row: r, col: c, value }),
                }
            }
        }
        Ok(b.build())
    }

    /// Parse ASCII art: `#` occupied, `.` free, `S`/`G` free (start/goal
    /// markers, see [`MapParts::parse`](crate::MapParts::parse)).
    ///
    /// Leading and trailing blank lines are ignored; surrounding whitespace
    /// on each line is trimmed, so maps can be indented in source.
    ///
    /// ```
    /// use bug2_grid::{OccupancyMap, Workspace};
    /// use bug2_core::Cell;
    ///
    /// let ws = Workspace::parse("
    ///     ..#
    ///     ...
    /// ").unwrap();
    /// assert_eq!((ws.rows(), ws.cols()), (2, 3));
    /// assert!(!ws.is_free(Cell::new(0, 2)));
    /// ```
    pub fn parse(art: &str) -> GridResult<Workspace> {
        let mut matrix: Vec<Vec<u8>> = Vec::new();
        for (line_no, line) in art_lines(art) {
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' => Ok(1),
                    '.' | 'S' | 'G' => Ok(0),
                    _ => Err(GridError::BadGlyph { ch, line: line_no + 1, column: col + 1 }),
                })
                .collect::<GridResult<Vec<u8>>>()?;
            matrix.push(row);
        }
        Workspace::from_rows(&matrix)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// The grid as a row-major 0/1 matrix (the map record's `grid` field).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.row_slices()
            .map(|row| row.iter().map(|&o| o as u8).collect())
            .collect()
    }

    /// One slice per row.  A zero-width grid yields `rows` empty slices.
    fn row_slices(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let cols = self.cols as usize;
        (0..self.rows as usize).map(move |r| &self.occupied[r * cols..(r + 1) * cols])
    }

    #[inline]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }
}

impl OccupancyMap for Workspace {
    #[inline]
    fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    fn is_free_at(&self, row: i64, col: i64) -> bool {
        self.index(row, col).is_some_and(|i| !self.occupied[i])
    }
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workspace {}x{}", self.rows, self.cols)?;
        for row in self.row_slices() {
            let line: String = row.iter().map(|&o| if o { '#' } else { '.' }).collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Non-blank lines of an ASCII map, trimmed, with their 0-based line numbers.
pub(crate) fn art_lines(art: &str) -> impl Iterator<Item = (usize, &str)> {
    art.lines()
        .enumerate()
        .map(|(i, l)| (i, l.trim()))
        .filter(|(_, l)| !l.is_empty())
}

fn dim(n: usize) -> GridResult<u32> {
    u32::try_from(n).map_err(|_| GridError::Empty { rows: n, cols: n })
}

// ── WorkspaceBuilder ──────────────────────────────────────────────────────────

/// Construct a [`Workspace`] by blocking cells, then call
/// [`build`](Self::build).
///
/// Cells outside the grid are ignored by every `block*` method.
///
/// # Example
///
/// ```
/// use bug2_core::Cell;
/// use bug2_grid::{OccupancyMap, WorkspaceBuilder};
///
/// let mut b = WorkspaceBuilder::new(5, 5);
/// b.block_row(2, 0..5);
/// b.clear(Cell::new(2, 4)); // leave a gap
/// let ws = b.build();
/// assert!(!ws.is_free(Cell::new(2, 0)));
/// assert!(ws.is_free(Cell::new(2, 4)));
/// ```
pub struct WorkspaceBuilder {
    rows:     u32,
    cols:     u32,
    occupied: Vec<bool>,
}

impl WorkspaceBuilder {
    /// An all-free `rows × cols` grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            occupied: vec![false; rows as usize * cols as usize],
        }
    }

    fn slot(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Mark one cell occupied.
    pub fn block(&mut self, cell: Cell) {
        if let Some(i) = self.slot(cell) {
            self.occupied[i] = true;
        }
    }

    /// Mark one cell free.
    pub fn clear(&mut self, cell: Cell) {
        if let Some(i) = self.slot(cell) {
            self.occupied[i] = false;
        }
    }

    /// Block columns `cols` of `row`.
    pub fn block_row(&mut self, row: u32, cols: std::ops::Range<u32>) {
        for c in cols {
            self.block(Cell::new(row, c));
        }
    }

    /// Block rows `rows` of `col`.
    pub fn block_col(&mut self, col: u32, rows: std::ops::Range<u32>) {
        for r in rows {
            self.block(Cell::new(r, col));
        }
    }

    /// Block the hollow rectangle whose corners are `a` and `b` (inclusive).
    pub fn block_ring(&mut self, a: Cell, b: Cell) {
        let (top, bottom) = (a.row.min(b.row), a.row.max(b.row));
        let (left, right) = (a.col.min(b.col), a.col.max(b.col));
        self.block_row(top, left..right + 1);
        self.block_row(bottom, left..right + 1);
        self.block_col(left, top..bottom + 1);
        self.block_col(right, top..bottom + 1);
    }

    /// Block the filled rectangle whose corners are `a` and `b` (inclusive).
    pub fn block_rect(&mut self, a: Cell, b: Cell) {
        for r in a.row.min(b.row)..=a.row.max(b.row) {
            self.block_row(r, a.col.min(b.col)..a.col.max(b.col) + 1);
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.slot(cell).is_some_and(|i| self.occupied[i])
    }

    pub fn build(self) -> Workspace {
        Workspace {
            rows:     self.rows,
            cols:     self.cols,
            occupied: self.occupied,
        }
    }
}
