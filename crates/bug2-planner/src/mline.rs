//! The m-line: the discrete straight line from start to goal.
//!
//! # Rasterisation
//!
//! The cell sequence depends on the planner's connectivity:
//!
//! - **4-connected** — a 4-connected line walk.  At each step the walk
//!   moves along whichever axis keeps it closest to the true segment, so
//!   consecutive cells always share an edge.  Ties move along the row axis.
//! - **8-connected** — classic Bresenham with the column as the major
//!   `x` axis.  Consecutive cells share an edge or a corner.
//!
//! Either way the sequence starts at the start cell, ends at the goal cell,
//! and contains no cell twice, so the index of a cell is also its
//! progress along the line.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the cell centres answers "which m-line cell
//! lies within `tolerance` of this cell" in logarithmic time.  Re-join tests
//! run after every boundary step, so they never scan the line.

use std::fmt;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use bug2_core::{Cell, Connectivity};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a cell centre `[row, col]` and its position
/// along the line.
#[derive(Clone, Debug)]
struct LineEntry {
    point: [f32; 2], // [row, col]
    index: usize,
}

impl RTreeObject for LineEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LineEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dr = self.point[0] - point[0];
        let dc = self.point[1] - point[1];
        dr * dr + dc * dc
    }
}

fn centre(cell: Cell) -> [f32; 2] {
    [cell.row as f32, cell.col as f32]
}

// ── MLine ─────────────────────────────────────────────────────────────────────

/// Ordered start→goal cell sequence plus its spatial index.
///
/// Immutable after [`build`](Self::build).
#[derive(Clone)]
pub struct MLine {
    cells: Vec<Cell>,
    index: RTree<LineEntry>,
}

impl MLine {
    /// Rasterise the segment from `start` to `goal`.
    ///
    /// ```
    /// use bug2_core::{Cell, Connectivity};
    /// use bug2_planner::MLine;
    ///
    /// let line = MLine::build(Cell::new(0, 0), Cell::new(0, 3), Connectivity::Four);
    /// assert_eq!(line.len(), 4);
    /// assert_eq!(line.goal(), Cell::new(0, 3));
    /// ```
    pub fn build(start: Cell, goal: Cell, connectivity: Connectivity) -> MLine {
        let cells = match connectivity {
            Connectivity::Four  => walk_four(start, goal),
            Connectivity::Eight => bresenham(start, goal),
        };
        let entries = cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| LineEntry { point: centre(cell), index })
            .collect();
        MLine { cells, index: RTree::bulk_load(entries) }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, endpoints included.  Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Position of `cell` along the line, if it is exactly on it.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.nearest_within(cell, 0.0)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// The farthest-along m-line index whose cell lies within Euclidean
    /// distance `tolerance` of `cell`.
    ///
    /// With `tolerance == 0` this is an exact membership test.  When several
    /// line cells qualify the one closest to the goal wins, so a re-join
    /// always resumes as far along the line as possible.
    pub fn nearest_within(&self, cell: Cell, tolerance: f64) -> Option<usize> {
        let radius_2 = (tolerance * tolerance) as f32;
        self.index
            .locate_within_distance(centre(cell), radius_2)
            .map(|e| e.index)
            .max()
    }

    /// `true` if `a` lies strictly farther along the line than `b`.  Both
    /// cells must be on the line; otherwise the answer is `false`.
    pub fn is_farther_along(&self, a: Cell, b: Cell) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => ia > ib,
            _ => false,
        }
    }
}

impl fmt::Debug for MLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MLine").field("cells", &self.cells).finish_non_exhaustive()
    }
}

// ── Rasterisers ───────────────────────────────────────────────────────────────

/// 4-connected walk: `|dr| + |dc| + 1` cells.
fn walk_four(start: Cell, goal: Cell) -> Vec<Cell> {
    let (r0, c0) = start.signed();
    let (r1, c1) = goal.signed();
    let (nr, nc) = ((r1 - r0).abs(), (c1 - c0).abs());
    let (sr, sc) = ((r1 - r0).signum(), (c1 - c0).signum());

    let mut cells = Vec::with_capacity((nr + nc + 1) as usize);
    cells.push(start);
    let (mut r, mut c) = (r0, c0);
    let (mut ir, mut ic) = (0, 0);
    while ir < nr || ic < nc {
        // Compare the crossing points of the next column and row boundary.
        if (1 + 2 * ic) * nr < (1 + 2 * ir) * nc {
            c += sc;
            ic += 1;
        } else {
            r += sr;
            ir += 1;
        }
        cells.push(Cell::new(r as u32, c as u32));
    }
    cells
}

/// Bresenham: `max(|dr|, |dc|) + 1` cells.
fn bresenham(start: Cell, goal: Cell) -> Vec<Cell> {
    let (r0, c0) = start.signed();
    let (r1, c1) = goal.signed();
    let dx = (c1 - c0).abs();
    let dy = -(r1 - r0).abs();
    let (sx, sy) = ((c1 - c0).signum(), (r1 - r0).signum());

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut c, mut r) = (c0, r0);
    let mut err = dx + dy;
    loop {
        cells.push(Cell::new(r as u32, c as u32));
        if c == c1 && r == r1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            c += sx;
        }
        if e2 <= dx {
            err += dx;
            r += sy;
        }
    }
    cells
}
