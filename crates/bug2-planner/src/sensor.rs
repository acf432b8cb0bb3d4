//! Local boundary sensing.
//!
//! The planner only ever looks at the ring of eight cells around it.  A
//! [`BoundarySensor`] turns that ring into either a raw [`Neighborhood`]
//! (for the per-step boundary tracer) or a [`BoundaryEstimate`]: an outward
//! normal plus the two tangents along the boundary, ordered by how well
//! they point toward the goal.
//!
//! Out-of-bounds cells read as occupied, so the grid border behaves like
//! any other wall.

use bug2_core::{Cell, Connectivity, Direction};
use bug2_grid::OccupancyMap;

use crate::Handedness;

// ── Neighborhood ──────────────────────────────────────────────────────────────

/// Occupancy of the eight ring cells around a position.
///
/// Bit `i` is set when [`Direction::CLOCKWISE`]`[i]` is occupied or out of
/// bounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Neighborhood(u8);

impl Neighborhood {
    #[inline]
    fn bit(dir: Direction) -> u8 {
        1 << dir as u8
    }

    #[inline]
    pub fn is_blocked(self, dir: Direction) -> bool {
        self.0 & Self::bit(dir) != 0
    }

    #[inline]
    pub fn is_free(self, dir: Direction) -> bool {
        !self.is_blocked(dir)
    }

    /// No ring cell is occupied.
    #[inline]
    pub fn is_clear(self) -> bool {
        self.0 == 0
    }

    /// Every ring cell is occupied.
    #[inline]
    pub fn is_enclosed(self) -> bool {
        self.0 == u8::MAX
    }

    /// Occupied headings in clockwise table order.
    pub fn blocked(self) -> impl Iterator<Item = Direction> {
        Direction::CLOCKWISE.into_iter().filter(move |&d| self.is_blocked(d))
    }
}

// ── BoundaryEstimate ──────────────────────────────────────────────────────────

/// One way along the boundary.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tangent {
    /// Allowed heading closest to the continuous tangent vector.
    pub heading:    Direction,
    /// Side the obstacle ends up on when travelling along this tangent.
    pub handedness: Handedness,
}

/// Local boundary geometry around one cell.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BoundaryEstimate {
    /// Sum of the sensed occupied offsets, `(d_row, d_col)`.  Points into
    /// the obstacle.
    pub normal:   (f64, f64),
    /// Both tangents, the one better aligned with the goal first.
    pub tangents: [Tangent; 2],
}

// ── BoundarySensor ────────────────────────────────────────────────────────────

/// Reads the ring around a cell through an [`OccupancyMap`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BoundarySensor {
    connectivity: Connectivity,
}

impl BoundarySensor {
    pub fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Occupancy of all eight ring cells around `at`.
    pub fn sample<M: OccupancyMap + ?Sized>(&self, map: &M, at: Cell) -> Neighborhood {
        let (r, c) = at.signed();
        let mut bits = 0u8;
        for dir in Direction::CLOCKWISE {
            let (dr, dc) = dir.delta();
            if !map.is_free_at(r + dr as i64, c + dc as i64) {
                bits |= Neighborhood::bit(dir);
            }
        }
        Neighborhood(bits)
    }

    /// Estimate the boundary at `at`.
    ///
    /// Only the connectivity's own neighbours are sensed: the four cardinals
    /// for [`Connectivity::Four`], all eight for [`Connectivity::Eight`].
    /// Returns `None` when none of them is occupied.
    ///
    /// The normal is the sum of the occupied offsets.  When they cancel out
    /// (a corridor, a fully enclosed cell) the first occupied heading in
    /// table order stands in for it.  Tangents are the normal rotated ±90°;
    /// the one with the larger dot product against `goal - at` comes first,
    /// ties going to the right-handed tangent.
    pub fn sense<M: OccupancyMap + ?Sized>(
        &self,
        map:  &M,
        at:   Cell,
        goal: Cell,
    ) -> Option<BoundaryEstimate> {
        let ring = self.sample(map, at);
        let mut occupied = self
            .connectivity
            .moves()
            .iter()
            .copied()
            .filter(|&d| ring.is_blocked(d))
            .peekable();
        let first = *occupied.peek()?;

        let (mut nr, mut nc) = (0i32, 0i32);
        for d in occupied {
            let (dr, dc) = d.delta();
            nr += dr;
            nc += dc;
        }
        if (nr, nc) == (0, 0) {
            (nr, nc) = first.delta();
        }
        let normal = (nr as f64, nc as f64);

        // Obstacle on the right: heading is the normal turned 90° ccw.
        let right = (-normal.1, normal.0);
        let left = (normal.1, -normal.0);
        let toward = (
            goal.row as f64 - at.row as f64,
            goal.col as f64 - at.col as f64,
        );
        let score = |v: (f64, f64)| {
            let len = v.0.hypot(v.1);
            (v.0 * toward.0 + v.1 * toward.1) / len
        };

        let tangent = |v: (f64, f64), handedness| Tangent {
            // A non-zero normal always quantizes.
            heading: Direction::quantize(v.0, v.1, self.connectivity).unwrap_or(first),
            handedness,
        };
        let r = tangent(right, Handedness::Right);
        let l = tangent(left, Handedness::Left);
        let tangents = if score(left) > score(right) + 1e-9 { [l, r] } else { [r, l] };

        Some(BoundaryEstimate { normal, tangents })
    }
}

/// First free cardinal heading, scanning clockwise from `heading`.
///
/// Used when the tracer has nothing to hug.  A diagonal `heading` starts
/// the scan at the next cardinal clockwise.
pub fn cardinal_probe(ring: Neighborhood, heading: Direction) -> Option<Direction> {
    (0..8)
        .map(|k| heading.rotate_cw(k))
        .filter(|d| d.is_cardinal())
        .find(|&d| ring.is_free(d))
}
