//! Compass headings and the fixed clockwise rotation table.
//!
//! Every rotation in the workspace goes through [`Direction::CLOCKWISE`].
//! Call sites never do signed index arithmetic on headings, which keeps the
//! boundary probe order auditable: the table *is* the probe order.
//!
//! ```text
//!        NW  N  NE
//!         W  ·  E          row grows southwards
//!        SW  S  SE         col grows eastwards
//! ```

use std::fmt;

/// One of the eight compass headings on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All headings in clockwise order starting at north.
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal headings in clockwise order starting at north.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of `self` in [`Self::CLOCKWISE`].
    #[inline]
    fn slot(self) -> usize {
        self as usize
    }

    /// `(d_row, d_col)` unit offset of one step in this heading.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North     => (-1,  0),
            Direction::NorthEast => (-1,  1),
            Direction::East      => ( 0,  1),
            Direction::SouthEast => ( 1,  1),
            Direction::South     => ( 1,  0),
            Direction::SouthWest => ( 1, -1),
            Direction::West      => ( 0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Inverse of [`delta`](Self::delta).  `None` for `(0, 0)` and for
    /// offsets longer than one step.
    pub fn from_delta(d_row: i32, d_col: i32) -> Option<Direction> {
        Direction::CLOCKWISE
            .iter()
            .copied()
            .find(|d| d.delta() == (d_row, d_col))
    }

    /// Rotate clockwise by `eighths` × 45°.
    #[inline]
    pub fn rotate_cw(self, eighths: usize) -> Direction {
        Direction::CLOCKWISE[(self.slot() + eighths) % 8]
    }

    /// Rotate counter-clockwise by `eighths` × 45°.
    #[inline]
    pub fn rotate_ccw(self, eighths: usize) -> Direction {
        Direction::CLOCKWISE[(self.slot() + 8 - eighths % 8) % 8]
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        self.rotate_cw(4)
    }

    #[inline]
    pub fn is_cardinal(self) -> bool {
        self.slot() % 2 == 0
    }

    /// Unit-length vector `(d_row, d_col)` pointing along this heading.
    pub fn unit_vector(self) -> (f64, f64) {
        let (dr, dc) = self.delta();
        let len = ((dr * dr + dc * dc) as f64).sqrt();
        (dr as f64 / len, dc as f64 / len)
    }

    /// Snap an arbitrary `(d_row, d_col)` vector onto the closest heading a
    /// robot with `connectivity` may take.
    ///
    /// Closeness is the largest dot product with the heading's unit vector;
    /// ties resolve to the heading that comes first in [`Self::CLOCKWISE`].
    /// Returns `None` for the zero vector.
    pub fn quantize(d_row: f64, d_col: f64, connectivity: Connectivity) -> Option<Direction> {
        if d_row == 0.0 && d_col == 0.0 {
            return None;
        }
        let mut best: Option<(Direction, f64)> = None;
        for &dir in connectivity.moves() {
            let (ur, uc) = dir.unit_vector();
            let score = ur * d_row + uc * d_col;
            match best {
                Some((_, s)) if score <= s + 1e-9 => {}
                _ => best = Some((dir, score)),
            }
        }
        best.map(|(d, _)| d)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North     => "N",
            Direction::NorthEast => "NE",
            Direction::East      => "E",
            Direction::SouthEast => "SE",
            Direction::South     => "S",
            Direction::SouthWest => "SW",
            Direction::West      => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(s)
    }
}

// ── Connectivity ──────────────────────────────────────────────────────────────

/// Which neighbours a robot may step to in one move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Cardinal moves only.
    #[default]
    Four,
    /// Cardinal and diagonal moves.
    Eight,
}

impl Connectivity {
    /// Headings available to the robot, in clockwise table order.
    pub fn moves(self) -> &'static [Direction] {
        match self {
            Connectivity::Four  => &Direction::CARDINALS,
            Connectivity::Eight => &Direction::CLOCKWISE,
        }
    }

    #[inline]
    pub fn allows(self, dir: Direction) -> bool {
        match self {
            Connectivity::Four  => dir.is_cardinal(),
            Connectivity::Eight => true,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Four  => f.write_str("4-connected"),
            Connectivity::Eight => f.write_str("8-connected"),
        }
    }
}

impl std::str::FromStr for Connectivity {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4" | "four"  => Ok(Connectivity::Four),
            "8" | "eight" => Ok(Connectivity::Eight),
            other => Err(crate::CoreError::Config(format!("unknown connectivity `{other}`"))),
        }
    }
}
