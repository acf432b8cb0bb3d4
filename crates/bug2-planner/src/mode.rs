//! Planner modes and boundary-excursion state.
//!
//! The planner is a two-mode machine plus two terminal states:
//!
//! ```text
//!            blocked m-line cell
//!  SeekGoal ─────────────────────▶ FollowBoundary
//!     ▲  │                            │  │  │
//!     │  │ goal                re-join │  │  │ trapped / loop closed
//!     │  ▼                            │  │  ▼
//!     │ Arrived ◀──────────── goal ───┘  │ Unreachable
//!     └──────────────────────────────────┘
//! ```
//!
//! Boundary-following data lives inside [`Mode::FollowBoundary`], so it
//! cannot outlive the excursion it belongs to.

use std::fmt;

use rustc_hash::FxHashSet;

use bug2_core::{Cell, Direction, StepIndex};

// ── Handedness ────────────────────────────────────────────────────────────────

/// Which side of the robot the obstacle stays on while following it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Handedness {
    /// Obstacle on the right; the probe sweep turns counter-clockwise.
    Right,
    /// Obstacle on the left; the probe sweep turns clockwise.
    Left,
}

impl Handedness {
    /// `from` rotated `eighths` × 45° away from the obstacle.
    #[inline]
    pub fn sweep(self, from: Direction, eighths: usize) -> Direction {
        match self {
            Handedness::Right => from.rotate_ccw(eighths),
            Handedness::Left  => from.rotate_cw(eighths),
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handedness::Right => f.write_str("right"),
            Handedness::Left  => f.write_str("left"),
        }
    }
}

// ── Unreachable ───────────────────────────────────────────────────────────────

/// Why the planner gave up.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Unreachable {
    /// Every neighbour of the current cell is occupied or out of bounds.
    Trapped,
    /// The boundary tracer repeated a `(cell, hugged side)` state without
    /// finding a re-join point.  `at_hit_point` is `true` when the repeat
    /// happened at the excursion's hit point, the classic Bug2 criterion.
    LoopClosed { at_hit_point: bool },
}

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unreachable::Trapped => f.write_str("trapped"),
            Unreachable::LoopClosed { at_hit_point: true } => f.write_str("loop closed at hit point"),
            Unreachable::LoopClosed { at_hit_point: false } => f.write_str("loop closed"),
        }
    }
}

// ── Excursion ─────────────────────────────────────────────────────────────────

/// State of one boundary-following excursion, from a hit point until the
/// robot re-joins the m-line, arrives, or gives up.
#[derive(Clone, Debug)]
pub struct Excursion {
    /// Cell the robot occupied when the m-line was blocked.
    pub hit_point:     Cell,
    /// M-line index of the blocked cell.  Re-joins never resume behind it.
    pub blocked_index: usize,
    /// Goal distance at the hit point.  A re-join must beat it strictly.
    pub hit_distance:  f64,
    /// Locked on the first boundary step, fixed for the whole excursion.
    pub handedness:    Handedness,
    /// Heading from the robot to the occupied cell it is tracing, or `None`
    /// after a move that left every neighbour free.
    pub hug:           Option<Direction>,
    /// Heading of the last move (the blocked seek heading before the first).
    pub heading:       Direction,
    pub started_at:    StepIndex,
    visited:           FxHashSet<(Cell, Direction)>,
}

impl Excursion {
    pub(crate) fn new(
        hit_point:     Cell,
        blocked_index: usize,
        hit_distance:  f64,
        handedness:    Handedness,
        seek_heading:  Direction,
        started_at:    StepIndex,
    ) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert((hit_point, seek_heading));
        Self {
            hit_point,
            blocked_index,
            hit_distance,
            handedness,
            hug: Some(seek_heading),
            heading: seek_heading,
            started_at,
            visited,
        }
    }

    /// Record a tracer state.  Returns `false` if it was already seen.
    pub(crate) fn visit(&mut self, at: Cell, hug: Direction) -> bool {
        self.visited.insert((at, hug))
    }

    /// Number of distinct tracer states seen so far.
    pub fn states_seen(&self) -> usize {
        self.visited.len()
    }
}

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Current planner mode.
#[derive(Clone, Debug)]
pub enum Mode {
    /// Stepping along the m-line; `next` is the index of the m-line cell the
    /// next move targets.
    SeekGoal { next: usize },
    FollowBoundary(Excursion),
    Arrived,
    Unreachable(Unreachable),
}

/// Data-free discriminant of [`Mode`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ModeKind {
    SeekGoal,
    FollowBoundary,
    Arrived,
    Unreachable,
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::SeekGoal { .. }   => ModeKind::SeekGoal,
            Mode::FollowBoundary(_) => ModeKind::FollowBoundary,
            Mode::Arrived           => ModeKind::Arrived,
            Mode::Unreachable(_)    => ModeKind::Unreachable,
        }
    }

    /// `true` for `Arrived` and `Unreachable`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::Arrived | Mode::Unreachable(_))
    }

    pub fn excursion(&self) -> Option<&Excursion> {
        match self {
            Mode::FollowBoundary(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModeKind::SeekGoal       => "seek_goal",
            ModeKind::FollowBoundary => "follow_boundary",
            ModeKind::Arrived        => "arrived",
            ModeKind::Unreachable    => "unreachable",
        };
        f.write_str(s)
    }
}
