//! Plain data row types written by output backends.

use bug2_core::Cell;
use bug2_planner::ModeKind;
use bug2_sim::RunReport;

/// One recorded robot position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRow {
    /// Moves made when the robot stood here; 0 for the start cell.
    pub step: u64,
    pub row:  u32,
    pub col:  u32,
    /// Mode the move into this cell was made in; the initial mode for the
    /// start cell.
    pub mode: ModeKind,
}

impl PathRow {
    pub fn new(step: u64, cell: Cell, mode: ModeKind) -> Self {
        Self { step, row: cell.row, col: cell.col, mode }
    }
}

/// End-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    /// `arrived`, `trapped`, `loop_closed`, or `budget_exhausted`.
    pub outcome:    &'static str,
    pub steps:      u64,
    pub path_len:   u64,
    pub hit_points: u64,
    pub final_row:  u32,
    pub final_col:  u32,
}

impl From<&RunReport> for RunSummaryRow {
    fn from(r: &RunReport) -> Self {
        Self {
            outcome:    r.outcome.label(),
            steps:      r.steps,
            path_len:   r.path_len as u64,
            hit_points: r.hit_points as u64,
            final_row:  r.final_position.row,
            final_col:  r.final_position.col,
        }
    }
}
