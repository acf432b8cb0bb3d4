//! Planner construction error type.

use thiserror::Error;

use bug2_core::{Cell, CoreError};

/// Errors produced when constructing a [`Bug2Planner`](crate::Bug2Planner).
///
/// Once a planner exists, stepping it never fails: every outcome
/// (arrival, an unreachable goal) is a planner state, not an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("start {cell} lies outside the {rows}x{cols} workspace")]
    StartOutOfBounds { cell: Cell, rows: u32, cols: u32 },

    #[error("goal {cell} lies outside the {rows}x{cols} workspace")]
    GoalOutOfBounds { cell: Cell, rows: u32, cols: u32 },

    #[error("start {0} is occupied")]
    StartBlocked(Cell),

    #[error("goal {0} is occupied")]
    GoalBlocked(Cell),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
