//! End-of-run summary.

use std::fmt;

use bug2_core::Cell;
use bug2_planner::Unreachable;

/// How a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Arrived,
    Unreachable(Unreachable),
    /// The caller's step budget ran out before the planner stopped.
    BudgetExhausted,
}

impl Outcome {
    /// Short machine-friendly label, used as the `outcome` column in output
    /// files.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Arrived => "arrived",
            Outcome::Unreachable(Unreachable::Trapped) => "trapped",
            Outcome::Unreachable(Unreachable::LoopClosed { .. }) => "loop_closed",
            Outcome::BudgetExhausted => "budget_exhausted",
        }
    }

    pub fn is_arrived(self) -> bool {
        self == Outcome::Arrived
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unreachable(why) => write!(f, "unreachable ({why})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Summary handed to [`RunObserver::on_finish`](crate::RunObserver::on_finish)
/// and returned by [`Run::run`](crate::Run::run).
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub outcome:        Outcome,
    /// Moves made.
    pub steps:          u64,
    /// Recorded positions, start included.
    pub path_len:       usize,
    /// Number of boundary-following excursions started.
    pub hit_points:     usize,
    pub final_position: Cell,
}
