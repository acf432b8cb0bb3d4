//! Run observer trait for progress reporting and data collection.

use bug2_core::{Cell, StepIndex};
use bug2_planner::{MLine, ModeKind, StepOutcome};

use crate::RunReport;

/// Callbacks invoked by [`Run::run`][crate::Run::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: excursion counter
///
/// ```
/// use bug2_core::{Cell, StepIndex};
/// use bug2_planner::ModeKind;
/// use bug2_sim::RunObserver;
///
/// #[derive(Default)]
/// struct Excursions(usize);
///
/// impl RunObserver for Excursions {
///     fn on_mode_change(&mut self, _: StepIndex, _: ModeKind, to: ModeKind, _: Cell) {
///         if to == ModeKind::FollowBoundary {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before the first step with the m-line, the start cell,
    /// and the planner's initial mode (`Arrived` if start is already at the
    /// goal).
    fn on_start(&mut self, _mline: &MLine, _start: Cell, _mode: ModeKind) {}

    /// Called after every `step()` call.  `step` is the planner's move count
    /// after the call; `mode` is the mode the move was made in, or the mode
    /// the call left the planner in if it did not move.
    fn on_step(&mut self, _step: StepIndex, _outcome: StepOutcome, _mode: ModeKind) {}

    /// Called once per mode change, after `on_step`.  One call can change
    /// mode more than once (hit, boundary move, re-join); each change is
    /// reported in order with the same `step` and `at`.
    fn on_mode_change(&mut self, _step: StepIndex, _from: ModeKind, _to: ModeKind, _at: Cell) {}

    /// Called once when [`Run::run`][crate::Run::run] returns.
    fn on_finish(&mut self, _report: &RunReport) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
