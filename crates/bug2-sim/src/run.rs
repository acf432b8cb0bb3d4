//! The `Run` struct and its step loop.

use tracing::{info, warn};

use bug2_grid::{OccupancyMap, Workspace};
use bug2_planner::{Bug2Planner, Mode};

use crate::{Outcome, RunConfig, RunObserver, RunReport, SimResult};

/// Drives one [`Bug2Planner`] to completion.
///
/// Create via [`RunBuilder`][crate::RunBuilder].
pub struct Run<'w, M: OccupancyMap + ?Sized = Workspace> {
    /// Caller-side limits.
    pub config: RunConfig,

    /// The planner being driven.  Exposed read-only through
    /// [`planner`](Self::planner) so callers can inspect mode and path.
    planner: Bug2Planner<'w, M>,

    /// `step()` calls made so far, counted against `config.max_steps`.
    calls: u64,

    started: bool,
}

impl<'w, M: OccupancyMap + ?Sized> Run<'w, M> {
    pub(crate) fn new(planner: Bug2Planner<'w, M>, config: RunConfig) -> Self {
        Self { config, planner, calls: 0, started: false }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Step the planner until it stops or `config.max_steps` calls have been
    /// made.
    ///
    /// Calls observer hooks at every step.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        self.start(observer);
        while !self.planner.is_finished() {
            if self.config.max_steps.is_some_and(|max| self.calls >= max) {
                warn!(calls = self.calls, at = %self.planner.position(), "step budget exhausted");
                break;
            }
            self.advance(observer);
        }

        let report = self.report();
        info!(
            outcome = %report.outcome,
            steps = report.steps,
            hit_points = report.hit_points,
            "run finished"
        );
        observer.on_finish(&report);
        Ok(report)
    }

    /// Make at most `n` `step()` calls from the current position, ignoring
    /// `max_steps`.  Stops early once the planner stops.
    ///
    /// Useful for tests and incremental stepping.  `on_finish` is not called.
    pub fn run_steps<O: RunObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.start(observer);
        for _ in 0..n {
            if self.planner.is_finished() {
                break;
            }
            self.advance(observer);
        }
        Ok(())
    }

    /// Summary of the run so far.
    pub fn report(&self) -> RunReport {
        let outcome = match self.planner.mode() {
            Mode::Arrived => Outcome::Arrived,
            Mode::Unreachable(why) => Outcome::Unreachable(*why),
            _ => Outcome::BudgetExhausted,
        };
        RunReport {
            outcome,
            steps:          self.planner.steps().0,
            path_len:       self.planner.path().len(),
            hit_points:     self.planner.hit_points().len(),
            final_position: self.planner.position(),
        }
    }

    pub fn planner(&self) -> &Bug2Planner<'w, M> {
        &self.planner
    }

    /// `step()` calls made so far.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    // ── Step processing ───────────────────────────────────────────────────

    fn start<O: RunObserver>(&mut self, observer: &mut O) {
        if !self.started {
            self.started = true;
            observer.on_start(self.planner.mline(), self.planner.start(), self.planner.mode_kind());
        }
    }

    fn advance<O: RunObserver>(&mut self, observer: &mut O) {
        let outcome = self.planner.step();
        self.calls += 1;

        let step = self.planner.steps();
        let moved_in = self.planner.last_move_mode().unwrap_or(self.planner.mode_kind());
        observer.on_step(step, outcome, moved_in);
        // A hit and an immediate re-join happen in one call; report both.
        for &(from, to) in self.planner.last_transitions() {
            observer.on_mode_change(step, from, to, outcome.position);
        }
    }
}
