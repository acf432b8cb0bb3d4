//! Fluent builder for constructing a [`Run`].

use tracing::debug;

use bug2_core::{Cell, PlannerConfig};
use bug2_grid::{OccupancyMap, Workspace};
use bug2_planner::Bug2Planner;

use crate::{Run, RunConfig, SimResult};

/// Fluent builder for [`Run<M>`].
///
/// # Required inputs
///
/// - `map: &M` where `M: OccupancyMap` (usually a [`Workspace`])
/// - start and goal cells
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                              |
/// |------------------------|--------------------------------------|
/// | `.config(c)`           | `RunConfig::default()` (no budget)   |
/// | `.planner_config(c)`   | `PlannerConfig::default()`           |
///
/// # Example
///
/// ```
/// use bug2_core::Cell;
/// use bug2_grid::WorkspaceBuilder;
/// use bug2_sim::{NoopObserver, Outcome, RunBuilder, RunConfig};
///
/// let ws = WorkspaceBuilder::new(4, 4).build();
/// let mut run = RunBuilder::new(&ws, Cell::new(0, 0), Cell::new(3, 3))
///     .config(RunConfig::with_max_steps(100))
///     .build()
///     .unwrap();
/// let report = run.run(&mut NoopObserver).unwrap();
/// assert_eq!(report.outcome, Outcome::Arrived);
/// ```
pub struct RunBuilder<'w, M: OccupancyMap + ?Sized = Workspace> {
    map:            &'w M,
    start:          Cell,
    goal:           Cell,
    config:         RunConfig,
    planner_config: PlannerConfig,
}

impl<'w, M: OccupancyMap + ?Sized> RunBuilder<'w, M> {
    pub fn new(map: &'w M, start: Cell, goal: Cell) -> Self {
        Self {
            map,
            start,
            goal,
            config:         RunConfig::default(),
            planner_config: PlannerConfig::default(),
        }
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    pub fn planner_config(mut self, config: PlannerConfig) -> Self {
        self.planner_config = config;
        self
    }

    /// Validate inputs, construct the planner, and return a ready-to-run
    /// [`Run`].
    pub fn build(self) -> SimResult<Run<'w, M>> {
        self.config.validate()?;
        let planner = Bug2Planner::with_config(self.map, self.start, self.goal, self.planner_config)?;
        debug!(
            start = %self.start,
            goal = %self.goal,
            max_steps = ?self.config.max_steps,
            "run built"
        );
        Ok(Run::new(planner, self.config))
    }
}
