//! Unit tests for bug2-sim.

#[cfg(test)]
mod run {
    use bug2_core::{Cell, PlannerConfig, StepIndex};
    use bug2_grid::{MapParts, Workspace, WorkspaceBuilder};
    use bug2_planner::{MLine, ModeKind, PlanError, StepOutcome, Unreachable};

    use crate::{NoopObserver, Outcome, RunBuilder, RunConfig, RunObserver, RunReport, SimError};

    fn c(r: u32, col: u32) -> Cell {
        Cell::new(r, col)
    }

    fn wall_with_gap() -> Workspace {
        let mut b = WorkspaceBuilder::new(7, 7);
        b.block_row(3, 0..7);
        b.clear(c(3, 5));
        b.build()
    }

    #[derive(Default)]
    struct Recorder {
        starts:   usize,
        mline:    usize,
        steps:    Vec<(StepIndex, StepOutcome)>,
        modes:    Vec<ModeKind>,
        changes:  Vec<(ModeKind, ModeKind, Cell)>,
        finished: Option<RunReport>,
    }

    impl RunObserver for Recorder {
        fn on_start(&mut self, mline: &MLine, _start: Cell, _mode: ModeKind) {
            self.starts += 1;
            self.mline = mline.len();
        }

        fn on_step(&mut self, step: StepIndex, outcome: StepOutcome, mode: ModeKind) {
            self.steps.push((step, outcome));
            self.modes.push(mode);
        }

        fn on_mode_change(&mut self, _step: StepIndex, from: ModeKind, to: ModeKind, at: Cell) {
            self.changes.push((from, to, at));
        }

        fn on_finish(&mut self, report: &RunReport) {
            self.finished = Some(report.clone());
        }
    }

    #[test]
    fn wall_with_gap_report() {
        let ws = wall_with_gap();
        let mut run = RunBuilder::new(&ws, c(1, 2), c(5, 2)).build().unwrap();
        let report = run.run(&mut NoopObserver).unwrap();
        assert_eq!(
            report,
            RunReport {
                outcome:        Outcome::Arrived,
                steps:          10,
                path_len:       11,
                hit_points:     1,
                final_position: c(5, 2),
            }
        );
        assert_eq!(run.calls(), 10);
    }

    #[test]
    fn observer_sees_every_step_and_mode_change() {
        let ws = wall_with_gap();
        let mut run = RunBuilder::new(&ws, c(1, 2), c(5, 2)).build().unwrap();
        let mut rec = Recorder::default();
        let report = run.run(&mut rec).unwrap();

        assert_eq!(rec.starts, 1);
        assert_eq!(rec.mline, 5);
        assert_eq!(rec.steps.len(), 10);
        assert_eq!(rec.steps.last().map(|s| s.0), Some(StepIndex(10)));
        assert_eq!(
            rec.changes,
            vec![
                (ModeKind::SeekGoal, ModeKind::FollowBoundary, c(2, 3)),
                (ModeKind::FollowBoundary, ModeKind::SeekGoal, c(4, 2)),
                (ModeKind::SeekGoal, ModeKind::Arrived, c(5, 2)),
            ]
        );
        assert_eq!(rec.finished, Some(report));
    }

    #[test]
    fn same_step_hit_and_rejoin_are_both_reported() {
        let mut b = WorkspaceBuilder::new(6, 6);
        b.block(c(1, 0));
        let ws = b.build();
        let mut run = RunBuilder::new(&ws, c(0, 0), c(5, 5))
            .planner_config(PlannerConfig::default().with_mline_tolerance(1.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let report = run.run(&mut rec).unwrap();

        assert_eq!(report.outcome, Outcome::Arrived);
        assert_eq!(report.hit_points, 1);
        assert_eq!(
            rec.changes,
            vec![
                (ModeKind::SeekGoal, ModeKind::FollowBoundary, c(0, 1)),
                (ModeKind::FollowBoundary, ModeKind::SeekGoal, c(0, 1)),
                (ModeKind::SeekGoal, ModeKind::Arrived, c(5, 5)),
            ]
        );
        assert_eq!(rec.modes.first(), Some(&ModeKind::FollowBoundary));
        assert!(rec.modes[1..].iter().all(|&m| m == ModeKind::SeekGoal));
    }

    #[test]
    fn budget_stops_the_run() {
        let ws = WorkspaceBuilder::new(5, 5).build();
        let mut run = RunBuilder::new(&ws, c(0, 0), c(4, 4))
            .config(RunConfig::with_max_steps(3))
            .build()
            .unwrap();
        let report = run.run(&mut NoopObserver).unwrap();
        assert_eq!(report.outcome, Outcome::BudgetExhausted);
        assert_eq!(report.steps, 3);
        assert_eq!(report.final_position, c(2, 1));

        // The budget is spent; only run_steps goes further.
        assert_eq!(run.run(&mut NoopObserver).unwrap().steps, 3);
        run.run_steps(100, &mut NoopObserver).unwrap();
        assert_eq!(run.report().outcome, Outcome::Arrived);
        assert_eq!(run.report().steps, 8);
    }

    #[test]
    fn run_steps_is_incremental() {
        let ws = WorkspaceBuilder::new(1, 6).build();
        let mut run = RunBuilder::new(&ws, c(0, 0), c(0, 5)).build().unwrap();
        let mut rec = Recorder::default();
        run.run_steps(2, &mut rec).unwrap();
        run.run_steps(2, &mut rec).unwrap();
        assert_eq!(run.planner().position(), c(0, 4));
        assert_eq!(rec.starts, 1);
        assert!(rec.finished.is_none());
    }

    #[test]
    fn trapped_start_reports_unreachable() {
        let map = MapParts::parse("S#G").unwrap();
        let mut run = RunBuilder::new(&map.workspace, map.start, map.goal).build().unwrap();
        let report = run.run(&mut NoopObserver).unwrap();
        assert_eq!(report.outcome, Outcome::Unreachable(Unreachable::Trapped));
        assert_eq!(report.outcome.label(), "trapped");
        assert_eq!(report.steps, 0);
        assert_eq!(report.path_len, 1);
    }

    #[test]
    fn build_errors() {
        let map = MapParts::parse("S#G").unwrap();
        let blocked_goal = RunBuilder::new(&map.workspace, map.start, c(0, 1)).build();
        assert!(matches!(blocked_goal, Err(SimError::Plan(PlanError::GoalBlocked(_)))));

        let zero_budget = RunBuilder::new(&map.workspace, map.start, map.goal)
            .config(RunConfig::with_max_steps(0))
            .build();
        assert!(matches!(zero_budget, Err(SimError::Config(_))));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Arrived.to_string(), "arrived");
        assert_eq!(Outcome::BudgetExhausted.to_string(), "budget_exhausted");
        assert_eq!(
            Outcome::Unreachable(Unreachable::LoopClosed { at_hit_point: true }).to_string(),
            "unreachable (loop closed at hit point)"
        );
    }
}

#[cfg(test)]
mod batch {
    use bug2_core::{Cell, PlannerConfig};
    use bug2_grid::{scatter, WorkspaceBuilder};

    use crate::{run_batch, NoopObserver, Outcome, RunBuilder, RunConfig, SimError};

    #[test]
    fn batch_matches_individual_runs_in_order() {
        let tasks: Vec<(Cell, Cell)> = (0..8)
            .map(|i| (Cell::new(0, i), Cell::new(19, 19 - i)))
            .collect();
        let keep: Vec<Cell> = tasks.iter().flat_map(|&(s, g)| [s, g]).collect();
        let ws = scatter(20, 20, 0.25, 11, &keep);

        let batch = run_batch(&ws, &tasks, PlannerConfig::default(), RunConfig::default());
        assert_eq!(batch.len(), tasks.len());
        for (&(start, goal), got) in tasks.iter().zip(&batch) {
            let expect = RunBuilder::new(&ws, start, goal)
                .build()
                .unwrap()
                .run(&mut NoopObserver)
                .unwrap();
            assert_eq!(got.as_ref().unwrap(), &expect);
        }
    }

    #[test]
    fn batch_keeps_per_task_errors() {
        let mut b = WorkspaceBuilder::new(4, 4);
        b.block(Cell::new(2, 2));
        let ws = b.build();
        let tasks = [
            (Cell::new(0, 0), Cell::new(3, 3)),
            (Cell::new(0, 0), Cell::new(2, 2)),
        ];
        let out = run_batch(&ws, &tasks, PlannerConfig::default(), RunConfig::default());
        assert_eq!(out[0].as_ref().map(|r| r.outcome).ok(), Some(Outcome::Arrived));
        assert!(matches!(out[1], Err(SimError::Plan(_))));
    }
}
