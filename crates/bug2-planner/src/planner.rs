//! The Bug2 planner.
//!
//! # Step semantics
//!
//! Each [`Bug2Planner::step`] call makes at most one move:
//!
//! - **SeekGoal** — move onto the next m-line cell.  If it is occupied, the
//!   current cell becomes the hit point, handedness is locked from the
//!   boundary sensor, and the same call makes the first boundary move.
//! - **FollowBoundary** — Moore-neighbour tracing.  Starting from the hugged
//!   occupied heading, sweep the ring away from the obstacle (counter-
//!   clockwise for right-handed, clockwise for left-handed) and take the
//!   first free heading the connectivity allows.  The last occupied ring
//!   cell swept past becomes the new hugged cell.
//! - **Arrived / Unreachable** — no move; the call reports the current
//!   position with `arrived = true`.
//!
//! After every boundary move the planner checks, in order: arrival,
//! re-join, and loop closure (a repeated `(cell, hugged heading)` tracer
//! state).  A re-join needs the robot strictly closer to the goal than the
//! hit point and an m-line cell not behind the blocked one, either within
//! `mline_tolerance` of the new cell or stepped over by a diagonal move.
//! An 8-connected move can cross an 8-connected line without landing on it;
//! the line cell it passes is one of the two cells sharing an edge with both
//! ends of the move.
//!
//! A single call can pass through several modes (a hit, the first boundary
//! move and an immediate re-join).  [`Bug2Planner::last_transitions`] lists
//! every change the last call made, in order.
//!
//! # Losing the obstacle
//!
//! On a static map the hugged cell is always occupied: it starts as the
//! blocked m-line cell and is only ever replaced by another occupied ring
//! cell.  When the map changes underneath the planner, a hugged cell that
//! has cleared is re-acquired (the first occupied ring cell clockwise from
//! the last heading), and a ring with nothing occupied falls back to
//! [`cardinal_probe`] until the robot touches an obstacle again.

use tracing::{debug, info, trace};

use bug2_core::{Cell, Direction, PlannerConfig, StepIndex};
use bug2_grid::{OccupancyMap, Workspace};

use crate::mode::{Excursion, Handedness, Mode, ModeKind, Unreachable};
use crate::sensor::{cardinal_probe, BoundarySensor, Neighborhood};
use crate::{MLine, PathLog, PlanError, PlanResult};

/// Result of one [`Bug2Planner::step`] call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StepOutcome {
    pub position: Cell,
    /// `true` once the planner has stopped: it reached the goal or declared
    /// it unreachable.  Check [`Bug2Planner::mode`] to tell the two apart.
    pub arrived:  bool,
}

/// Sensor-limited Bug2 planner over a borrowed occupancy map.
///
/// The planner owns its m-line, mode, and path log; the map is shared
/// read-only, so any number of planners can run over one workspace.
///
/// # Example
///
/// ```
/// use bug2_core::Cell;
/// use bug2_grid::WorkspaceBuilder;
/// use bug2_planner::Bug2Planner;
///
/// let ws = WorkspaceBuilder::new(5, 5).build();
/// let mut planner = Bug2Planner::new(&ws, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
/// let mut last = planner.step();
/// while !last.arrived {
///     last = planner.step();
/// }
/// assert_eq!(last.position, Cell::new(4, 4));
/// assert_eq!(planner.path().moves(), 8);
/// ```
pub struct Bug2Planner<'w, M: OccupancyMap + ?Sized = Workspace> {
    map:        &'w M,
    config:     PlannerConfig,
    sensor:     BoundarySensor,
    goal:       Cell,
    mline:      MLine,
    position:   Cell,
    mode:       Mode,
    path:       PathLog,
    steps:      StepIndex,
    hit_points: Vec<Cell>,
    /// Mode changes made by the last `step()` call.
    transitions: Vec<(ModeKind, ModeKind)>,
    /// Mode the last `step()` call moved in, if it moved.
    moved_in:   Option<ModeKind>,
}

impl<'w, M: OccupancyMap + ?Sized> Bug2Planner<'w, M> {
    /// Planner with the default configuration (4-connected, Manhattan, zero
    /// tolerances).
    pub fn new(map: &'w M, start: Cell, goal: Cell) -> PlanResult<Self> {
        Self::with_config(map, start, goal, PlannerConfig::default())
    }

    /// # Errors
    ///
    /// - [`PlanError::Config`] — a tolerance is out of range.
    /// - [`PlanError::StartOutOfBounds`] / [`PlanError::GoalOutOfBounds`].
    /// - [`PlanError::StartBlocked`] / [`PlanError::GoalBlocked`].
    pub fn with_config(
        map:    &'w M,
        start:  Cell,
        goal:   Cell,
        config: PlannerConfig,
    ) -> PlanResult<Self> {
        config.validate()?;
        let (rows, cols) = (map.rows(), map.cols());
        if !map.contains(start) {
            return Err(PlanError::StartOutOfBounds { cell: start, rows, cols });
        }
        if !map.contains(goal) {
            return Err(PlanError::GoalOutOfBounds { cell: goal, rows, cols });
        }
        if !map.is_free(start) {
            return Err(PlanError::StartBlocked(start));
        }
        if !map.is_free(goal) {
            return Err(PlanError::GoalBlocked(goal));
        }

        let mline = MLine::build(start, goal, config.connectivity);
        debug!(
            %start,
            %goal,
            cells = mline.len(),
            connectivity = %config.connectivity,
            metric = %config.metric,
            "planner ready"
        );

        let mut planner = Self {
            map,
            config,
            sensor: BoundarySensor::new(config.connectivity),
            goal,
            mline,
            position: start,
            mode: Mode::SeekGoal { next: 1 },
            path: PathLog::new(start),
            steps: StepIndex::ZERO,
            hit_points: Vec::new(),
            transitions: Vec::new(),
            moved_in: None,
        };
        if planner.at_goal() {
            planner.mode = Mode::Arrived;
        }
        Ok(planner)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance by at most one move.  See the module docs for the semantics.
    pub fn step(&mut self) -> StepOutcome {
        self.transitions.clear();
        self.moved_in = None;
        if self.mode.is_terminal() {
            return self.outcome();
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Arrived);
        self.mode = match mode {
            Mode::SeekGoal { next }    => self.seek(next),
            Mode::FollowBoundary(exc)  => self.follow(exc),
            terminal                   => terminal,
        };

        match &self.mode {
            Mode::Arrived => info!(steps = self.steps.0, at = %self.position, "arrived"),
            Mode::Unreachable(why) => {
                info!(steps = self.steps.0, at = %self.position, reason = %why, "goal unreachable")
            }
            _ => {}
        }
        self.outcome()
    }

    fn seek(&mut self, next: usize) -> Mode {
        let Some(target) = self.mline.get(next) else {
            // The cursor only passes the last cell by stepping onto the goal.
            debug_assert_eq!(self.position, self.goal);
            self.enter(ModeKind::SeekGoal, ModeKind::Arrived);
            return Mode::Arrived;
        };

        if self.map.is_free(target) {
            self.advance(target, ModeKind::SeekGoal);
            if self.at_goal() {
                self.enter(ModeKind::SeekGoal, ModeKind::Arrived);
                return Mode::Arrived;
            }
            return Mode::SeekGoal { next: next + 1 };
        }

        let hit = self.position;
        let seek_heading = heading_between(hit, target);
        let handedness = self
            .sensor
            .sense(self.map, hit, self.goal)
            .map_or(Handedness::Right, |est| est.tangents[0].handedness);
        let hit_distance = self.distance_to_goal(hit);
        self.hit_points.push(hit);
        debug!(
            step = %self.steps,
            %hit,
            blocked = %target,
            %handedness,
            hit_distance,
            "m-line blocked"
        );
        self.enter(ModeKind::SeekGoal, ModeKind::FollowBoundary);

        let excursion = Excursion::new(hit, next, hit_distance, handedness, seek_heading, self.steps);
        self.follow(excursion)
    }

    fn follow(&mut self, mut exc: Excursion) -> Mode {
        let ring = self.sensor.sample(self.map, self.position);
        let choice = if ring.is_clear() {
            cardinal_probe(ring, exc.heading).map(|d| (d, None))
        } else {
            let hug = match exc.hug {
                Some(h) if ring.is_blocked(h) => h,
                _ => reacquire(ring, exc.heading),
            };
            self.trace(ring, hug, exc.handedness).map(|(d, h)| (d, Some(h)))
        };

        let Some((heading, hug, next)) =
            choice.and_then(|(d, h)| self.position.offset(d).map(|c| (d, h, c)))
        else {
            self.enter(ModeKind::FollowBoundary, ModeKind::Unreachable);
            return Mode::Unreachable(Unreachable::Trapped);
        };
        let from = self.position;
        self.advance(next, ModeKind::FollowBoundary);
        exc.heading = heading;
        exc.hug = hug;

        if self.at_goal() {
            self.enter(ModeKind::FollowBoundary, ModeKind::Arrived);
            return Mode::Arrived;
        }
        if let Some(k) = self.rejoin_index(&exc, from) {
            debug!(step = %self.steps, at = %self.position, index = k, "re-joined m-line");
            self.enter(ModeKind::FollowBoundary, ModeKind::SeekGoal);
            let next = if self.mline.get(k) == Some(self.position) { k + 1 } else { k };
            return Mode::SeekGoal { next };
        }
        if let Some(h) = hug {
            if !exc.visit(self.position, h) {
                self.enter(ModeKind::FollowBoundary, ModeKind::Unreachable);
                return Mode::Unreachable(Unreachable::LoopClosed {
                    at_hit_point: self.position == exc.hit_point,
                });
            }
        }
        Mode::FollowBoundary(exc)
    }

    /// One Moore-tracing sweep from the hugged heading.  Returns the move
    /// heading and the hugged heading as seen from the new cell.
    fn trace(
        &self,
        ring:       Neighborhood,
        hug:        Direction,
        handedness: Handedness,
    ) -> Option<(Direction, Direction)> {
        let mut last_blocked = hug;
        for k in 1..8 {
            let d = handedness.sweep(hug, k);
            if ring.is_blocked(d) {
                last_blocked = d;
                continue;
            }
            if !self.config.connectivity.allows(d) {
                continue;
            }
            let (br, bc) = last_blocked.delta();
            let (dr, dc) = d.delta();
            return Direction::from_delta(br - dr, bc - dc).map(|h| (d, h));
        }
        None
    }

    /// M-line index to resume seeking at after the boundary move `from` →
    /// current position, if the move re-joined the line.
    fn rejoin_index(&self, exc: &Excursion, from: Cell) -> Option<usize> {
        if self.distance_to_goal(self.position) >= exc.hit_distance {
            return None;
        }
        let near = self
            .mline
            .nearest_within(self.position, self.config.mline_tolerance)
            .filter(|&k| k >= exc.blocked_index);
        // The blocked cell itself is where the line entered the obstacle.
        let crossed = self.crossed_index(from, self.position).filter(|&k| k > exc.blocked_index);
        near.max(crossed)
    }

    /// Farthest-along m-line cell a diagonal move steps over.  Occupied
    /// cells count: a line running from one obstacle straight into the next
    /// is still crossed, and the next seek step registers the new hit.
    fn crossed_index(&self, from: Cell, to: Cell) -> Option<usize> {
        if from.row == to.row || from.col == to.col {
            return None;
        }
        [Cell::new(from.row, to.col), Cell::new(to.row, from.col)]
            .into_iter()
            .filter_map(|corner| self.mline.index_of(corner))
            .max()
    }

    fn advance(&mut self, to: Cell, during: ModeKind) {
        trace!(step = %self.steps, from = %self.position, %to, mode = %during, "move");
        self.position = to;
        self.path.push(to);
        self.steps = self.steps.next();
        self.moved_in = Some(during);
    }

    fn enter(&mut self, from: ModeKind, to: ModeKind) {
        debug!(step = %self.steps, at = %self.position, %from, %to, "mode change");
        self.transitions.push((from, to));
    }

    fn at_goal(&self) -> bool {
        self.position == self.goal
            || self.distance_to_goal(self.position) <= self.config.arrival_tolerance
    }

    fn distance_to_goal(&self, cell: Cell) -> f64 {
        self.config.metric.distance(cell, self.goal)
    }

    fn outcome(&self) -> StepOutcome {
        StepOutcome { position: self.position, arrived: self.mode.is_terminal() }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Hit point of the current excursion, if boundary following.
    pub fn hit_point(&self) -> Option<Cell> {
        self.mode.excursion().map(|e| e.hit_point)
    }

    /// Locked handedness of the current excursion, if boundary following.
    pub fn handedness(&self) -> Option<Handedness> {
        self.mode.excursion().map(|e| e.handedness)
    }

    /// Every hit point so far, oldest first.
    pub fn hit_points(&self) -> &[Cell] {
        &self.hit_points
    }

    pub fn unreachable_reason(&self) -> Option<Unreachable> {
        match self.mode {
            Mode::Unreachable(why) => Some(why),
            _ => None,
        }
    }

    /// Every mode change the last [`step`](Self::step) call made, in order.
    /// Empty when the call stayed in one mode.
    pub fn last_transitions(&self) -> &[(ModeKind, ModeKind)] {
        &self.transitions
    }

    /// Mode the last [`step`](Self::step) call moved in: `SeekGoal` for an
    /// m-line move, `FollowBoundary` for a boundary move, `None` if it did
    /// not move.
    pub fn last_move_mode(&self) -> Option<ModeKind> {
        self.moved_in
    }

    pub fn is_finished(&self) -> bool {
        self.mode.is_terminal()
    }

    pub fn mline(&self) -> &MLine {
        &self.mline
    }

    pub fn path(&self) -> &PathLog {
        &self.path
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn start(&self) -> Cell {
        self.mline.start()
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Moves made so far.
    pub fn steps(&self) -> StepIndex {
        self.steps
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn map(&self) -> &'w M {
        self.map
    }
}

/// Heading from `from` toward a neighbouring `to`.
fn heading_between(from: Cell, to: Cell) -> Direction {
    from.direction_to(to)
        .or_else(|| {
            let (r0, c0) = from.signed();
            let (r1, c1) = to.signed();
            Direction::quantize((r1 - r0) as f64, (c1 - c0) as f64, bug2_core::Connectivity::Eight)
        })
        .unwrap_or(Direction::North)
}

/// First occupied ring heading clockwise from `heading`.
fn reacquire(ring: Neighborhood, heading: Direction) -> Direction {
    (0..8)
        .map(|k| heading.rotate_cw(k))
        .find(|&d| ring.is_blocked(d))
        .unwrap_or(heading)
}
