//! `bug2-planner` — the Bug2 seek/follow state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`mline`]     | `MLine` rasterised start→goal line + R-tree lookup         |
//! | [`sensor`]    | `BoundarySensor`, `Neighborhood`, `cardinal_probe`         |
//! | [`mode`]      | `Mode`, `Excursion`, `Handedness`, `Unreachable`           |
//! | [`planner`]   | `Bug2Planner`, `StepOutcome`                               |
//! | [`path_log`]  | `PathLog` visited-position record                          |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                               |
//!
//! # Quick start
//!
//! ```
//! use bug2_grid::MapParts;
//! use bug2_planner::{Bug2Planner, ModeKind};
//!
//! let map = MapParts::parse("
//!     ..#..
//!     S.#.G
//!     .....
//! ").unwrap();
//! let mut planner = Bug2Planner::new(&map.workspace, map.start, map.goal).unwrap();
//! while !planner.step().arrived {}
//! assert_eq!(planner.mode_kind(), ModeKind::Arrived);
//! ```

pub mod error;
pub mod mline;
pub mod mode;
pub mod path_log;
pub mod planner;
pub mod sensor;


pub use error::{PlanError, PlanResult};
pub use mline::MLine;
pub use mode::{Excursion, Handedness, Mode, ModeKind, Unreachable};
pub use path_log::PathLog;
pub use planner::{Bug2Planner, StepOutcome};
pub use sensor::{cardinal_probe, BoundaryEstimate, BoundarySensor, Neighborhood, Tangent};
