//! `bug2-grid` — the occupancy workspace a planner senses.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`occupancy`]  | `OccupancyMap`: the read-only oracle planners query       |
//! | [`workspace`]  | `Workspace` bit grid, `WorkspaceBuilder`                  |
//! | [`descriptor`] | `WorkspaceDescriptor` JSON map record + validation        |
//! | [`scatter`]    | Seeded random obstacle fields                             |
//! | [`error`]      | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `bug2-core` types.      |

pub mod descriptor;
pub mod error;
pub mod occupancy;
pub mod scatter;
pub mod workspace;


pub use descriptor::{MapParts, WorkspaceDescriptor};
pub use error::{GridError, GridResult};
pub use occupancy::OccupancyMap;
pub use scatter::scatter;
pub use workspace::{Workspace, WorkspaceBuilder};
