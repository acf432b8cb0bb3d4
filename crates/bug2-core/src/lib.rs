//! `bug2-core` — foundational types for the bug2 planning workspace.
//!
//! This crate is a dependency of every other `bug2-*` crate.  It has no
//! `bug2-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`cell`]        | `Cell` grid coordinate                                |
//! | [`direction`]   | `Direction` rotation table, `Connectivity`            |
//! | [`metric`]      | `Metric` (Manhattan / Chebyshev / Euclidean)          |
//! | [`config`]      | `PlannerConfig`                                       |
//! | [`step`]        | `StepIndex` counter                                   |
//! | [`rng`]         | `SeedRng` for reproducible map generation             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod metric;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::PlannerConfig;
pub use direction::{Connectivity, Direction};
pub use error::{CoreError, CoreResult};
pub use metric::Metric;
pub use rng::SeedRng;
pub use step::StepIndex;
