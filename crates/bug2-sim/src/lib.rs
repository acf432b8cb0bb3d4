//! `bug2-sim` — caller-side driver for bug2 planners.
//!
//! # Step loop
//!
//! ```text
//! on_start(mline, start, mode)
//! while planner not stopped:
//!   if calls == max_steps → BudgetExhausted
//!   outcome = planner.step()
//!   on_step(step, outcome, mode)
//!   on_mode_change(..)          if the step changed mode
//! on_finish(report)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_batch`] runs planners on Rayon's thread pool.    |

pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod report;
pub mod run;

#[cfg(test)]
mod tests;

pub use batch::run_batch;
pub use builder::RunBuilder;
pub use config::RunConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use report::{Outcome, RunReport};
pub use run::Run;
