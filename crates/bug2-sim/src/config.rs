//! Driver configuration.

use crate::{SimError, SimResult};

/// Caller-side limits for one [`Run`](crate::Run).
///
/// The planner terminates on its own on any finite map, so the budget is a
/// guard for callers that want a hard upper bound, not a correctness
/// requirement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum number of `step()` calls [`Run::run`](crate::Run::run) makes.
    /// `None` runs until the planner stops.
    pub max_steps: Option<u64>,
}

impl RunConfig {
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self { max_steps: Some(max_steps) }
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.max_steps == Some(0) {
            return Err(SimError::Config("max_steps must be positive".into()));
        }
        Ok(())
    }
}
