//! Step counter.
//!
//! A planner advances one `StepIndex` per `step()` call that changes its
//! position.  Using an integer index keeps excursion bookkeeping exact.

use std::fmt;

/// Number of moves made since the planner was constructed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepIndex(pub u64);

impl StepIndex {
    pub const ZERO: StepIndex = StepIndex(0);

    /// The next step index.
    #[inline]
    pub fn next(self) -> StepIndex {
        StepIndex(self.0 + 1)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: StepIndex) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Sub for StepIndex {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: StepIndex) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
