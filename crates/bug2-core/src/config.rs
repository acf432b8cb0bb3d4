//! Per-planner configuration.
//!
//! Connectivity, metric, and the two tolerances are fixed when a planner is
//! constructed.  They are configuration constants, never per-step inputs.

use crate::{Connectivity, CoreError, CoreResult, Metric};

/// Planner configuration.
///
/// | Field               | Default     | Meaning                                       |
/// |---------------------|-------------|-----------------------------------------------|
/// | `connectivity`      | `Four`      | Moves available per step                      |
/// | `metric`            | `Manhattan` | Distance-to-goal for re-join and arrival      |
/// | `mline_tolerance`   | `0.0`       | Euclidean radius counting as "on the m-line"  |
/// | `arrival_tolerance` | `0.0`       | Goal distance counting as arrived             |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    pub connectivity:      Connectivity,
    pub metric:            Metric,
    /// Must lie in `[0, 1]`: a re-join cell is then always a direct neighbour
    /// of the m-line cell it joins.
    pub mline_tolerance:   f64,
    pub arrival_tolerance: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            connectivity:      Connectivity::Four,
            metric:            Metric::Manhattan,
            mline_tolerance:   0.0,
            arrival_tolerance: 0.0,
        }
    }
}

impl PlannerConfig {
    /// 8-connected motion measured with the Chebyshev metric.
    pub fn eight_connected() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            metric:       Metric::Chebyshev,
            ..Self::default()
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_mline_tolerance(mut self, tolerance: f64) -> Self {
        self.mline_tolerance = tolerance;
        self
    }

    pub fn with_arrival_tolerance(mut self, tolerance: f64) -> Self {
        self.arrival_tolerance = tolerance;
        self
    }

    /// Reject non-finite or out-of-range tolerances.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.mline_tolerance.is_finite() || !(0.0..=1.0).contains(&self.mline_tolerance) {
            return Err(CoreError::Config(format!(
                "mline_tolerance must lie in [0, 1], got {}",
                self.mline_tolerance
            )));
        }
        if !self.arrival_tolerance.is_finite() || self.arrival_tolerance < 0.0 {
            return Err(CoreError::Config(format!(
                "arrival_tolerance must be finite and non-negative, got {}",
                self.arrival_tolerance
            )));
        }
        Ok(())
    }
}
