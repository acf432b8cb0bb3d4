//! Distance metrics over grid cells.
//!
//! A planner fixes one metric for its lifetime and uses it for both the
//! re-join test and the arrival test, so the two can never disagree about
//! what "closer" means.

use std::fmt;

use crate::Cell;

/// Distance-to-goal metric.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// `|dr| + |dc|`, the natural metric for 4-connected motion.
    #[default]
    Manhattan,
    /// `max(|dr|, |dc|)`, the natural metric for 8-connected motion.
    Chebyshev,
    /// Straight-line distance between cell coordinates.
    Euclidean,
}

impl Metric {
    pub fn distance(self, a: Cell, b: Cell) -> f64 {
        let dr = (a.row as f64 - b.row as f64).abs();
        let dc = (a.col as f64 - b.col as f64).abs();
        match self {
            Metric::Manhattan => dr + dc,
            Metric::Chebyshev => dr.max(dc),
            Metric::Euclidean => dr.hypot(dc),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Manhattan => f.write_str("manhattan"),
            Metric::Chebyshev => f.write_str("chebyshev"),
            Metric::Euclidean => f.write_str("euclidean"),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Metric::Manhattan),
            "chebyshev" => Ok(Metric::Chebyshev),
            "euclidean" => Ok(Metric::Euclidean),
            other => Err(crate::CoreError::Config(format!("unknown metric `{other}`"))),
        }
    }
}
