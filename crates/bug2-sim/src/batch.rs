//! Many independent planners over one shared map.

use bug2_core::{Cell, PlannerConfig};
use bug2_grid::OccupancyMap;

use crate::{NoopObserver, RunBuilder, RunConfig, RunReport, SimResult};

/// Run one planner per `(start, goal)` pair over `map`.
///
/// Results come back in input order.  With the `parallel` feature the runs
/// execute on Rayon's thread pool; the map is only ever read, so the
/// results are identical either way.
pub fn run_batch<M: OccupancyMap + ?Sized>(
    map:            &M,
    tasks:          &[(Cell, Cell)],
    planner_config: PlannerConfig,
    config:         RunConfig,
) -> Vec<SimResult<RunReport>> {
    let one = |&(start, goal): &(Cell, Cell)| -> SimResult<RunReport> {
        RunBuilder::new(map, start, goal)
            .config(config)
            .planner_config(planner_config)
            .build()?
            .run(&mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    {
        tasks.iter().map(one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        tasks.par_iter().map(one).collect()
    }
}
