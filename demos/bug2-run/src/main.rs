//! bug2-run — drive a Bug2 planner over a grid map and write its path.
//!
//! ```text
//! bug2-run --builtin wall-gap
//! bug2-run --map demos/bug2-run/maps/wall_gap.json --connectivity 8 --metric chebyshev
//! bug2-run --random --rows 40 --cols 60 --density 0.3 --seed 7 --batch 200
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see mode changes
//! and `RUST_LOG=trace` for every move.

mod maps;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};

use bug2_core::{Cell, Connectivity, Metric, PlannerConfig, SeedRng};
use bug2_grid::{MapParts, OccupancyMap, Workspace, WorkspaceDescriptor, scatter};
use bug2_output::{CsvWriter, PathOutputObserver};
use bug2_sim::{Outcome, RunBuilder, RunConfig, run_batch};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "bug2-run")]
#[command(about = "Sensor-limited Bug2 planner on an occupancy grid", long_about = None)]
struct Cli {
    /// JSON map record to load.
    #[arg(long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Built-in map: clear, wall-gap, walled-in, nested-rings.
    #[arg(long, default_value = "wall-gap")]
    builtin: String,

    /// Generate a random obstacle field instead of loading a map.
    #[arg(long, default_value_t = false)]
    random: bool,

    #[arg(long, default_value_t = 30)]
    rows: u32,

    #[arg(long, default_value_t = 30)]
    cols: u32,

    /// Fraction of cells blocked in a random field.
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// `4` or `8`.
    #[arg(long, default_value = "4")]
    connectivity: Connectivity,

    /// manhattan, chebyshev, or euclidean.  Defaults to the metric natural
    /// for the connectivity.
    #[arg(long)]
    metric: Option<Metric>,

    #[arg(long, default_value_t = 0.0)]
    mline_tolerance: f64,

    #[arg(long, default_value_t = 0.0)]
    arrival_tolerance: f64,

    /// Give up after this many steps.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Run this many random start/goal pairs on the map instead of one run.
    #[arg(long)]
    batch: Option<usize>,

    /// Directory for path.csv and run_summary.csv.
    #[arg(long, default_value = "output/bug2-run")]
    out: PathBuf,

    /// Also save the map as a JSON record.
    #[arg(long)]
    save_map: Option<PathBuf>,
}

impl Cli {
    fn planner_config(&self) -> PlannerConfig {
        let base = match self.connectivity {
            Connectivity::Four  => PlannerConfig::default(),
            Connectivity::Eight => PlannerConfig::eight_connected(),
        };
        let base = match self.metric {
            Some(m) => base.with_metric(m),
            None => base,
        };
        base.with_mline_tolerance(self.mline_tolerance)
            .with_arrival_tolerance(self.arrival_tolerance)
    }

    fn run_config(&self) -> RunConfig {
        RunConfig { max_steps: self.max_steps }
    }

    fn load_map(&self) -> Result<MapParts> {
        if let Some(path) = &self.map {
            let record = WorkspaceDescriptor::from_path(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return Ok(record.into_parts()?);
        }
        if self.random {
            let start = Cell::new(0, 0);
            let goal = Cell::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1));
            let workspace = scatter(self.rows, self.cols, self.density, self.seed, &[start, goal]);
            return Ok(MapParts {
                name: Some(format!("random-{}x{}-{}", self.rows, self.cols, self.seed)),
                workspace,
                start,
                goal,
            });
        }
        match maps::builtin(&self.builtin) {
            Some(parts) => Ok(parts),
            None => bail!(
                "unknown built-in map `{}` (expected one of: {})",
                self.builtin,
                maps::BUILTIN.join(", ")
            ),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let map = cli.load_map()?;
    let planner_config = cli.planner_config();
    planner_config.validate()?;
    info!(
        map = map.name.as_deref().unwrap_or("<unnamed>"),
        rows = map.workspace.rows(),
        cols = map.workspace.cols(),
        occupied = map.workspace.occupied_count(),
        connectivity = %planner_config.connectivity,
        metric = %planner_config.metric,
        "map loaded"
    );

    if let Some(path) = &cli.save_map {
        let json = serde_json::to_string_pretty(&map.to_descriptor())?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "map record saved");
    }

    match cli.batch {
        Some(n) => batch(&cli, &map, planner_config, n),
        None => single(&cli, &map, planner_config),
    }
}

fn single(cli: &Cli, map: &MapParts, planner_config: PlannerConfig) -> Result<()> {
    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    let mut obs = PathOutputObserver::new(CsvWriter::new(&cli.out)?);

    let mut run = RunBuilder::new(&map.workspace, map.start, map.goal)
        .config(cli.run_config())
        .planner_config(planner_config)
        .build()?;

    let t0 = Instant::now();
    let report = run.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output incomplete");
    }

    println!("{}", render(&map.workspace, run.planner().path().cells(), map.start, map.goal));
    println!("Outcome     : {}", report.outcome);
    println!("Steps       : {}", report.steps);
    println!("Hit points  : {}", report.hit_points);
    println!("Final cell  : {}", report.final_position);
    println!("Elapsed     : {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("Output      : {}", cli.out.display());
    Ok(())
}

fn batch(cli: &Cli, map: &MapParts, planner_config: PlannerConfig, n: usize) -> Result<()> {
    let free = free_cells(&map.workspace);
    if free.len() < 2 {
        bail!("map has fewer than two free cells");
    }
    let mut rng = SeedRng::new(cli.seed);
    let tasks: Vec<(Cell, Cell)> = (0..n)
        .filter_map(|_| Some((*rng.pick(&free)?, *rng.pick(&free)?)))
        .collect();

    let t0 = Instant::now();
    let results = run_batch(&map.workspace, &tasks, planner_config, cli.run_config());
    let elapsed = t0.elapsed();

    let (mut arrived, mut unreachable, mut exhausted, mut steps) = (0usize, 0usize, 0usize, 0u64);
    for result in &results {
        let report = result.as_ref().map_err(|e| anyhow::anyhow!("{e}"))?;
        steps += report.steps;
        match report.outcome {
            Outcome::Arrived => arrived += 1,
            Outcome::Unreachable(_) => unreachable += 1,
            Outcome::BudgetExhausted => exhausted += 1,
        }
    }

    println!("Runs        : {n}");
    println!("Arrived     : {arrived}");
    println!("Unreachable : {unreachable}");
    println!("Exhausted   : {exhausted}");
    println!("Mean steps  : {:.1}", steps as f64 / n.max(1) as f64);
    println!("Elapsed     : {:.3} s", elapsed.as_secs_f64());
    Ok(())
}

fn free_cells(ws: &Workspace) -> Vec<Cell> {
    (0..ws.rows())
        .flat_map(|r| (0..ws.cols()).map(move |c| Cell::new(r, c)))
        .filter(|&cell| ws.is_free(cell))
        .collect()
}

/// ASCII picture of the map with the path drawn on it.
fn render(ws: &Workspace, path: &[Cell], start: Cell, goal: Cell) -> String {
    let mut grid: Vec<Vec<char>> = (0..ws.rows())
        .map(|r| {
            (0..ws.cols())
                .map(|c| if ws.is_free(Cell::new(r, c)) { '.' } else { '#' })
                .collect()
        })
        .collect();
    for &cell in path {
        grid[cell.row as usize][cell.col as usize] = '*';
    }
    grid[start.row as usize][start.col as usize] = 'S';
    grid[goal.row as usize][goal.col as usize] = 'G';
    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
