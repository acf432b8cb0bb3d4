//! `bug2-output` — run output writers for bug2 planners.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                              |
//! |-----------|-------------|--------------------------------------------|
//! | *(none)*  | CSV         | `path.csv`, `run_summary.csv`              |
//! | `sqlite`  | SQLite      | `output.db`                                |
//! | `parquet` | Parquet     | `path.parquet`, `run_summary.parquet`      |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`PathOutputObserver`], which implements `bug2_sim::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bug2_output::{CsvWriter, PathOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = PathOutputObserver::new(writer);
//! run.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PathOutputObserver;
pub use row::{PathRow, RunSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
