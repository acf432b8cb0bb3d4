//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PathRow, RunSummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`PathOutputObserver::take_error`](crate::PathOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of path rows.
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Write the run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
