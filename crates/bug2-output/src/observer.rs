//! `PathOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use tracing::warn;

use bug2_core::{Cell, StepIndex};
use bug2_planner::{MLine, ModeKind, StepOutcome};
use bug2_sim::{RunObserver, RunReport};

use crate::row::{PathRow, RunSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Path rows buffered before a batch is handed to the writer.
const DEFAULT_BATCH: usize = 4096;

/// A [`RunObserver`] that writes the visited path and the run summary to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// One row is recorded per move, plus one for the start cell.  Errors from
/// the writer are stored internally because `RunObserver` methods have no
/// return value.  After `run.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct PathOutputObserver<W: OutputWriter> {
    writer:     W,
    buffer:     Vec<PathRow>,
    batch:      usize,
    last_step:  Option<u64>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PathOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self::with_batch_size(writer, DEFAULT_BATCH)
    }

    /// Flush path rows to the writer every `batch` rows.
    pub fn with_batch_size(writer: W, batch: usize) -> Self {
        Self {
            writer,
            buffer: Vec::new(),
            batch: batch.max(1),
            last_step: None,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `run.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, step: u64, cell: Cell, mode: ModeKind) {
        if self.last_step == Some(step) {
            return;
        }
        self.last_step = Some(step);
        self.buffer.push(PathRow::new(step, cell, mode));
        if self.buffer.len() >= self.batch {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_path(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for PathOutputObserver<W> {
    fn on_start(&mut self, _mline: &MLine, start: Cell, mode: ModeKind) {
        self.record(0, start, mode);
    }

    fn on_step(&mut self, step: StepIndex, outcome: StepOutcome, mode: ModeKind) {
        self.record(step.0, outcome.position, mode);
    }

    fn on_finish(&mut self, report: &RunReport) {
        self.flush();
        let result = self.writer.write_summary(&RunSummaryRow::from(report));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
