//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `path.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, PathRow, RunSummaryRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    path:     Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut path = Writer::from_path(dir.join("path.csv"))?;
        path.write_record(["step", "row", "col", "mode"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["outcome", "steps", "path_len", "hit_points", "final_row", "final_col"])?;

        Ok(Self { path, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::AfterFinish { table: "path" });
        }
        for row in rows {
            self.path.write_record(&[
                row.step.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.mode.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::AfterFinish { table: "run_summary" });
        }
        self.summary.write_record(&[
            row.outcome.to_string(),
            row.steps.to_string(),
            row.path_len.to_string(),
            row.hit_points.to_string(),
            row.final_row.to_string(),
            row.final_col.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.path.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
