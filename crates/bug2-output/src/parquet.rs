//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `path.parquet`
//! - `run_summary.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, PathRow, RunSummaryRow};

fn path_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step", DataType::UInt64, false),
        Field::new("row",  DataType::UInt32, false),
        Field::new("col",  DataType::UInt32, false),
        Field::new("mode", DataType::Utf8,   false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("outcome",    DataType::Utf8,   false),
        Field::new("steps",      DataType::UInt64, false),
        Field::new("path_len",   DataType::UInt64, false),
        Field::new("hit_points", DataType::UInt64, false),
        Field::new("final_row",  DataType::UInt32, false),
        Field::new("final_col",  DataType::UInt32, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes run output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    path:           Option<ArrowWriter<File>>,
    summary:        Option<ArrowWriter<File>>,
    path_schema:    Arc<Schema>,
    summary_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path_schema = path_schema();
        let summary_schema = summary_schema();

        let path = ArrowWriter::try_new(
            File::create(dir.join("path.parquet"))?,
            Arc::clone(&path_schema),
            Some(snappy_props()),
        )?;
        let summary = ArrowWriter::try_new(
            File::create(dir.join("run_summary.parquet"))?,
            Arc::clone(&summary_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            path: Some(path),
            summary: Some(summary),
            path_schema,
            summary_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.path.as_mut() else {
            return Ok(());
        };

        let mut steps = UInt64Builder::new();
        let mut r     = UInt32Builder::new();
        let mut c     = UInt32Builder::new();
        let mut modes = StringBuilder::new();

        for row in rows {
            steps.append_value(row.step);
            r.append_value(row.row);
            c.append_value(row.col);
            modes.append_value(row.mode.to_string());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.path_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(r.finish()),
                Arc::new(c.finish()),
                Arc::new(modes.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summary.as_mut() else {
            return Ok(());
        };

        let mut outcome    = StringBuilder::new();
        let mut steps      = UInt64Builder::new();
        let mut path_len   = UInt64Builder::new();
        let mut hit_points = UInt64Builder::new();
        let mut final_row  = UInt32Builder::new();
        let mut final_col  = UInt32Builder::new();

        outcome.append_value(row.outcome);
        steps.append_value(row.steps);
        path_len.append_value(row.path_len);
        hit_points.append_value(row.hit_points);
        final_row.append_value(row.final_row);
        final_col.append_value(row.final_col);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summary_schema),
            vec![
                Arc::new(outcome.finish()),
                Arc::new(steps.finish()),
                Arc::new(path_len.finish()),
                Arc::new(hit_points.finish()),
                Arc::new(final_row.finish()),
                Arc::new(final_col.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.path.take() {
            w.close()?;
        }
        if let Some(w) = self.summary.take() {
            w.close()?;
        }
        Ok(())
    }
}
