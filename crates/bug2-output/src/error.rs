//! Output error type.

use thiserror::Error;

/// Failures while persisting a path log or run summary.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A row arrived after [`OutputWriter::finish`](crate::OutputWriter::finish).
    #[error("{table} row written after the writer was finished")]
    AfterFinish { table: &'static str },

    #[error("output file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv backend: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("sqlite backend: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "parquet")]
    #[error("arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("parquet backend: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

pub type OutputResult<T> = Result<T, OutputError>;
