//! Workspace error type.

use thiserror::Error;

use bug2_core::{Cell, CoreError};

/// Errors produced by `bug2-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has {got} rows but the record declares height {declared}")]
    HeightMismatch { declared: usize, got: usize },

    #[error("row {row} has {got} cells but the record declares width {declared}")]
    RaggedRow { row: usize, declared: usize, got: usize },

    #[error("cell ({row}, {col}) holds {value}; expected 0 (free) or 1 (occupied)")]
    BadCellValue { row: usize, col: usize, value: u8 },

    #[error("{what} {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds { what: &'static str, cell: Cell, rows: u32, cols: u32 },

    #[error("{what} {cell} is occupied")]
    Occupied { what: &'static str, cell: Cell },

    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    BadGlyph { ch: char, line: usize, column: usize },

    #[error("ASCII map has no {0:?} marker")]
    MissingMarker(char),

    #[error("ASCII map has more than one {0:?} marker")]
    DuplicateMarker(char),

    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("map record parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
