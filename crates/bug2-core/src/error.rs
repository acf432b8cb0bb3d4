//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `bug2-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("coordinate ({row}, {col}) does not fit a grid cell")]
    Coordinate { row: i64, col: i64 },
}

/// Shorthand result type for `bug2-core`.
pub type CoreResult<T> = Result<T, CoreError>;
