//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `path` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, PathRow, RunSummaryRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS path (
                 step INTEGER PRIMARY KEY,
                 row  INTEGER NOT NULL,
                 col  INTEGER NOT NULL,
                 mode TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 outcome    TEXT    NOT NULL,
                 steps      INTEGER NOT NULL,
                 path_len   INTEGER NOT NULL,
                 hit_points INTEGER NOT NULL,
                 final_row  INTEGER NOT NULL,
                 final_col  INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO path (step, row, col, mode) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step as i64,
                    row.row,
                    row.col,
                    row.mode.to_string(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (outcome, steps, path_len, hit_points, final_row, final_col) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.outcome,
                row.steps as i64,
                row.path_len as i64,
                row.hit_points as i64,
                row.final_row,
                row.final_col,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
