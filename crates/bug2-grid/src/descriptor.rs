//! Persisted map records.
//!
//! # JSON format
//!
//! One object per map, as written by the map editor:
//!
//! ```json
//! {
//!   "name":   "user_map_0.json",
//!   "width":  4,
//!   "height": 3,
//!   "grid":   [[0,0,0,0],[0,1,1,0],[0,0,0,0]],
//!   "start":  [0, 0],
//!   "goal":   [2, 3]
//! }
//! ```
//!
//! `start` and `goal` are `[row, col]`.  `name` is optional.  A record is
//! only useful once [`WorkspaceDescriptor::into_parts`] has validated it:
//! rectangular matrix matching the declared size, 0/1 cells only, start and
//! goal in bounds and free.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use bug2_core::Cell;

use crate::workspace::art_lines;
use crate::{GridError, GridResult, OccupancyMap, Workspace};

// ── Record ────────────────────────────────────────────────────────────────────

/// A map record exactly as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name:   Option<String>,
    pub width:  usize,
    pub height: usize,
    pub grid:   Vec<Vec<u8>>,
    pub start:  [u32; 2],
    pub goal:   [u32; 2],
}

/// A validated workspace with its start and goal cells.
#[derive(Debug, Clone)]
pub struct MapParts {
    pub name:      Option<String>,
    pub workspace: Workspace,
    pub start:     Cell,
    pub goal:      Cell,
}

impl WorkspaceDescriptor {
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Like [`from_json_str`](Self::from_json_str) but accepts any `Read`
    /// source.
    pub fn from_reader<R: Read>(reader: R) -> GridResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> GridResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Validate the record and produce the workspace plus endpoints.
    ///
    /// # Errors
    ///
    /// - [`GridError::HeightMismatch`] — row count differs from `height`.
    /// - [`GridError::RaggedRow`] — a row's length differs from `width`.
    /// - [`GridError::BadCellValue`] — a cell is neither 0 nor 1.
    /// - [`GridError::OutOfBounds`] / [`GridError::Occupied`] — bad start or
    ///   goal.
    pub fn into_parts(self) -> GridResult<MapParts> {
        if self.grid.len() != self.height {
            return Err(GridError::HeightMismatch { declared: self.height, got: self.grid.len() });
        }
        if let Some((row, r)) = self.grid.iter().enumerate().find(|(_, r)| r.len() != self.width) {
            return Err(GridError::RaggedRow { row, declared: self.width, got: r.len() });
        }

        let workspace = Workspace::from_rows(&self.grid)?;
        let start = Cell::new(self.start[0], self.start[1]);
        let goal = Cell::new(self.goal[0], self.goal[1]);
        check_endpoint(&workspace, "start", start)?;
        check_endpoint(&workspace, "goal", goal)?;

        tracing::debug!(
            name = self.name.as_deref().unwrap_or("<unnamed>"),
            rows = workspace.rows(),
            cols = workspace.cols(),
            %start,
            %goal,
            "loaded map record"
        );

        Ok(MapParts { name: self.name, workspace, start, goal })
    }
}

impl MapParts {
    /// Parse ASCII art containing exactly one `S` and one `G` marker.
    ///
    /// ```
    /// use bug2_core::Cell;
    /// use bug2_grid::MapParts;
    ///
    /// let map = MapParts::parse("
    ///     S.#
    ///     ..G
    /// ").unwrap();
    /// assert_eq!(map.start, Cell::new(0, 0));
    /// assert_eq!(map.goal, Cell::new(1, 2));
    /// ```
    pub fn parse(art: &str) -> GridResult<MapParts> {
        let workspace = Workspace::parse(art)?;
        let start = find_marker(art, 'S')?;
        let goal = find_marker(art, 'G')?;
        Ok(MapParts { name: None, workspace, start, goal })
    }

    /// Convert back into a storable record.
    pub fn to_descriptor(&self) -> WorkspaceDescriptor {
        WorkspaceDescriptor {
            name:   self.name.clone(),
            width:  self.workspace.cols() as usize,
            height: self.workspace.rows() as usize,
            grid:   self.workspace.to_rows(),
            start:  [self.start.row, self.start.col],
            goal:   [self.goal.row, self.goal.col],
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Shared start/goal validation: in bounds and free.
pub(crate) fn check_endpoint<M: OccupancyMap>(
    map:  &M,
    what: &'static str,
    cell: Cell,
) -> GridResult<()> {
    if !map.contains(cell) {
        return Err(GridError::OutOfBounds { what, cell, rows: map.rows(), cols: map.cols() });
    }
    if !map.is_free(cell) {
        return Err(GridError::Occupied { what, cell });
    }
    Ok(())
}

fn find_marker(art: &str, marker: char) -> GridResult<Cell> {
    let mut found = None;
    for (row, (_, line)) in art_lines(art).enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == marker {
                if found.is_some() {
                    return Err(GridError::DuplicateMarker(marker));
                }
                found = Some(Cell::new(row as u32, col as u32));
            }
        }
    }
    found.ok_or(GridError::MissingMarker(marker))
}
