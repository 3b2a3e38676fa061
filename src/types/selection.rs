use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rectangular cell range in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRange {
    /// A 1x1 range at `(col, row)`.
    #[must_use]
    pub fn single(col: usize, row: usize) -> Self {
        Self {
            x: col,
            y: row,
            width: 1,
            height: 1,
        }
    }
}

/// The focused cell plus the range being extended from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCell {
    /// `(col, row)`
    pub cell: (usize, usize),
    pub range: CellRange,
}

/// Selection state: whole rows, whole columns, and an optional current cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentCell>,
    #[serde(default)]
    pub rows: BTreeSet<usize>,
    #[serde(default)]
    pub columns: BTreeSet<usize>,
}

impl GridSelection {
    /// Select a single cell.
    #[must_use]
    pub fn cell(col: usize, row: usize) -> Self {
        Self {
            current: Some(CurrentCell {
                cell: (col, row),
                range: CellRange::single(col, row),
            }),
            ..Self::default()
        }
    }

    /// Select an inclusive range of whole rows.
    #[must_use]
    pub fn row_range(start_row: usize, end_row: usize) -> Self {
        let (lo, hi) = (start_row.min(end_row), start_row.max(end_row));
        Self {
            rows: (lo..=hi).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.rows.is_empty() && self.columns.is_empty()
    }
}
