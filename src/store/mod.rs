//! In-memory tabular data store.
//!
//! Holds rows in storage (insertion) order plus the column list, and keeps a
//! derived display order for the active sort. Every row index taken by this
//! API is a *display* index; the store maps it back to the storage slot.
//!
//! The display order is rebuilt inside every call that changes rows or the
//! sort, so it is never observed stale.

mod defaults;
pub mod sort;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::content::{FieldHints, ROW_ID_COLUMN};
use crate::error::{GridError, Result};
use crate::types::{
    CellValue, ColumnDescriptor, Record, RowId, ID_FIELD, MAX_ROW_ID, NEW_COLUMN_TITLE,
    NEW_COLUMN_WIDTH,
};

pub use defaults::{blank_value_for, new_record};
pub use sort::{SortDirection, SortState};

/// Callback fired with the full row set (storage order) after each row or
/// cell mutation.
pub type ChangeListener = Box<dyn FnMut(&[Record])>;

/// Who may edit what.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditPolicy {
    pub editing: bool,
    pub locked: bool,
    pub editable_columns: BTreeMap<String, bool>,
}

impl EditPolicy {
    /// `editing AND !locked AND column not mapped to false`. The identifier
    /// and row-id columns are never editable.
    #[must_use]
    pub fn can_edit(&self, column_id: &str) -> bool {
        self.editing
            && !self.locked
            && column_id != ID_FIELD
            && column_id != ROW_ID_COLUMN
            && self.editable_columns.get(column_id) != Some(&false)
    }
}

pub struct TableStore {
    rows: Vec<Record>,
    columns: Vec<ColumnDescriptor>,
    sort: Option<SortState>,
    sorting_enabled: bool,
    /// display index → storage index
    order: Vec<usize>,
    next_row_id: RowId,
    next_column_seq: u64,
    policy: EditPolicy,
    hints: FieldHints,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for TableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStore")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns.len())
            .field("sort", &self.sort)
            .field("next_row_id", &self.next_row_id)
            .finish_non_exhaustive()
    }
}

impl TableStore {
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Record>) -> Self {
        let next_row_id = rows
            .iter()
            .map(Record::id)
            .max()
            .map_or(1, |m| m.saturating_add(1));
        let order = (0..rows.len()).collect();
        Self {
            rows,
            columns,
            sort: None,
            sorting_enabled: true,
            order,
            next_row_id,
            next_column_seq: 1,
            policy: EditPolicy {
                editing: true,
                ..EditPolicy::default()
            },
            hints: FieldHints::default(),
            on_change: None,
        }
    }

    #[must_use]
    pub fn with_hints(mut self, hints: FieldHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn set_hints(&mut self, hints: FieldHints) {
        self.hints = hints;
    }

    #[must_use]
    pub fn hints(&self) -> &FieldHints {
        &self.hints
    }

    pub fn set_policy(&mut self, policy: EditPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub fn policy(&self) -> &EditPolicy {
        &self.policy
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.policy.locked = locked;
    }

    pub fn set_on_change(&mut self, listener: Option<ChangeListener>) {
        self.on_change = listener;
    }

    /// Turning sorting off drops the active sort.
    pub fn set_sorting_enabled(&mut self, enabled: bool) {
        self.sorting_enabled = enabled;
        if !enabled && self.sort.take().is_some() {
            self.refresh_order();
        }
    }

    // ---- Reads ----

    /// Rows in storage (insertion) order.
    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row at a display index.
    #[must_use]
    pub fn display_row(&self, index: usize) -> Option<&Record> {
        self.storage_index(index).and_then(|i| self.rows.get(i))
    }

    /// Rows in display order.
    pub fn display_rows(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|&i| self.rows.get(i))
    }

    /// Storage slot behind a display index.
    #[must_use]
    pub fn storage_index(&self, display_index: usize) -> Option<usize> {
        self.order.get(display_index).copied()
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.columns.get(index)
    }

    #[must_use]
    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Columns as shown: the sorted column's title carries an arrow.
    #[must_use]
    pub fn display_columns(&self) -> Vec<ColumnDescriptor> {
        let mut columns = self.columns.clone();
        if let Some(sort) = &self.sort {
            if let Some(c) = columns.iter_mut().find(|c| c.id == sort.column_id) {
                c.title = format!("{} {}", c.title, sort.direction.arrow());
            }
        }
        columns
    }

    #[must_use]
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Value at a display coordinate.
    #[must_use]
    pub fn value(&self, col: usize, row: usize) -> Option<&CellValue> {
        let column = self.columns.get(col)?;
        self.display_row(row)?.get(&column.id)
    }

    // ---- Sort ----

    /// Advance the sort cycle for the column at `col`.
    ///
    /// # Errors
    /// `FeatureDisabled` when sorting is off, `ColumnOutOfRange` for a bad
    /// index.
    pub fn toggle_sort(&mut self, col: usize) -> Result<Option<&SortState>> {
        let column_id = self.column_at(col)?.id.clone();
        self.sort_by(&column_id)
    }

    /// Advance the sort cycle for `column_id`.
    ///
    /// # Errors
    /// `FeatureDisabled` when sorting is off, `UnknownColumn` if no column
    /// has that id.
    pub fn sort_by(&mut self, column_id: &str) -> Result<Option<&SortState>> {
        if !self.sorting_enabled {
            return Err(GridError::FeatureDisabled("sorting"));
        }
        if self.column_index(column_id).is_none() {
            return Err(GridError::UnknownColumn(column_id.to_string()));
        }
        self.sort = sort::next_sort(self.sort.as_ref(), column_id);
        debug!(column = column_id, sort = ?self.sort, "sort changed");
        self.refresh_order();
        Ok(self.sort.as_ref())
    }

    // ---- Row mutations ----

    /// Replace one field of the record at a display coordinate.
    ///
    /// # Errors
    /// `CellNotEditable` when the policy forbids it, `ProtectedColumn` for the
    /// `id` column, or an out-of-range error.
    pub fn edit_cell(&mut self, col: usize, row: usize, value: CellValue) -> Result<()> {
        let column_id = self.column_at(col)?.id.clone();
        let slot = self.slot_at(row)?;
        if column_id == ID_FIELD {
            return Err(GridError::ProtectedColumn { action: "edited" });
        }
        if !self.policy.can_edit(&column_id) {
            return Err(GridError::CellNotEditable { col, row });
        }
        let Some(record) = self.rows.get_mut(slot) else {
            return Err(self.row_out_of_range(row));
        };
        *record = record.replaced(&column_id, value);
        debug!(col, row, column = %column_id, "cell edited");
        self.commit_rows();
        Ok(())
    }

    /// Append a blank row at the end of storage order.
    pub fn append_row(&mut self) -> RowId {
        let record = self.blank_record();
        let id = record.id();
        self.rows.push(record);
        debug!(id, "row appended");
        self.commit_rows();
        id
    }

    /// Insert a blank row before the row shown at `index` (or at the end
    /// when `index == row_count`).
    ///
    /// # Errors
    /// `RowOutOfRange` if `index > row_count`.
    pub fn insert_row_at(&mut self, index: usize) -> Result<RowId> {
        let slot = if index == self.rows.len() {
            self.rows.len()
        } else {
            self.slot_at(index)?
        };
        let record = self.blank_record();
        let id = record.id();
        self.rows.insert(slot, record);
        debug!(id, index, slot, "row inserted");
        self.commit_rows();
        Ok(id)
    }

    /// Delete the row shown at `index`.
    ///
    /// # Errors
    /// `LastRow` if it is the only row, `RowOutOfRange` for a bad index.
    pub fn delete_row(&mut self, index: usize) -> Result<Record> {
        let slot = self.slot_at(index)?;
        if self.rows.len() <= 1 {
            return Err(GridError::LastRow);
        }
        let removed = self.rows.remove(slot);
        debug!(id = removed.id(), index, "row deleted");
        self.commit_rows();
        Ok(removed)
    }

    /// Move the row shown at `from` to the position of the row shown at `to`.
    ///
    /// # Errors
    /// `RowOutOfRange` for a bad index.
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<()> {
        let src = self.slot_at(from)?;
        let dst = self.slot_at(to)?;
        let moved = self.rows.remove(src);
        self.rows.insert(dst, moved);
        debug!(from, to, "row moved");
        self.commit_rows();
        Ok(())
    }

    // ---- Column mutations (never notify) ----

    /// Insert a new column after `after`. Returns the new column's id.
    ///
    /// # Errors
    /// `ColumnOutOfRange` when `after` is past the last column.
    pub fn add_column(&mut self, after: usize) -> Result<String> {
        if !self.columns.is_empty() && after >= self.columns.len() {
            return Err(self.column_out_of_range(after));
        }
        let at = if self.columns.is_empty() { 0 } else { after + 1 };
        let id = self.fresh_column_id();
        self.columns
            .insert(at, ColumnDescriptor::new(id.clone(), NEW_COLUMN_TITLE, NEW_COLUMN_WIDTH));
        debug!(id = %id, at, "column added");
        Ok(id)
    }

    /// Remove the column at `index`. Record values are kept.
    ///
    /// # Errors
    /// `ProtectedColumn` for the `id` column, `ColumnOutOfRange` for a bad
    /// index.
    pub fn remove_column(&mut self, index: usize) -> Result<ColumnDescriptor> {
        if self.column_at(index)?.id == ID_FIELD {
            return Err(GridError::ProtectedColumn { action: "removed" });
        }
        let removed = self.columns.remove(index);
        if self.sort.as_ref().is_some_and(|s| s.column_id == removed.id) {
            self.sort = None;
            self.refresh_order();
        }
        debug!(id = %removed.id, index, "column removed");
        Ok(removed)
    }

    /// Change a column's title. The id (and therefore record keys) never
    /// changes.
    ///
    /// # Errors
    /// `ProtectedColumn` for the `id` column, `ColumnOutOfRange` for a bad
    /// index.
    pub fn rename_column(&mut self, index: usize, title: &str) -> Result<()> {
        if self.column_at(index)?.id == ID_FIELD {
            return Err(GridError::ProtectedColumn { action: "renamed" });
        }
        if let Some(column) = self.columns.get_mut(index) {
            column.title = title.to_string();
            debug!(id = %column.id, title, "column renamed");
        }
        Ok(())
    }

    /// # Errors
    /// `ColumnOutOfRange` for a bad index.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<()> {
        self.column_at(from)?;
        self.column_at(to)?;
        let moved = self.columns.remove(from);
        self.columns.insert(to, moved);
        debug!(from, to, "column moved");
        Ok(())
    }

    /// # Errors
    /// `UnknownColumn` if no column has that id.
    pub fn resize_column(&mut self, column_id: &str, width: f64) -> Result<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_string()))?;
        column.width = width;
        Ok(())
    }

    /// Replace the column list (host pushed new columns). Drops a sort on a
    /// column that no longer exists.
    pub fn reset_columns(&mut self, columns: Vec<ColumnDescriptor>) {
        self.columns = columns;
        let stale = self
            .sort
            .as_ref()
            .is_some_and(|s| !self.columns.iter().any(|c| c.id == s.column_id));
        if stale {
            self.sort = None;
            self.refresh_order();
        }
    }

    // ---- Internals ----

    fn column_at(&self, index: usize) -> Result<&ColumnDescriptor> {
        self.columns
            .get(index)
            .ok_or_else(|| self.column_out_of_range(index))
    }

    fn slot_at(&self, display_index: usize) -> Result<usize> {
        self.storage_index(display_index)
            .ok_or_else(|| self.row_out_of_range(display_index))
    }

    fn row_out_of_range(&self, index: usize) -> GridError {
        GridError::RowOutOfRange {
            index,
            len: self.rows.len(),
        }
    }

    fn column_out_of_range(&self, index: usize) -> GridError {
        GridError::ColumnOutOfRange {
            index,
            len: self.columns.len(),
        }
    }

    fn blank_record(&mut self) -> Record {
        let id = self.fresh_row_id();
        new_record(id, &self.columns, &self.rows, &self.hints)
    }

    /// Next unused id. Once the counter passes `MAX_ROW_ID`, the lowest free
    /// id is taken instead.
    fn fresh_row_id(&mut self) -> RowId {
        while self.next_row_id <= MAX_ROW_ID {
            let id = self.next_row_id;
            self.next_row_id += 1;
            if !self.rows.iter().any(|r| r.id() == id) {
                return id;
            }
        }
        let taken: BTreeSet<RowId> = self.rows.iter().map(Record::id).collect();
        (1..=MAX_ROW_ID)
            .find(|id| !taken.contains(id))
            .unwrap_or(MAX_ROW_ID)
    }

    fn fresh_column_id(&mut self) -> String {
        loop {
            let id = format!("col_{}", self.next_column_seq);
            self.next_column_seq += 1;
            if self.column_index(&id).is_none() {
                return id;
            }
        }
    }

    fn refresh_order(&mut self) {
        let sort = if self.sorting_enabled {
            self.sort.as_ref()
        } else {
            None
        };
        self.order = sort::display_order(&self.rows, sort);
    }

    /// Rebuild the view and notify the listener.
    fn commit_rows(&mut self) {
        self.refresh_order();
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.rows);
        }
    }
}
