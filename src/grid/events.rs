//! Event handlers for `DataGrid`.
//!
//! One method per engine callback or toolbar/DOM event. Each handler checks
//! the capability behind it first; a disabled capability makes the event a
//! no-op. Returns report whether anything changed so the host knows to
//! re-render.

use tracing::{debug, warn};

use super::DataGrid;
use crate::content::EditedCell;
use crate::error::{GridError, Result};
use crate::interaction::{
    ColumnMenuAction, RenameOutcome, RowMenuAction, SearchPlacement, SearchToggle,
};
use crate::store::TableStore;
use crate::types::{GridSelection, Point, Rect, Size, ID_FIELD};

impl DataGrid {
    // ---- Engine callbacks ----

    /// Header click: advance the sort cycle.
    pub fn header_clicked(&mut self, col: usize) -> bool {
        if !self.config.features.sorting {
            return false;
        }
        match self.store.toggle_sort(col) {
            Ok(_) => true,
            Err(e) => {
                self.report("sort", &e);
                false
            }
        }
    }

    /// The engine's overlay editor finished.
    pub fn cell_edited(&mut self, col: usize, row: usize, cell: EditedCell) -> bool {
        if !self.config.features.editing {
            return false;
        }
        let kind = cell.kind_name();
        let value = match cell.into_value() {
            Ok(v) => v,
            Err(e) => {
                warn!(col, row, kind, error = %e, "edit ignored");
                return false;
            }
        };
        match self.store.edit_cell(col, row, value) {
            Ok(()) => true,
            Err(e) => {
                self.report("edit", &e);
                false
            }
        }
    }

    /// Trailing "add row" line clicked.
    pub fn row_appended(&mut self) -> bool {
        if !self.config.features.row_append {
            return false;
        }
        if let Some(listener) = self.on_row_appended.as_mut() {
            listener();
            return false;
        }
        self.store.append_row();
        true
    }

    pub fn column_moved(&mut self, from: usize, to: usize) -> bool {
        if !self.config.features.column_reorder {
            return false;
        }
        self.apply("move column", |store| store.move_column(from, to))
    }

    pub fn column_resized(&mut self, column_id: &str, width: f64) -> bool {
        if !self.config.features.column_resize {
            return false;
        }
        self.apply("resize column", |store| store.resize_column(column_id, width))
    }

    pub fn row_moved(&mut self, from: usize, to: usize) -> bool {
        if !self.config.features.row_reorder {
            return false;
        }
        self.apply("move row", |store| store.move_row(from, to))
    }

    /// The engine reported a new selection.
    pub fn selection_changed(&mut self, selection: GridSelection) -> bool {
        if !self.config.features.selection {
            return false;
        }
        if let Some(listener) = self.on_selection_change.as_mut() {
            listener(&selection);
        }
        if self.props.grid_selection.is_none() {
            self.selection = selection;
        }
        true
    }

    /// Right click on a header cell. `bounds` is the header cell's rect.
    pub fn header_context_menu(&mut self, col: usize, bounds: Rect, viewport: Size) -> bool {
        if !self.config.features.column_menu || self.locked || self.store.column(col).is_none() {
            return false;
        }
        self.overlay.open_column_menu(col, bounds, viewport);
        true
    }

    /// Right click on a cell. Only the row marker column (`col == -1`)
    /// opens the row menu.
    pub fn cell_context_menu(&mut self, col: i64, row: usize, bounds: Rect, viewport: Size) -> bool {
        if !self.config.features.row_menu || self.locked || col != -1 {
            return false;
        }
        if row >= self.store.row_count() {
            return false;
        }
        self.overlay.open_row_menu(row, bounds, viewport);
        true
    }

    // ---- Menus ----

    /// Pick an entry in the open column menu.
    pub fn column_menu_action(&mut self, action: ColumnMenuAction) -> bool {
        let Some(menu) = self.overlay.column_menu().cloned() else {
            return false;
        };
        self.overlay.close();
        debug!(?action, col = menu.col, "column menu action");

        match action {
            ColumnMenuAction::AddColumn => {
                self.apply("add column", |store| store.add_column(menu.col).map(|_| ()))
            }
            ColumnMenuAction::RemoveColumn => {
                self.apply("remove column", |store| store.remove_column(menu.col).map(|_| ()))
            }
            ColumnMenuAction::RenameColumn => {
                let Some(column) = self.store.column(menu.col) else {
                    return false;
                };
                if column.id == ID_FIELD {
                    self.report("rename column", &GridError::ProtectedColumn { action: "renamed" });
                    return true;
                }
                let title = column.title.clone();
                self.overlay.open_rename(menu.col, menu.anchor, &title);
                true
            }
        }
    }

    /// Pick an entry in the open row menu.
    pub fn row_menu_action(&mut self, action: RowMenuAction) -> bool {
        let Some(menu) = self.overlay.row_menu().cloned() else {
            return false;
        };
        self.overlay.close();
        debug!(?action, row = menu.row, "row menu action");

        match action {
            RowMenuAction::InsertAbove => {
                self.apply("insert row", |store| store.insert_row_at(menu.row).map(|_| ()))
            }
            RowMenuAction::InsertBelow => self.apply("insert row", |store| {
                store.insert_row_at(menu.row + 1).map(|_| ())
            }),
            RowMenuAction::DeleteRow => {
                self.apply("delete row", |store| store.delete_row(menu.row).map(|_| ()))
            }
        }
    }

    /// Text typed into the rename input.
    pub fn rename_input(&mut self, value: &str) {
        self.overlay.set_rename_value(value);
    }

    /// Key pressed in the rename input.
    pub fn rename_key(&mut self, key: &str) -> bool {
        let outcome = self.overlay.rename_key(key);
        self.finish_rename(outcome)
    }

    /// Rename input lost focus.
    pub fn rename_blur(&mut self) -> bool {
        let outcome = self.overlay.rename_blur();
        self.finish_rename(outcome)
    }

    /// Click anywhere outside the open menu or editor.
    pub fn click_outside(&mut self) -> bool {
        let was_open = self.overlay.is_open();
        self.overlay.click_outside();
        was_open
    }

    fn finish_rename(&mut self, outcome: RenameOutcome) -> bool {
        match outcome {
            RenameOutcome::Commit {
                col,
                title: Some(title),
            } => self.apply("rename column", |store| store.rename_column(col, &title)),
            RenameOutcome::Commit { title: None, .. } | RenameOutcome::Cancel => true,
            RenameOutcome::Editing => false,
        }
    }

    // ---- Toolbar ----

    /// Lock button.
    pub fn toggle_lock(&mut self) -> bool {
        if !self.config.features.locking {
            return false;
        }
        self.locked = !self.locked;
        self.store.set_locked(self.locked);
        if self.locked {
            self.overlay.close();
        }
        debug!(locked = self.locked, "lock toggled");
        true
    }

    /// Search button.
    pub fn toggle_search(&mut self) -> bool {
        match self.search.toggle() {
            SearchToggle::Shown | SearchToggle::Hidden => true,
            SearchToggle::CloseRequested => {
                self.request_search_close();
                false
            }
            SearchToggle::Ignored => false,
        }
    }

    /// The engine closed its search bar.
    pub fn search_closed(&mut self) -> bool {
        self.search.engine_closed();
        self.request_search_close();
        true
    }

    fn request_search_close(&mut self) {
        if let Some(listener) = self.on_search_close.as_mut() {
            listener();
        }
    }

    // ---- Search bar placement and dragging ----

    pub fn place_search(
        &mut self,
        container: Size,
        bar: Size,
        root_font_size: f64,
    ) -> Option<SearchPlacement> {
        self.search.place_initial(container, bar, root_font_size)
    }

    pub fn search_pointer_down(
        &mut self,
        on_handle: bool,
        pointer: Point,
        wrapper: Rect,
        viewport: Size,
    ) -> bool {
        self.search.pointer_down(on_handle, pointer, wrapper, viewport)
    }

    pub fn search_pointer_move(&mut self, pointer: Point) -> Option<SearchPlacement> {
        self.search.pointer_move(pointer)
    }

    /// Pointer up, pointer cancel, or the window losing focus.
    pub fn search_pointer_up(&mut self) -> bool {
        self.search.end_drag()
    }

    /// Run a store mutation; report a failure and say whether it applied.
    fn apply<F>(&mut self, action: &str, op: F) -> bool
    where
        F: FnOnce(&mut TableStore) -> Result<()>,
    {
        match op(&mut self.store) {
            Ok(()) => true,
            Err(e) => {
                self.report(action, &e);
                false
            }
        }
    }
}
