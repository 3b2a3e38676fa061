//! Column/row context menus and the inline rename editor.
//!
//! All three share one [`Overlay`] slot, so opening any of them replaces
//! whatever was open before.

use serde::{Deserialize, Serialize};

use super::placement::{place_column_menu, place_row_menu};
use crate::types::{Point, Rect, Size};

/// Entries of the column header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnMenuAction {
    AddColumn,
    RenameColumn,
    RemoveColumn,
}

impl ColumnMenuAction {
    pub const ALL: [ColumnMenuAction; 3] =
        [Self::AddColumn, Self::RenameColumn, Self::RemoveColumn];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AddColumn => "Add column",
            Self::RenameColumn => "Rename column",
            Self::RemoveColumn => "Remove column",
        }
    }
}

/// Entries of the row marker menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowMenuAction {
    InsertAbove,
    InsertBelow,
    DeleteRow,
}

impl RowMenuAction {
    pub const ALL: [RowMenuAction; 3] = [Self::InsertAbove, Self::InsertBelow, Self::DeleteRow];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InsertAbove => "Insert row above",
            Self::InsertBelow => "Insert row below",
            Self::DeleteRow => "Delete row",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMenu {
    pub col: usize,
    /// Header cell bounds, reused when the rename editor opens.
    pub anchor: Rect,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowMenu {
    pub row: usize,
    pub position: Point,
}

/// Inline title editor laid over a header cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameEditor {
    pub col: usize,
    pub bounds: Rect,
    pub value: String,
}

impl RenameEditor {
    /// The title to apply, if any: trimmed, empty discarded.
    #[must_use]
    pub fn committed_title(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// What a key press in the rename input did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Editor closed; apply `title` to column `col` when present.
    Commit { col: usize, title: Option<String> },
    /// Editor closed without changes.
    Cancel,
    /// Still editing.
    Editing,
}

/// The single transient surface over the grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Overlay {
    #[default]
    Closed,
    ColumnMenu(ColumnMenu),
    RowMenu(RowMenu),
    Rename(RenameEditor),
}

impl Overlay {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn open_column_menu(&mut self, col: usize, anchor: Rect, viewport: Size) {
        *self = Self::ColumnMenu(ColumnMenu {
            col,
            anchor,
            position: place_column_menu(anchor, viewport),
        });
    }

    pub fn open_row_menu(&mut self, row: usize, anchor: Rect, viewport: Size) {
        *self = Self::RowMenu(RowMenu {
            row,
            position: place_row_menu(anchor, viewport),
        });
    }

    pub fn open_rename(&mut self, col: usize, bounds: Rect, title: &str) {
        *self = Self::Rename(RenameEditor {
            col,
            bounds,
            value: title.to_string(),
        });
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn column_menu(&self) -> Option<&ColumnMenu> {
        match self {
            Self::ColumnMenu(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn row_menu(&self) -> Option<&RowMenu> {
        match self {
            Self::RowMenu(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn rename(&self) -> Option<&RenameEditor> {
        match self {
            Self::Rename(r) => Some(r),
            _ => None,
        }
    }

    /// Update the rename input's text. Ignored when no editor is open.
    pub fn set_rename_value(&mut self, value: &str) {
        if let Self::Rename(editor) = self {
            editor.value = value.to_string();
        }
    }

    /// Handle a key in the rename input: `Enter` commits, `Escape` cancels.
    pub fn rename_key(&mut self, key: &str) -> RenameOutcome {
        match key {
            "Enter" => self.commit_rename(),
            "Escape" => {
                if self.rename().is_some() {
                    self.close();
                    RenameOutcome::Cancel
                } else {
                    RenameOutcome::Editing
                }
            }
            _ => RenameOutcome::Editing,
        }
    }

    /// Focus left the rename input: commit.
    pub fn rename_blur(&mut self) -> RenameOutcome {
        self.commit_rename()
    }

    /// Click outside the open surface closes it without applying anything.
    pub fn click_outside(&mut self) {
        if self.is_open() {
            self.close();
        }
    }

    fn commit_rename(&mut self) -> RenameOutcome {
        match std::mem::take(self) {
            Self::Rename(editor) => RenameOutcome::Commit {
                col: editor.col,
                title: editor.committed_title(),
            },
            other => {
                *self = other;
                RenameOutcome::Editing
            }
        }
    }
}
