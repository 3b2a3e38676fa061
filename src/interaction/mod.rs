//! Transient UI state around the grid: context menus, the rename editor,
//! the search bar and the toolbar.

pub mod header;
pub mod menus;
pub mod placement;
pub mod search;

pub use header::{HeaderBar, HeaderState, LockButton, SearchButton};
pub use menus::{
    ColumnMenu, ColumnMenuAction, Overlay, RenameEditor, RenameOutcome, RowMenu, RowMenuAction,
};
pub use placement::{place_column_menu, place_row_menu};
pub use search::{PositionMode, SearchBar, SearchPlacement, SearchToggle};
