//! `DataGrid` - the controller behind one mounted grid.
//!
//! Owns the resolved configuration, the table store, and all transient UI
//! state (open menu, rename editor, search bar, selection, lock). The host
//! forwards engine and DOM events to the handler methods in `events.rs`, and
//! pulls render inputs through [`DataGrid::engine_props`] and
//! [`DataGrid::cell_content`].

mod events;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{apply_engine_defaults_js, GridView};

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::{ConfigResolver, EffectiveConfig, GridProps};
use crate::content::{describe, CellContext, CellDescriptor, ROW_ID_COLUMN};
use crate::error::{GridError, Result};
use crate::interaction::{HeaderBar, HeaderState, Overlay, SearchBar};
use crate::render::{EngineProps, GridColors, RenderState};
use crate::store::{ChangeListener, EditPolicy, TableStore};
use crate::types::{GridSelection, ID_FIELD};

/// Receives blocking user-facing messages ("Cannot delete the last row").
pub type NoticeListener = Box<dyn FnMut(&str)>;
/// Receives every accepted selection change.
pub type SelectionListener = Box<dyn FnMut(&GridSelection)>;
/// Asked to close a host-controlled search bar.
pub type SearchCloseListener = Box<dyn FnMut()>;
/// Replaces the built-in append when the host handles new rows itself.
pub type RowAppendListener = Box<dyn FnMut()>;

pub struct DataGrid {
    props: GridProps,
    css_colors: GridColors,
    config: EffectiveConfig,
    store: TableStore,
    overlay: Overlay,
    search: SearchBar,
    selection: GridSelection,
    locked: bool,
    notices: Vec<String>,
    on_notice: Option<NoticeListener>,
    on_selection_change: Option<SelectionListener>,
    on_search_close: Option<SearchCloseListener>,
    on_row_appended: Option<RowAppendListener>,
}

impl fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("preset", &self.config.preset)
            .field("store", &self.store)
            .field("overlay", &self.overlay)
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}

impl DataGrid {
    #[must_use]
    pub fn new(props: GridProps) -> Self {
        let config = EffectiveConfig::resolve(&props);
        let store = TableStore::new(props.columns.clone(), props.initial_data.clone())
            .with_hints(config.field_hints.clone());
        let search = SearchBar::new(config.features.search.clone(), config.show_search);
        let mut grid = Self {
            css_colors: GridColors::default(),
            locked: config.initially_locked,
            store,
            overlay: Overlay::Closed,
            search,
            selection: GridSelection::default(),
            notices: Vec::new(),
            on_notice: None,
            on_selection_change: None,
            on_search_close: None,
            on_row_appended: None,
            config,
            props,
        };
        grid.sync_store();
        debug!(
            preset = grid.config.preset.name(),
            rows = grid.store.row_count(),
            columns = grid.store.columns().len(),
            "grid created"
        );
        grid
    }

    /// Parse props from JSON and build a grid.
    ///
    /// # Errors
    /// Malformed JSON, or a record without a numeric `id`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(GridProps::from_json(json)?))
    }

    // ---- Callbacks ----

    /// `onDataChange`: fired with every row in storage order after each
    /// accepted row or cell mutation.
    pub fn set_on_data_change(&mut self, listener: Option<ChangeListener>) {
        self.store.set_on_change(listener);
    }

    pub fn set_on_notice(&mut self, listener: Option<NoticeListener>) {
        self.on_notice = listener;
    }

    pub fn set_on_selection_change(&mut self, listener: Option<SelectionListener>) {
        self.on_selection_change = listener;
    }

    pub fn set_on_search_close(&mut self, listener: Option<SearchCloseListener>) {
        self.on_search_close = listener;
    }

    pub fn set_on_row_appended(&mut self, listener: Option<RowAppendListener>) {
        self.on_row_appended = listener;
    }

    // ---- Reads ----

    #[must_use]
    pub fn props(&self) -> &GridProps {
        &self.props
    }

    #[must_use]
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &TableStore {
        &self.store
    }

    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[must_use]
    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Selection shown by the engine: empty when selection is off, the host's
    /// controlled selection when given, internal state otherwise.
    #[must_use]
    pub fn selection(&self) -> GridSelection {
        if !self.config.features.selection {
            return GridSelection::default();
        }
        self.props
            .grid_selection
            .clone()
            .unwrap_or_else(|| self.selection.clone())
    }

    /// Notices raised so far that no listener consumed.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Cell descriptor for a displayed coordinate. Never fails; coordinates
    /// with nothing behind them map to an empty read-only cell.
    #[must_use]
    pub fn cell_content(&self, col: usize, row: usize) -> CellDescriptor {
        let (Some(column), Some(record)) = (self.store.column(col), self.store.display_row(row))
        else {
            return CellDescriptor::empty();
        };
        let mut value = record.get(&column.id);
        if column.id == ROW_ID_COLUMN {
            value = value.or_else(|| record.get(ID_FIELD));
        }
        describe(&CellContext {
            column,
            value,
            editable: self.store.policy().can_edit(&column.id),
            hints: self.store.hints(),
        })
    }

    /// Props for the next engine render.
    #[must_use]
    pub fn engine_props(&self) -> EngineProps {
        EngineProps::build(
            &self.config,
            RenderState {
                columns: self.store.display_columns(),
                rows: self.store.row_count(),
                show_search: self.search.is_visible(),
                selection: self
                    .config
                    .features
                    .selection
                    .then(|| self.selection()),
            },
        )
    }

    #[must_use]
    pub fn header_bar(&self) -> HeaderBar {
        HeaderBar::build(HeaderState {
            total_records: self.store.row_count(),
            stats: self.config.features.stats,
            locking: self.config.features.locking,
            locked: self.locked,
            lock_button_title: self.config.lock_button_title.as_deref(),
            search_enabled: self.search.enabled(),
            search_visible: self.search.is_visible(),
        })
    }

    // ---- Reconfiguration ----

    /// The host re-rendered with new props. Rows are kept (they are owned by
    /// the grid after mount); columns are replaced when they changed.
    pub fn update_props(&mut self, props: GridProps) {
        let columns_changed = props.columns != self.props.columns;
        self.props = props;
        if columns_changed {
            self.store.reset_columns(self.props.columns.clone());
        }
        self.reconfigure();
    }

    /// Colors read from the page's CSS custom properties.
    pub fn set_css_colors(&mut self, colors: GridColors) {
        self.css_colors = colors;
        self.reconfigure();
    }

    fn reconfigure(&mut self) {
        let config = ConfigResolver::new(&self.props)
            .css_colors(self.css_colors.clone())
            .resolve();
        if config.initially_locked != self.config.initially_locked {
            self.locked = config.initially_locked;
        }
        self.config = config;
        self.search
            .reconfigure(self.config.features.search.clone(), self.config.show_search);
        if !self.config.features.selection {
            self.selection = GridSelection::default();
        }
        let menus_gone = match &self.overlay {
            Overlay::ColumnMenu(_) | Overlay::Rename(_) => !self.config.features.column_menu,
            Overlay::RowMenu(_) => !self.config.features.row_menu,
            Overlay::Closed => false,
        };
        if menus_gone {
            self.overlay.close();
        }
        self.sync_store();
        debug!(preset = self.config.preset.name(), "grid reconfigured");
    }

    /// Push the parts of the configuration the store enforces.
    fn sync_store(&mut self) {
        self.store.set_hints(self.config.field_hints.clone());
        self.store.set_sorting_enabled(self.config.features.sorting);
        self.store.set_policy(EditPolicy {
            editing: self.config.features.editing,
            locked: self.locked,
            editable_columns: self.config.editable_columns.clone(),
        });
    }

    // ---- Error surfacing ----

    /// Blocked user actions become notices; anything else is only logged.
    fn report(&mut self, action: &str, err: &GridError) {
        match err.notice() {
            Some(message) => {
                info!(action, %message, "action blocked");
                self.notify(message);
            }
            None => warn!(action, error = %err, "action ignored"),
        }
    }

    fn notify(&mut self, message: String) {
        match self.on_notice.as_mut() {
            Some(listener) => listener(&message),
            None => self.notices.push(message),
        }
    }
}
