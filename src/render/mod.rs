//! Rendering adapter.
//!
//! The drawing itself belongs to the external canvas engine. This module
//! builds the props object handed to it each render, and fills engine
//! defaults into partially specified option sets.

pub mod theme;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{
    EffectiveConfig, EngineOverrides, RangeSelect, ResolvedFeatures, RowMarkers, SelectMode,
    TrailingRowOptions,
};
use crate::types::{ColumnDescriptor, GridSelection};

pub use theme::{GridColors, ResolvedColors, Theme, ThemeOverride};

/// Which engine callbacks the host shim must wire. A disabled capability is
/// expressed by leaving its handler off, so the engine hides the affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Handlers {
    pub header_clicked: bool,
    pub cell_edited: bool,
    pub row_appended: bool,
    pub column_moved: bool,
    pub column_resize: bool,
    pub row_moved: bool,
    pub header_context_menu: bool,
    pub cell_context_menu: bool,
    pub grid_selection_change: bool,
    pub search_close: bool,
}

impl Handlers {
    #[must_use]
    pub fn for_features(features: &ResolvedFeatures) -> Self {
        Self {
            header_clicked: features.sorting,
            cell_edited: features.editing,
            row_appended: features.row_append,
            column_moved: features.column_reorder,
            column_resize: features.column_resize,
            row_moved: features.row_reorder,
            header_context_menu: features.column_menu,
            cell_context_menu: features.row_menu,
            grid_selection_change: features.selection,
            search_close: features.search.active,
        }
    }
}

/// Everything the engine receives on one render, apart from cell content
/// (served on demand through the cell callback).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineProps {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: usize,
    pub row_markers: RowMarkers,
    pub smooth_scroll_x: bool,
    pub smooth_scroll_y: bool,
    pub range_select: RangeSelect,
    pub column_select: SelectMode,
    pub row_select: SelectMode,
    pub get_cells_for_selection: bool,
    pub freeze_columns: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    pub keybindings: BTreeMap<String, bool>,
    pub experimental: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_row_options: Option<TrailingRowOptions>,
    pub theme: Theme,
    pub show_search: bool,
    /// CSS class for the search bar's entry animation.
    pub search_animation_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_selection: Option<GridSelection>,
    pub handlers: Handlers,
}

/// Per-render inputs that live outside the resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Columns with sort decoration applied.
    pub columns: Vec<ColumnDescriptor>,
    pub rows: usize,
    pub show_search: bool,
    pub selection: Option<GridSelection>,
}

impl EngineProps {
    #[must_use]
    pub fn build(config: &EffectiveConfig, state: RenderState) -> Self {
        let engine = &config.engine;
        let features = &config.features;
        Self {
            columns: state.columns,
            rows: state.rows,
            row_markers: engine.row_markers,
            smooth_scroll_x: engine.smooth_scroll_x,
            smooth_scroll_y: engine.smooth_scroll_y,
            range_select: engine.range_select,
            column_select: engine.column_select,
            row_select: engine.row_select,
            get_cells_for_selection: engine.get_cells_for_selection,
            freeze_columns: features.freeze_columns,
            header_height: engine.header_height,
            row_height: engine.row_height,
            keybindings: engine.keybindings.clone(),
            experimental: engine.experimental.clone(),
            trailing_row_options: engine.trailing_row_options.clone(),
            theme: engine.theme.clone(),
            show_search: features.search.active && state.show_search,
            search_animation_class: features.search.animation.css_class(),
            grid_selection: state.selection,
            handlers: Handlers::for_features(features),
        }
    }
}

/// Fill engine defaults into caller-supplied options: smooth scrolling on
/// both axes, `both` row markers, and the default theme under the caller's
/// theme keys. Anything the caller set is kept.
#[must_use]
pub fn apply_engine_defaults(mut overrides: EngineOverrides) -> EngineOverrides {
    overrides.smooth_scroll_x = overrides.smooth_scroll_x.or(Some(true));
    overrides.smooth_scroll_y = overrides.smooth_scroll_y.or(Some(true));
    overrides.row_markers = overrides.row_markers.or(Some(RowMarkers::Both));

    let mut theme = Theme::default();
    if let Some(caller) = &overrides.theme {
        theme.apply(caller);
    }
    overrides.theme = Some(theme.into());
    overrides
}
