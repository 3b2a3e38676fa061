//! Configuration resolution.
//!
//! Merges a named preset, per-feature overrides and explicit props into one
//! immutable [`EffectiveConfig`]. For every resolved field the first present
//! layer wins:
//!
//! 1. per-feature override (`features.*`)
//! 2. explicit top-level prop
//! 3. engine escape hatch (`dataEditorProps.*`)
//! 4. preset default
//! 5. hard-coded fallback
//!
//! Cross-flag dependencies (everything that silently requires `editing`,
//! stats needing both toggles, selection modes collapsing to `none`) are
//! applied here once, never at call sites.

pub mod engine;
pub mod features;
pub mod preset;
pub mod props;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::content::FieldHints;
use crate::render::theme::{GridColors, Theme};

pub use engine::{EngineOverrides, RangeSelect, RowMarkers, SelectMode, TrailingRowOptions};
pub use features::{
    resolve_offset, FeatureFlags, FeatureSet, SearchAnimation, SearchConfig, SearchOffset,
};
pub use preset::{Preset, PresetConfig};
pub use props::GridProps;

/// Search settings after merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSearch {
    pub active: bool,
    pub animation: SearchAnimation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<SearchOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<SearchOffset>,
}

/// Feature flags with every dependency applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFeatures {
    pub selection: bool,
    pub search: ResolvedSearch,
    pub editing: bool,
    pub sorting: bool,
    pub column_reorder: bool,
    pub column_resize: bool,
    pub row_reorder: bool,
    /// `rowAppend AND editing`
    pub row_append: bool,
    /// `columnMenu AND enableColumnContextMenu AND editing`
    pub column_menu: bool,
    /// `rowMenu AND enableRowContextMenu AND editing`
    pub row_menu: bool,
    /// `stats AND showStats`
    pub stats: bool,
    /// `locking AND editing`
    pub locking: bool,
    pub freeze_columns: u32,
}

/// Engine settings after layering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    pub row_markers: RowMarkers,
    pub smooth_scroll_x: bool,
    pub smooth_scroll_y: bool,
    pub range_select: RangeSelect,
    pub column_select: SelectMode,
    pub row_select: SelectMode,
    pub get_cells_for_selection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    pub keybindings: BTreeMap<String, bool>,
    pub experimental: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_row_options: Option<TrailingRowOptions>,
    pub theme: Theme,
}

/// The one resolved configuration a grid runs with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    pub preset: Preset,
    pub features: ResolvedFeatures,
    pub engine: EngineSettings,
    pub editable_columns: BTreeMap<String, bool>,
    /// Lock state the grid starts in.
    pub initially_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_button_title: Option<String>,
    pub field_hints: FieldHints,
    /// Controlled search visibility, if the host drives it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_search: Option<bool>,
}

impl EffectiveConfig {
    /// Resolve props with no host CSS colors.
    #[must_use]
    pub fn resolve(props: &GridProps) -> Self {
        ConfigResolver::new(props).resolve()
    }

    /// Whether a column may be edited ignoring the lock: editing must be on
    /// and the column not mapped to `false`.
    #[must_use]
    pub fn column_editable(&self, column_id: &str) -> bool {
        self.features.editing && self.editable_columns.get(column_id) != Some(&false)
    }
}

/// Layered configuration builder.
pub struct ConfigResolver<'a> {
    props: &'a GridProps,
    css_colors: GridColors,
}

impl<'a> ConfigResolver<'a> {
    #[must_use]
    pub fn new(props: &'a GridProps) -> Self {
        Self {
            props,
            css_colors: GridColors::default(),
        }
    }

    /// Colors read from the page's CSS custom properties. Props win over these.
    #[must_use]
    pub fn css_colors(mut self, colors: GridColors) -> Self {
        self.css_colors = colors;
        self
    }

    /// Produce the effective configuration. Pure: identical inputs give an
    /// identical result.
    #[must_use]
    pub fn resolve(&self) -> EffectiveConfig {
        let props = self.props;
        let preset = props.preset.config();
        let features = self.resolve_features(&preset.features);
        let engine = self.resolve_engine(&preset.engine, &features);

        EffectiveConfig {
            preset: props.preset,
            initially_locked: !features.editing || !props.is_editable,
            features,
            engine,
            editable_columns: props.editable_columns.clone(),
            lock_button_title: props.lock_button_title.clone(),
            field_hints: props.field_hints.clone(),
            show_search: props.engine.show_search.or(props.data_editor_props.show_search),
        }
    }

    fn resolve_features(&self, preset: &FeatureSet) -> ResolvedFeatures {
        let props = self.props;
        let merged = preset.overlay(&props.features);
        let editing = merged.editing;

        let freeze_columns = props
            .features
            .freeze_columns
            .or(props.engine.freeze_columns)
            .or(props.data_editor_props.freeze_columns)
            .unwrap_or(merged.freeze_columns);

        ResolvedFeatures {
            selection: merged.selection,
            search: ResolvedSearch {
                active: merged.search.active.unwrap_or(false),
                animation: merged.search.animation.unwrap_or_default(),
                offset_x: merged.search.offset_x,
                offset_y: merged.search.offset_y,
            },
            editing,
            sorting: merged.sorting,
            column_reorder: merged.column_reorder,
            column_resize: merged.column_resize,
            row_reorder: merged.row_reorder,
            row_append: merged.row_append && editing,
            column_menu: merged.column_menu && props.enable_column_context_menu && editing,
            row_menu: merged.row_menu && props.enable_row_context_menu && editing,
            stats: merged.stats && props.show_stats,
            locking: merged.locking && editing,
            freeze_columns,
        }
    }

    fn resolve_engine(&self, preset: &EngineOverrides, features: &ResolvedFeatures) -> EngineSettings {
        let top = &self.props.engine;
        let hatch = &self.props.data_editor_props;

        let selection = features.selection;
        let range_select = if selection {
            top.range_select
                .or(hatch.range_select)
                .or(preset.range_select)
                .unwrap_or(RangeSelect::MultiRect)
        } else {
            RangeSelect::None
        };
        let column_select = if selection {
            top.column_select
                .or(hatch.column_select)
                .or(preset.column_select)
                .unwrap_or(SelectMode::Multi)
        } else {
            SelectMode::None
        };
        let row_select = if selection {
            top.row_select
                .or(hatch.row_select)
                .or(preset.row_select)
                .unwrap_or(SelectMode::Multi)
        } else {
            SelectMode::None
        };
        let get_cells_for_selection = selection
            && top
                .get_cells_for_selection
                .or(hatch.get_cells_for_selection)
                .unwrap_or(true);

        // Map-valued props layer like the scalars: top-level keys override
        // `dataEditorProps` keys, not the other way round.
        let mut keybindings = BTreeMap::from([
            ("search".to_string(), features.search.active),
            ("selectAll".to_string(), true),
            ("copy".to_string(), true),
            ("paste".to_string(), true),
        ]);
        keybindings.extend(hatch.keybindings.iter().map(|(k, v)| (k.clone(), *v)));
        keybindings.extend(top.keybindings.iter().map(|(k, v)| (k.clone(), *v)));

        let mut experimental =
            BTreeMap::from([("strict".to_string(), serde_json::Value::Bool(true))]);
        experimental.extend(hatch.experimental.iter().map(|(k, v)| (k.clone(), v.clone())));
        experimental.extend(top.experimental.iter().map(|(k, v)| (k.clone(), v.clone())));

        let trailing_row_options = features.row_append.then(|| {
            top.trailing_row_options
                .clone()
                .or_else(|| hatch.trailing_row_options.clone())
                .unwrap_or_else(TrailingRowOptions::standard)
        });

        let colors = self.css_colors.merged(&self.props.grid_colors).with_defaults();
        let mut theme = Theme::from_colors(&colors);
        for layer in [&hatch.theme, &top.theme].into_iter().flatten() {
            theme.apply(layer);
        }

        EngineSettings {
            row_markers: top
                .row_markers
                .or(hatch.row_markers)
                .or(preset.row_markers)
                .unwrap_or(RowMarkers::Both),
            smooth_scroll_x: top
                .smooth_scroll_x
                .or(hatch.smooth_scroll_x)
                .or(preset.smooth_scroll_x)
                .unwrap_or(true),
            smooth_scroll_y: top
                .smooth_scroll_y
                .or(hatch.smooth_scroll_y)
                .or(preset.smooth_scroll_y)
                .unwrap_or(true),
            range_select,
            column_select,
            row_select,
            get_cells_for_selection,
            header_height: top
                .header_height
                .or(hatch.header_height)
                .or(preset.header_height),
            row_height: top.row_height.or(hatch.row_height).or(preset.row_height),
            keybindings,
            experimental,
            trailing_row_options,
            theme,
        }
    }
}
