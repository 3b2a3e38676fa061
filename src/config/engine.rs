//! Engine-facing option types: the subset of the rendering engine's props
//! that this layer resolves or passes through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::render::theme::ThemeOverride;

/// Row marker column style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowMarkers {
    None,
    Number,
    Checkbox,
    CheckboxVisible,
    ClickableNumber,
    #[default]
    Both,
}

/// Range selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeSelect {
    None,
    Cell,
    Rect,
    MultiCell,
    #[default]
    MultiRect,
}

/// Whole-row / whole-column selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectMode {
    None,
    Single,
    #[default]
    Multi,
}

/// Options for the trailing "append row" line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailingRowOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<bool>,
}

impl TrailingRowOptions {
    /// The options used when the host supplies none.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            hint: Some("Add new row...".to_string()),
            sticky: Some(true),
            tint: Some(true),
        }
    }
}

/// Engine props the host may set either at the top level of the grid props
/// or inside the `dataEditorProps` escape hatch. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_markers: Option<RowMarkers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth_scroll_x: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth_scroll_y: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_select: Option<RangeSelect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_select: Option<SelectMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_select: Option<SelectMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_cells_for_selection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_row_options: Option<TrailingRowOptions>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub keybindings: BTreeMap<String, bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub experimental: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverride>,
}
