//! The props object the host passes when mounting a grid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::engine::EngineOverrides;
use super::features::FeatureFlags;
use super::preset::Preset;
use crate::content::FieldHints;
use crate::render::theme::GridColors;
use crate::types::{ColumnDescriptor, GridSelection, Record};

/// Grid props, deserializable from the same JSON object the host would hand
/// to the component.
///
/// Engine props may be given at the top level (flattened into `engine`) or
/// inside `dataEditorProps`; the top level wins. This holds for the merged
/// maps (`keybindings`, `experimental`, `theme`) too, key by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridProps {
    pub preset: Preset,
    pub features: FeatureFlags,
    pub data_editor_props: EngineOverrides,
    pub initial_data: Vec<Record>,
    pub columns: Vec<ColumnDescriptor>,
    /// Whether editing starts unlocked.
    pub is_editable: bool,
    /// Per-column edit permission; a column is editable unless mapped to `false`.
    pub editable_columns: BTreeMap<String, bool>,
    pub show_stats: bool,
    pub lock_button_title: Option<String>,
    pub enable_column_context_menu: bool,
    pub enable_row_context_menu: bool,
    pub grid_colors: GridColors,
    pub field_hints: FieldHints,
    /// Controlled selection; when set it is shown instead of internal state.
    pub grid_selection: Option<GridSelection>,
    #[serde(flatten)]
    pub engine: EngineOverrides,
}

impl Default for GridProps {
    fn default() -> Self {
        Self {
            preset: Preset::Default,
            features: FeatureFlags::default(),
            data_editor_props: EngineOverrides::default(),
            initial_data: Vec::new(),
            columns: Vec::new(),
            is_editable: true,
            editable_columns: BTreeMap::new(),
            show_stats: true,
            lock_button_title: None,
            enable_column_context_menu: true,
            enable_row_context_menu: true,
            grid_colors: GridColors::default(),
            field_hints: FieldHints::default(),
            grid_selection: None,
            engine: EngineOverrides::default(),
        }
    }
}

impl GridProps {
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor>, initial_data: Vec<Record>) -> Self {
        Self {
            columns,
            initial_data,
            ..Self::default()
        }
    }

    /// Parse props from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a record lacks an `id`.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
