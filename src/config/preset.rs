//! Named bundles of default feature flags and engine defaults.

use serde::{Deserialize, Serialize};

use super::engine::{EngineOverrides, RangeSelect, RowMarkers, SelectMode};
use super::features::{FeatureSet, SearchAnimation, SearchConfig};

/// The fixed set of presets a grid can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    #[default]
    Default,
    Compact,
    ReadOnly,
    Audit,
}

/// Features plus engine defaults for one preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetConfig {
    pub features: FeatureSet,
    pub engine: EngineOverrides,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Default,
        Preset::Compact,
        Preset::ReadOnly,
        Preset::Audit,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::ReadOnly => "readOnly",
            Self::Audit => "audit",
        }
    }

    /// The preset's defaults.
    #[must_use]
    pub fn config(self) -> PresetConfig {
        match self {
            Self::Default => PresetConfig {
                features: FeatureSet {
                    selection: true,
                    search: active_search(),
                    editing: true,
                    sorting: true,
                    column_reorder: true,
                    column_resize: true,
                    row_reorder: true,
                    row_append: true,
                    column_menu: true,
                    row_menu: true,
                    stats: true,
                    locking: true,
                    freeze_columns: 0,
                },
                engine: EngineOverrides {
                    row_markers: Some(RowMarkers::Both),
                    smooth_scroll_x: Some(true),
                    smooth_scroll_y: Some(true),
                    range_select: Some(RangeSelect::MultiRect),
                    column_select: Some(SelectMode::Multi),
                    row_select: Some(SelectMode::Multi),
                    ..EngineOverrides::default()
                },
            },
            Self::Compact => PresetConfig {
                features: FeatureSet {
                    selection: true,
                    search: SearchConfig {
                        active: Some(false),
                        ..SearchConfig::default()
                    },
                    editing: true,
                    sorting: true,
                    column_reorder: true,
                    column_resize: true,
                    row_reorder: false,
                    row_append: false,
                    column_menu: true,
                    row_menu: true,
                    stats: false,
                    locking: false,
                    freeze_columns: 0,
                },
                engine: EngineOverrides {
                    row_markers: Some(RowMarkers::Both),
                    header_height: Some(32.0),
                    row_height: Some(30.0),
                    ..EngineOverrides::default()
                },
            },
            Self::ReadOnly => PresetConfig {
                features: read_only_features(false),
                engine: numbered_rows(),
            },
            Self::Audit => PresetConfig {
                features: read_only_features(true),
                engine: numbered_rows(),
            },
        }
    }
}

fn active_search() -> SearchConfig {
    SearchConfig {
        active: Some(true),
        animation: Some(SearchAnimation::SlideLeft),
        ..SearchConfig::default()
    }
}

/// `readOnly` and `audit` differ only in whether the column menu stays on.
fn read_only_features(column_menu: bool) -> FeatureSet {
    FeatureSet {
        selection: true,
        search: active_search(),
        editing: false,
        sorting: true,
        column_reorder: false,
        column_resize: false,
        row_reorder: false,
        row_append: false,
        column_menu,
        row_menu: false,
        stats: true,
        locking: false,
        freeze_columns: 0,
    }
}

fn numbered_rows() -> EngineOverrides {
    EngineOverrides {
        row_markers: Some(RowMarkers::Number),
        ..EngineOverrides::default()
    }
}
