//! Grid colors and the engine theme object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Color overrides exposed as first-class grid props.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridColors {
    /// Background of the empty grid area
    pub bg_grid: Option<String>,
    /// Background of data cells
    pub bg_cell: Option<String>,
    /// Horizontal borders inside the data matrix
    pub border_horizontal: Option<String>,
    /// Vertical borders inside the data matrix
    pub border_vertical: Option<String>,
    /// Header borders
    pub border_header: Option<String>,
    /// Row marker borders
    pub border_row_marker: Option<String>,
}

impl GridColors {
    /// Fill every unset color with the built-in default.
    #[must_use]
    pub fn with_defaults(&self) -> ResolvedColors {
        ResolvedColors {
            bg_grid: or_default(self.bg_grid.as_ref(), "#f5f5f5"),
            bg_cell: or_default(self.bg_cell.as_ref(), "#ffffff"),
            border_horizontal: or_default(self.border_horizontal.as_ref(), "rgba(0, 0, 0, 0.1)"),
            border_vertical: or_default(self.border_vertical.as_ref(), "rgba(0, 0, 0, 0.1)"),
            border_header: or_default(self.border_header.as_ref(), "rgba(0, 0, 0, 0.2)"),
            border_row_marker: or_default(self.border_row_marker.as_ref(), "rgba(0, 0, 0, 0.2)"),
        }
    }

    /// Overlay `over` onto `self`; set fields in `over` win.
    #[must_use]
    pub fn merged(&self, over: &GridColors) -> GridColors {
        GridColors {
            bg_grid: over.bg_grid.clone().or_else(|| self.bg_grid.clone()),
            bg_cell: over.bg_cell.clone().or_else(|| self.bg_cell.clone()),
            border_horizontal: over
                .border_horizontal
                .clone()
                .or_else(|| self.border_horizontal.clone()),
            border_vertical: over
                .border_vertical
                .clone()
                .or_else(|| self.border_vertical.clone()),
            border_header: over
                .border_header
                .clone()
                .or_else(|| self.border_header.clone()),
            border_row_marker: over
                .border_row_marker
                .clone()
                .or_else(|| self.border_row_marker.clone()),
        }
    }
}

fn or_default(value: Option<&String>, default: &str) -> String {
    value.cloned().unwrap_or_else(|| default.to_string())
}

/// Grid colors with every slot filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColors {
    pub bg_grid: String,
    pub bg_cell: String,
    pub border_horizontal: String,
    pub border_vertical: String,
    pub border_header: String,
    pub border_row_marker: String,
}

/// Partial engine theme. Unknown keys pass through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_cell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_cell_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_header_has_focus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_light: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Engine theme handed to the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub bg_cell: String,
    pub bg_cell_medium: String,
    pub horizontal_border_color: String,
    pub border_color: String,
    pub bg_header_has_focus: String,
    pub text_dark: String,
    pub text_medium: String,
    pub text_light: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(&GridColors::default().with_defaults())
    }
}

impl Theme {
    /// Map grid colors onto engine theme keys.
    #[must_use]
    pub fn from_colors(colors: &ResolvedColors) -> Self {
        Self {
            bg_cell: colors.bg_cell.clone(),
            bg_cell_medium: colors.bg_grid.clone(),
            horizontal_border_color: colors.border_horizontal.clone(),
            border_color: colors.border_vertical.clone(),
            bg_header_has_focus: colors.border_row_marker.clone(),
            text_dark: "#000000".to_string(),
            text_medium: "#333333".to_string(),
            text_light: "#666666".to_string(),
            extra: BTreeMap::new(),
        }
    }

    /// Apply a partial theme on top; set fields win.
    pub fn apply(&mut self, over: &ThemeOverride) {
        fn set(slot: &mut String, value: Option<&String>) {
            if let Some(v) = value {
                slot.clone_from(v);
            }
        }
        set(&mut self.bg_cell, over.bg_cell.as_ref());
        set(&mut self.bg_cell_medium, over.bg_cell_medium.as_ref());
        set(
            &mut self.horizontal_border_color,
            over.horizontal_border_color.as_ref(),
        );
        set(&mut self.border_color, over.border_color.as_ref());
        set(&mut self.bg_header_has_focus, over.bg_header_has_focus.as_ref());
        set(&mut self.text_dark, over.text_dark.as_ref());
        set(&mut self.text_medium, over.text_medium.as_ref());
        set(&mut self.text_light, over.text_light.as_ref());
        for (k, v) in &over.extra {
            self.extra.insert(k.clone(), v.clone());
        }
    }
}

impl From<Theme> for ThemeOverride {
    fn from(theme: Theme) -> Self {
        Self {
            bg_cell: Some(theme.bg_cell),
            bg_cell_medium: Some(theme.bg_cell_medium),
            horizontal_border_color: Some(theme.horizontal_border_color),
            border_color: Some(theme.border_color),
            bg_header_has_focus: Some(theme.bg_header_has_focus),
            text_dark: Some(theme.text_dark),
            text_medium: Some(theme.text_medium),
            text_light: Some(theme.text_light),
            extra: theme.extra,
        }
    }
}
