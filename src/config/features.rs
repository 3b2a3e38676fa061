//! Feature flags as supplied by the host, and the search sub-configuration.

use serde::{Deserialize, Serialize};

/// Default horizontal search-bar offset from the container's right edge.
pub const SEARCH_DEFAULT_OFFSET_X: f64 = 20.0;
/// Default vertical search-bar offset from the container's top edge.
pub const SEARCH_DEFAULT_OFFSET_Y: f64 = 0.0;
/// Root font size assumed when the host cannot supply one.
pub const DEFAULT_ROOT_FONT_SIZE: f64 = 16.0;

/// Entry animation for the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAnimation {
    #[default]
    SlideLeft,
    SlideTop,
    Blur,
    Show,
}

impl SearchAnimation {
    /// CSS class applied to the search-bar wrapper.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::SlideLeft => "gdg-search-anim-slide-left",
            Self::SlideTop => "gdg-search-anim-slide-top",
            Self::Blur => "gdg-search-anim-blur",
            Self::Show => "gdg-search-anim-show",
        }
    }
}

/// A CSS-like length: `"12px"`, `"1.5rem"`, `"10%"` or a bare number.
///
/// Kept as the raw string and resolved against a reference length when the
/// search bar is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchOffset(pub String);

impl SearchOffset {
    /// Resolve to pixels. `%` is relative to `reference`, `rem` to
    /// `root_font_size`. Returns `None` when no number can be read.
    #[must_use]
    pub fn to_px(&self, reference: f64, root_font_size: f64) -> Option<f64> {
        let raw = self.0.trim();
        let n = parse_leading_f64(raw)?;
        if raw.ends_with('%') {
            Some(reference * n / 100.0)
        } else if raw.ends_with("rem") {
            let root = if root_font_size > 0.0 {
                root_font_size
            } else {
                DEFAULT_ROOT_FONT_SIZE
            };
            Some(n * root)
        } else {
            Some(n)
        }
    }
}

impl From<&str> for SearchOffset {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Resolve an optional offset, falling back to `fallback` when absent or
/// unparsable. Never fails.
#[must_use]
pub fn resolve_offset(
    value: Option<&SearchOffset>,
    reference: f64,
    root_font_size: f64,
    fallback: f64,
) -> f64 {
    value
        .and_then(|v| v.to_px(reference, root_font_size))
        .unwrap_or(fallback)
}

/// Read the longest numeric prefix of `s` (sign, digits, fraction,
/// exponent), ignoring any trailing unit.
#[must_use]
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut saw_digit = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        saw_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
            saw_digit = true;
        }
        end = frac_end;
    }
    if !saw_digit {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    s.get(..end)?.parse::<f64>().ok()
}

/// Search sub-configuration. Every field is optional so a partial override
/// can be merged field by field over the preset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<SearchAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<SearchOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<SearchOffset>,
}

impl SearchConfig {
    /// Overlay `over` onto `self`; present fields in `over` win.
    #[must_use]
    pub fn merged(&self, over: Option<&SearchConfig>) -> SearchConfig {
        let Some(over) = over else {
            return self.clone();
        };
        SearchConfig {
            active: over.active.or(self.active),
            animation: over.animation.or(self.animation),
            offset_x: over.offset_x.clone().or_else(|| self.offset_x.clone()),
            offset_y: over.offset_y.clone().or_else(|| self.offset_y.clone()),
        }
    }
}

/// Per-feature overrides supplied by the host. Absent flags fall through to
/// the preset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub selection: Option<bool>,
    pub search: Option<SearchConfig>,
    pub editing: Option<bool>,
    pub sorting: Option<bool>,
    pub column_reorder: Option<bool>,
    pub column_resize: Option<bool>,
    pub row_reorder: Option<bool>,
    pub row_append: Option<bool>,
    pub column_menu: Option<bool>,
    pub row_menu: Option<bool>,
    pub stats: Option<bool>,
    pub locking: Option<bool>,
    pub freeze_columns: Option<u32>,
}

/// A fully populated flag set, as stored in a preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub selection: bool,
    pub search: SearchConfig,
    pub editing: bool,
    pub sorting: bool,
    pub column_reorder: bool,
    pub column_resize: bool,
    pub row_reorder: bool,
    pub row_append: bool,
    pub column_menu: bool,
    pub row_menu: bool,
    pub stats: bool,
    pub locking: bool,
    pub freeze_columns: u32,
}

impl FeatureSet {
    /// Overlay host flags onto this set. Search merges field by field.
    #[must_use]
    pub fn overlay(&self, flags: &FeatureFlags) -> FeatureSet {
        FeatureSet {
            selection: flags.selection.unwrap_or(self.selection),
            search: self.search.merged(flags.search.as_ref()),
            editing: flags.editing.unwrap_or(self.editing),
            sorting: flags.sorting.unwrap_or(self.sorting),
            column_reorder: flags.column_reorder.unwrap_or(self.column_reorder),
            column_resize: flags.column_resize.unwrap_or(self.column_resize),
            row_reorder: flags.row_reorder.unwrap_or(self.row_reorder),
            row_append: flags.row_append.unwrap_or(self.row_append),
            column_menu: flags.column_menu.unwrap_or(self.column_menu),
            row_menu: flags.row_menu.unwrap_or(self.row_menu),
            stats: flags.stats.unwrap_or(self.stats),
            locking: flags.locking.unwrap_or(self.locking),
            freeze_columns: flags.freeze_columns.unwrap_or(self.freeze_columns),
        }
    }
}
