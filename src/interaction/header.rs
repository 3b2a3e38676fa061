//! The toolbar above the grid: record count, lock toggle, search button.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockButton {
    pub label: String,
    /// Highlighted while editing is unlocked.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchButton {
    pub active: bool,
}

/// What the toolbar shows. Absent buttons are not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBar {
    pub total_records: usize,
    pub show_stats: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_button: Option<LockButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_button: Option<SearchButton>,
}

/// Inputs for [`HeaderBar::build`].
#[derive(Debug, Clone, Copy)]
pub struct HeaderState<'a> {
    pub total_records: usize,
    pub stats: bool,
    pub locking: bool,
    pub locked: bool,
    pub lock_button_title: Option<&'a str>,
    pub search_enabled: bool,
    pub search_visible: bool,
}

impl HeaderBar {
    #[must_use]
    pub fn build(state: HeaderState<'_>) -> Self {
        let lock_button = state.locking.then(|| LockButton {
            label: if state.locked {
                "Edit".to_string()
            } else {
                state.lock_button_title.unwrap_or("Lock").to_string()
            },
            active: !state.locked,
        });
        let search_button = state.search_enabled.then_some(SearchButton {
            active: state.search_visible,
        });
        Self {
            total_records: state.total_records,
            show_stats: state.stats,
            lock_button,
            search_button,
        }
    }
}
