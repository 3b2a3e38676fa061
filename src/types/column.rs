use serde::{Deserialize, Serialize};

/// Default width for columns created from the column menu.
pub const NEW_COLUMN_WIDTH: f64 = 150.0;

/// Default title for columns created from the column menu.
pub const NEW_COLUMN_TITLE: &str = "New Column";

/// One grid column.
///
/// `id` is the record key and never changes after construction; `title` is
/// display-only and is what rename touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub id: String,
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

fn default_width() -> f64 {
    NEW_COLUMN_WIDTH
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, width: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width,
            group: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}
