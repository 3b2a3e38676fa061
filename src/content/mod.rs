//! Cell content mapping.
//!
//! Given a `(column, row)` coordinate the grid derives a typed
//! [`CellDescriptor`] for the rendering engine, and decodes edited cells the
//! engine hands back into record values.

mod edit;
mod rules;

use serde::{Deserialize, Serialize};

pub use edit::EditedCell;
pub use rules::{CellContext, CellRule, CELL_RULES};

/// Column identifier rendered as a row-id cell.
pub const ROW_ID_COLUMN: &str = "rowId";

/// Column identifiers that get special kinds regardless of their values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldHints {
    /// Rendered as checkboxes even when the value is not a boolean.
    pub boolean_fields: Vec<String>,
    /// Rendered as numbers even when the value is not numeric.
    pub numeric_fields: Vec<String>,
    /// Numeric fields displayed with a `%` suffix.
    pub percent_fields: Vec<String>,
}

impl Default for FieldHints {
    fn default() -> Self {
        Self {
            boolean_fields: vec!["ativo".into(), "active".into()],
            numeric_fields: vec![
                "idade".into(),
                "age".into(),
                "progresso".into(),
                "progress".into(),
            ],
            percent_fields: vec!["progresso".into(), "progress".into()],
        }
    }
}

impl FieldHints {
    #[must_use]
    pub fn is_boolean(&self, column_id: &str) -> bool {
        self.boolean_fields.iter().any(|f| f == column_id)
    }

    #[must_use]
    pub fn is_numeric(&self, column_id: &str) -> bool {
        self.numeric_fields.iter().any(|f| f == column_id)
    }

    #[must_use]
    pub fn is_percent(&self, column_id: &str) -> bool {
        self.percent_fields.iter().any(|f| f == column_id)
    }
}

/// Typed cell payload in the engine's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum CellContent {
    #[serde(rename = "row-id")]
    RowId { data: String },
    #[serde(rename = "boolean")]
    Boolean { data: bool },
    #[serde(rename = "number", rename_all = "camelCase")]
    Number { data: f64, display_data: String },
    #[serde(rename = "markdown")]
    Markdown { data: String },
    #[serde(rename = "image", rename_all = "camelCase")]
    Image {
        data: Vec<String>,
        display_data: Vec<String>,
    },
    #[serde(rename = "bubble")]
    Bubble { data: Vec<String> },
    #[serde(rename = "uri", rename_all = "camelCase")]
    Uri { data: String, display_data: String },
    #[serde(rename = "text", rename_all = "camelCase")]
    Text { data: String, display_data: String },
}

impl CellContent {
    /// Engine kind name.
    #[must_use]
    pub fn kind(&self) -> CellKind {
        match self {
            Self::RowId { .. } => CellKind::RowId,
            Self::Boolean { .. } => CellKind::Boolean,
            Self::Number { .. } => CellKind::Number,
            Self::Markdown { .. } => CellKind::Markdown,
            Self::Image { .. } => CellKind::Image,
            Self::Bubble { .. } => CellKind::Bubble,
            Self::Uri { .. } => CellKind::Uri,
            Self::Text { .. } => CellKind::Text,
        }
    }

    fn text(s: String) -> Self {
        Self::Text {
            display_data: s.clone(),
            data: s,
        }
    }
}

/// Cell kinds, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    RowId,
    Boolean,
    Number,
    Markdown,
    Image,
    Bubble,
    Uri,
    Text,
}

impl CellKind {
    /// Whether the engine's overlay editor opens for this kind. Kinds that
    /// render rich content always open a (view) overlay; plain values only
    /// when editable.
    #[must_use]
    pub fn allows_overlay(self, editable: bool) -> bool {
        match self {
            Self::RowId | Self::Boolean => false,
            Self::Number | Self::Text => editable,
            Self::Markdown | Self::Image | Self::Bubble | Self::Uri => true,
        }
    }
}

/// Everything the engine needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDescriptor {
    #[serde(flatten)]
    pub content: CellContent,
    pub allow_overlay: bool,
    pub readonly: bool,
}

impl CellDescriptor {
    /// Descriptor for a coordinate with nothing behind it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            content: CellContent::text(String::new()),
            allow_overlay: false,
            readonly: true,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.content.kind()
    }
}

/// Map one cell through the ordered rule table. The first matching rule
/// builds the content.
#[must_use]
pub fn describe(ctx: &CellContext<'_>) -> CellDescriptor {
    let content = CELL_RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .map_or_else(|| rules::plain_text(ctx), |rule| (rule.build)(ctx));
    let editable = ctx.editable && content.kind() != CellKind::RowId;
    CellDescriptor {
        allow_overlay: content.kind().allows_overlay(editable),
        readonly: !editable,
        content,
    }
}
