//! Decoding edited cells returned by the engine's overlay editor.

use serde::Deserialize;

use crate::error::{GridError, Result};
use crate::types::CellValue;

/// An edited cell as the engine reports it: `{ kind, data, ... }`.
///
/// Extra fields (`displayData`, `allowOverlay`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum EditedCell {
    #[serde(rename = "text")]
    Text { data: String },
    #[serde(rename = "markdown")]
    Markdown { data: String },
    #[serde(rename = "uri")]
    Uri { data: String },
    #[serde(rename = "number")]
    Number { data: Option<f64> },
    #[serde(rename = "boolean")]
    Boolean { data: Option<bool> },
    #[serde(rename = "bubble")]
    Bubble { data: Vec<String> },
    #[serde(rename = "image")]
    Image {},
    #[serde(rename = "row-id")]
    RowId {},
    #[serde(other)]
    Unknown,
}

impl EditedCell {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Markdown { .. } => "markdown",
            Self::Uri { .. } => "uri",
            Self::Number { .. } => "number",
            Self::Boolean { .. } => "boolean",
            Self::Bubble { .. } => "bubble",
            Self::Image {} => "image",
            Self::RowId {} => "row-id",
            Self::Unknown => "unknown",
        }
    }

    /// The record value this edit writes.
    ///
    /// # Errors
    /// `UnsupportedEdit` for kinds that cannot be written back.
    pub fn into_value(self) -> Result<CellValue> {
        match self {
            Self::Text { data } | Self::Markdown { data } | Self::Uri { data } => {
                Ok(CellValue::Text(data))
            }
            Self::Number { data } => Ok(data.map_or(CellValue::Null, CellValue::Number)),
            Self::Boolean { data } => Ok(CellValue::Bool(data.unwrap_or(false))),
            Self::Bubble { data } => Ok(CellValue::List(data)),
            other => Err(GridError::UnsupportedEdit {
                kind: other.kind_name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_engine_shapes() {
        let cell: EditedCell = serde_json::from_str(
            r#"{"kind": "text", "data": "Ana", "displayData": "Ana", "allowOverlay": true}"#,
        )
        .unwrap();
        assert_eq!(cell.into_value().unwrap(), CellValue::Text("Ana".into()));

        let cell: EditedCell = serde_json::from_str(r#"{"kind": "number", "data": 31}"#).unwrap();
        assert_eq!(cell.into_value().unwrap(), CellValue::Number(31.0));

        let cell: EditedCell = serde_json::from_str(r#"{"kind": "boolean", "data": true}"#).unwrap();
        assert_eq!(cell.into_value().unwrap(), CellValue::Bool(true));
    }

    #[test]
    fn test_unsupported_kinds_rejected() {
        let cell: EditedCell =
            serde_json::from_str(r#"{"kind": "image", "data": ["a.png"]}"#).unwrap();
        match cell.into_value() {
            Err(GridError::UnsupportedEdit { kind }) => assert_eq!(kind, "image"),
            other => panic!("expected UnsupportedEdit, got {other:?}"),
        }

        let cell: EditedCell = serde_json::from_str(r#"{"kind": "drilldown"}"#).unwrap();
        assert_eq!(cell, EditedCell::Unknown);
        assert!(cell.into_value().is_err());
    }
}
