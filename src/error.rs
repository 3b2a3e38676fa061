//! Structured error types for gridlayer.
//!
//! Every failure in the grid degrades to "state unchanged". A subset of
//! errors are blocked user actions that must be surfaced with a blocking
//! notice; the rest are only logged.

/// All errors that can occur while mutating or configuring a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Deleting would leave the grid without rows.
    #[error("Cannot delete the last remaining row.")]
    LastRow,

    /// Rename/remove/edit targeted the protected identifier column.
    #[error("The ID column cannot be {action}.")]
    ProtectedColumn { action: &'static str },

    /// Row index outside the displayed rows.
    #[error("Row index {index} out of range (rows: {len})")]
    RowOutOfRange { index: usize, len: usize },

    /// Column index outside the column list.
    #[error("Column index {index} out of range (columns: {len})")]
    ColumnOutOfRange { index: usize, len: usize },

    /// No column carries this identifier.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Edit attempted on a cell that is not editable right now.
    #[error("Cell ({col}, {row}) is not editable")]
    CellNotEditable { col: usize, row: usize },

    /// Edited cell kind that cannot be written back into a record.
    #[error("Unsupported cell kind for editing: {kind}")]
    UnsupportedEdit { kind: String },

    /// The capability behind this action is switched off.
    #[error("Feature disabled: {0}")]
    FeatureDisabled(&'static str),

    /// Record shape violation (e.g. missing numeric `id`).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

impl GridError {
    /// The blocking message to show the user, if this error is a blocked
    /// user action. Everything else is logged and swallowed.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::LastRow | Self::ProtectedColumn { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_actions_carry_notice() {
        assert_eq!(
            GridError::LastRow.notice().as_deref(),
            Some("Cannot delete the last remaining row.")
        );
        assert_eq!(
            GridError::ProtectedColumn { action: "renamed" }
                .notice()
                .as_deref(),
            Some("The ID column cannot be renamed.")
        );
    }

    #[test]
    fn test_internal_errors_are_silent() {
        assert!(GridError::CellNotEditable { col: 1, row: 2 }
            .notice()
            .is_none());
        assert!(GridError::UnsupportedEdit {
            kind: "image".into()
        }
        .notice()
        .is_none());
    }
}
