use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::CellValue;

/// Column identifier carried by every record.
pub const ID_FIELD: &str = "id";

/// Numeric row identifier.
pub type RowId = u64;

/// Largest id a JavaScript number holds exactly (`Number.MAX_SAFE_INTEGER`).
pub const MAX_ROW_ID: RowId = (1 << 53) - 1;

/// One grid row: column identifier → value, always holding a numeric `id`.
///
/// Serializes as a flat JSON object, so the host sees
/// `{ "id": 1, "name": "Ana", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, CellValue>,
}

impl Record {
    /// Create an empty record with the given identifier, clamped to
    /// [`MAX_ROW_ID`].
    #[must_use]
    pub fn new(id: RowId) -> Self {
        let mut values = BTreeMap::new();
        values.insert(ID_FIELD.to_string(), CellValue::Number(id_to_f64(id)));
        Self { values }
    }

    /// Build a record from raw values, validating the `id` field.
    ///
    /// # Errors
    /// Returns `InvalidRecord` if `id` is missing, non-numeric, negative,
    /// fractional or above [`MAX_ROW_ID`].
    pub fn from_values(values: BTreeMap<String, CellValue>) -> crate::error::Result<Self> {
        match values.get(ID_FIELD) {
            Some(CellValue::Number(n)) if is_valid_id(*n) => Ok(Self { values }),
            Some(other) => Err(crate::error::GridError::InvalidRecord(format!(
                "`id` must be a non-negative integer up to {MAX_ROW_ID}, got {other:?}"
            ))),
            None => Err(crate::error::GridError::InvalidRecord(
                "missing `id` field".into(),
            )),
        }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<CellValue>) -> Self {
        self.set(key, value.into());
        self
    }

    /// The record's identifier.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn id(&self) -> RowId {
        // Ids are validated on the way in, so the cast is exact.
        match self.values.get(ID_FIELD) {
            Some(CellValue::Number(n)) => *n as RowId,
            _ => 0,
        }
    }

    /// Value for a column, `None` when undefined.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.values.get(key)
    }

    /// Replace one field. The `id` field is only replaced by a valid id.
    pub fn set(&mut self, key: &str, value: CellValue) {
        if key == ID_FIELD {
            match value {
                CellValue::Number(n) if is_valid_id(n) => {}
                _ => return,
            }
        }
        self.values.insert(key.to_string(), value);
    }

    /// Copy of this record with one field replaced.
    #[must_use]
    pub fn replaced(&self, key: &str, value: CellValue) -> Self {
        let mut next = self.clone();
        next.set(key, value);
        next
    }

}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = BTreeMap::<String, CellValue>::deserialize(deserializer)?;
        Self::from_values(values).map_err(serde::de::Error::custom)
    }
}

#[allow(clippy::cast_precision_loss)]
fn id_to_f64(id: RowId) -> f64 {
    id.min(MAX_ROW_ID) as f64
}

#[allow(clippy::cast_precision_loss)]
fn is_valid_id(n: f64) -> bool {
    n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= MAX_ROW_ID as f64
}
