//! Seed values for rows created through append/insert.

use crate::content::FieldHints;
use crate::types::{CellValue, ColumnDescriptor, Record, RowId, ID_FIELD};

/// Blank value for one column: field hints first, then the kind of the first
/// defined value already in the column, otherwise empty text.
#[must_use]
pub fn blank_value_for(column_id: &str, rows: &[Record], hints: &FieldHints) -> CellValue {
    if hints.is_boolean(column_id) {
        return CellValue::Bool(false);
    }
    if hints.is_numeric(column_id) {
        return CellValue::Number(0.0);
    }
    rows.iter()
        .filter_map(|r| r.get(column_id))
        .find(|v| !v.is_nullish())
        .map_or_else(|| CellValue::Text(String::new()), CellValue::blank_like)
}

/// A new record with `id` and a blank value for every other column.
#[must_use]
pub fn new_record(
    id: RowId,
    columns: &[ColumnDescriptor],
    rows: &[Record],
    hints: &FieldHints,
) -> Record {
    let mut record = Record::new(id);
    for column in columns.iter().filter(|c| c.id != ID_FIELD) {
        record.set(&column.id, blank_value_for(&column.id, rows, hints));
    }
    record
}
