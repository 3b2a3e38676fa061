//! Sort state and the derived display order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::{CellValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Arrow appended to the sorted column's title.
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Active sort: one column, one direction. Absence means insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Next state after clicking `column_id`: asc → desc → unsorted on the same
/// column, asc on any other column.
#[must_use]
pub fn next_sort(prev: Option<&SortState>, column_id: &str) -> Option<SortState> {
    match prev {
        Some(s) if s.column_id == column_id => match s.direction {
            SortDirection::Asc => Some(SortState::desc(column_id)),
            SortDirection::Desc => None,
        },
        _ => Some(SortState::asc(column_id)),
    }
}

/// Compare two optional values. Undefined (and `null`) sort last in both
/// directions; everything else follows [`CellValue::total_cmp`] with the
/// direction applied.
#[must_use]
pub fn compare_values(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    direction: SortDirection,
) -> Ordering {
    let a = a.filter(|v| !v.is_nullish());
    let b = b.filter(|v| !v.is_nullish());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = a.total_cmp(b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

/// Display position → storage index. Stable, so ties keep insertion order.
#[must_use]
pub fn display_order(rows: &[Record], sort: Option<&SortState>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some(sort) = sort {
        order.sort_by(|&i, &j| {
            let a = rows.get(i).and_then(|r| r.get(&sort.column_id));
            let b = rows.get(j).and_then(|r| r.get(&sort.column_id));
            compare_values(a, b, sort.direction)
        });
    }
    order
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_click_cycle() {
        let s1 = next_sort(None, "name");
        assert_eq!(s1, Some(SortState::asc("name")));
        let s2 = next_sort(s1.as_ref(), "name");
        assert_eq!(s2, Some(SortState::desc("name")));
        let s3 = next_sort(s2.as_ref(), "name");
        assert_eq!(s3, None);
    }

    #[test]
    fn test_other_column_resets_to_asc() {
        let desc = SortState::desc("name");
        assert_eq!(next_sort(Some(&desc), "age"), Some(SortState::asc("age")));
    }

    #[test]
    fn test_undefined_last_both_directions() {
        let one = CellValue::Number(1.0);
        for dir in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(compare_values(None, Some(&one), dir), Ordering::Greater);
            assert_eq!(compare_values(Some(&one), None, dir), Ordering::Less);
            assert_eq!(
                compare_values(Some(&CellValue::Null), Some(&one), dir),
                Ordering::Greater
            );
        }
    }
}
