use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;

/// An untyped record value as it arrives from the host page.
///
/// A key that is absent from a record is "undefined"; `Null` is an explicit
/// JSON `null`. Both sort after every defined value.
///
/// Integral numbers within the safe-integer range serialize as integers, so
/// hosts see `7` rather than `7.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl CellValue {
    /// Whether this value counts as "undefined" for sorting purposes.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness in the host's sense: `false`, `0`, `NaN`, `""` and `null`
    /// are falsy; lists are always truthy.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) => true,
        }
    }

    /// Coerce to a number the way the host does: booleans become 0/1, text is
    /// parsed (blank text is 0), anything unparsable becomes 0.
    #[must_use]
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    0.0
                } else {
                    t.parse::<f64>().unwrap_or(0.0)
                }
            }
            Self::List(_) => 0.0,
        }
    }

    /// Display string: integers print without a fractional part, lists are
    /// comma-joined, `null` is empty.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(","),
        }
    }

    /// The zero value of the same kind, used to seed new rows.
    #[must_use]
    pub fn blank_like(&self) -> Self {
        match self {
            Self::Null | Self::Text(_) => Self::Text(String::new()),
            Self::Bool(_) => Self::Bool(false),
            Self::Number(_) => Self::Number(0.0),
            Self::List(_) => Self::List(Vec::new()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
            Self::List(_) => 3,
            Self::Null => 4,
        }
    }

    /// Total order over defined values. Mixed kinds order by kind
    /// (bool < number < text < list).
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl Serialize for CellValue {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Format a number without a trailing `.0` for integral values.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integral_number() {
        assert_eq!(CellValue::Number(22.0).display(), "22");
        assert_eq!(CellValue::Number(-3.0).display(), "-3");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
    }

    #[test]
    fn test_untagged_json_shapes() {
        let v: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 4, "x", ["a", "b"]]"#).unwrap();
        assert_eq!(
            v,
            vec![
                CellValue::Null,
                CellValue::Bool(true),
                CellValue::Number(4.0),
                CellValue::Text("x".into()),
                CellValue::List(vec!["a".into(), "b".into()]),
            ]
        );
    }

    #[test]
    fn test_integral_numbers_serialize_as_integers() {
        let v = vec![
            CellValue::Number(7.0),
            CellValue::Number(-3.0),
            CellValue::Number(2.5),
            CellValue::Number(1e20),
            CellValue::Null,
        ];
        assert_eq!(serde_json::to_string(&v).unwrap(), "[7,-3,2.5,1e20,null]");
    }

    #[test]
    fn test_mixed_kind_order() {
        assert_eq!(
            CellValue::Number(100.0).total_cmp(&CellValue::Text("a".into())),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Bool(true).total_cmp(&CellValue::Number(0.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_coerce() {
        assert_eq!(CellValue::Text(" 42 ".into()).coerce_f64(), 42.0);
        assert_eq!(CellValue::Text("abc".into()).coerce_f64(), 0.0);
        assert_eq!(CellValue::Bool(true).coerce_f64(), 1.0);
    }
}
