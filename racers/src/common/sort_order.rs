use crate::common::Value;

/// Specifies the direction for sorting documents.
///
/// Sort directions arrive from callers in several spellings. [SortOrder::parse]
/// accepts the numeric form used by document stores (`1` / `-1`) as well as
/// the words `asc`, `ascending`, `desc` and `descending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A)
    Descending,
}

impl SortOrder {
    /// Reads a sort direction from a caller supplied value.
    ///
    /// Returns `None` when the value is not a recognized direction.
    pub fn parse(value: &Value) -> Option<SortOrder> {
        match value {
            Value::I64(1) => Some(SortOrder::Ascending),
            Value::I64(-1) => Some(SortOrder::Descending),
            Value::F64(v) if *v == 1.0 => Some(SortOrder::Ascending),
            Value::F64(v) if *v == -1.0 => Some(SortOrder::Descending),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "asc" | "ascending" => Some(SortOrder::Ascending),
                "-1" | "desc" | "descending" => Some(SortOrder::Descending),
                _ => None,
            },
            _ => None,
        }
    }

    /// The numeric form of this direction, `1` or `-1`.
    pub fn as_i64(&self) -> i64 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

impl From<SortOrder> for Value {
    fn from(order: SortOrder) -> Self {
        Value::I64(order.as_i64())
    }
}
