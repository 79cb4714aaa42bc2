//! Значения ячеек и доступ к полям строки.
//!
//! Строка таблицы не имеет фиксированной схемы: каждая страница списка
//! передаёт свои DTO. Движку нужен только доступ "поле по ключу", поэтому
//! всё сводится к трейту [`DataRow`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;

/// Значение одного поля строки, пригодное для фильтрации и сортировки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numbers compare numerically, everything else by its string form.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Trait для строк таблицы: доступ к значению поля по ключу данных.
///
/// `None` означает отсутствующее поле (или `null`): такое значение не
/// проходит ни один текстовый фильтр и сортируется последним.
pub trait DataRow {
    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Converts a JSON value to a cell value. Nested arrays/objects are
/// string-coerced, `null` is treated as a missing field.
pub fn cell_from_json(value: &Value) -> Option<CellValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(CellValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(CellValue::Number),
        Value::String(s) => Some(CellValue::Text(s.clone())),
        other => Some(CellValue::Text(other.to_string())),
    }
}

impl DataRow for Map<String, Value> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).and_then(cell_from_json)
    }
}

impl DataRow for Value {
    fn field(&self, key: &str) -> Option<CellValue> {
        match self {
            Value::Object(map) => map.field(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_matches_string_coercion() {
        assert_eq!(CellValue::from(5i64).to_string(), "5");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from("Pending").to_string(), "Pending");
    }

    #[test]
    fn test_compare_numbers_numerically() {
        let nine = CellValue::from(9i64);
        let ten = CellValue::from(10i64);
        assert_eq!(nine.compare(&ten), Ordering::Less);
        // "10" < "9" as strings
        assert_eq!(
            CellValue::from("10").compare(&CellValue::from("9")),
            Ordering::Less
        );
        // mixed operands fall back to strings
        assert_eq!(
            CellValue::from(10i64).compare(&CellValue::from("9")),
            Ordering::Less
        );
    }

    #[test]
    fn test_json_row_access() {
        let row = json!({
            "techId": "T-7",
            "jobsCompleted": 12,
            "active": true,
            "manager": null,
            "tags": ["hvac", "solar"]
        });

        assert_eq!(row.field("techId"), Some(CellValue::from("T-7")));
        assert_eq!(row.field("jobsCompleted"), Some(CellValue::Number(12.0)));
        assert_eq!(row.field("active"), Some(CellValue::Bool(true)));
        assert_eq!(row.field("manager"), None);
        assert_eq!(row.field("missing"), None);
        assert_eq!(
            row.field("tags"),
            Some(CellValue::from(r#"["hvac","solar"]"#))
        );
        assert_eq!(json!([1, 2]).field("0"), None);
    }
}
