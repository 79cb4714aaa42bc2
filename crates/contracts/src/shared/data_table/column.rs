//! Описание колонок таблицы (логическая часть) и вывод ключа данных.

use serde::{Deserialize, Serialize};

/// Откуда колонка берёт ключ данных для фильтрации и сортировки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum ColumnKey {
    /// Literal accessor: the column renders this row field as-is.
    Field(String),
    /// Custom renderer with a caller-supplied data key.
    Explicit(String),
    /// Custom renderer; the key is derived from the header.
    Derived,
}

/// Логическая часть описания колонки: всё, что нужно движку фильтров.
///
/// Визуальная часть (рендер ячейки, CSS-класс) живёт во frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    pub key: ColumnKey,
    /// Action columns are never offered for filtering or id sorting.
    pub filterable: bool,
}

impl ColumnSpec {
    pub fn field(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: ColumnKey::Field(key.into()),
            filterable: true,
        }
    }

    pub fn computed(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: ColumnKey::Explicit(key.into()),
            filterable: true,
        }
    }

    pub fn derived(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: ColumnKey::Derived,
            filterable: true,
        }
    }

    pub fn action(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: ColumnKey::Derived,
            filterable: false,
        }
    }

    /// Ключ данных колонки. Всегда возвращает строку, даже если ни у одной
    /// строки такого поля нет.
    pub fn data_key(&self) -> String {
        match &self.key {
            ColumnKey::Field(key) | ColumnKey::Explicit(key) => key.clone(),
            ColumnKey::Derived => derive_key(&self.header),
        }
    }

    pub fn header_is(&self, name: &str) -> bool {
        self.header.to_lowercase() == name.to_lowercase()
    }
}

/// Выводит ключ данных из заголовка: первое слово в нижнем регистре,
/// остальные с заглавной буквы, без пробелов.
///
/// ```
/// use contracts::shared::data_table::derive_key;
/// assert_eq!(derive_key("Tech ID"), "techId");
/// ```
pub fn derive_key(header: &str) -> String {
    header
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                title_case(word)
            }
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Resolves the data key of a column (literal key, explicit key or the
/// header-derived fallback).
pub fn resolve_data_key(column: &ColumnSpec) -> String {
    column.data_key()
}

/// First filterable column whose header is, or contains, "id".
pub fn find_id_column(columns: &[ColumnSpec]) -> Option<&ColumnSpec> {
    columns.iter().find(|c| {
        let header = c.header.to_lowercase();
        c.filterable && (header == "id" || header.contains("id"))
    })
}

pub fn find_status_column(columns: &[ColumnSpec]) -> Option<&ColumnSpec> {
    columns.iter().find(|c| c.filterable && c.header_is("status"))
}

/// Колонка типа работ ("Type" / "Job Type") для таблиц заявок
pub fn find_type_column(columns: &[ColumnSpec]) -> Option<&ColumnSpec> {
    columns
        .iter()
        .find(|c| c.filterable && (c.header_is("type") || c.header_is("job type")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Headers used by the list pages and the key each of them expects.
    const CALL_SITES: &[(&str, &str)] = &[
        ("Client ID", "clientId"),
        ("Tech ID", "techId"),
        ("Product ID", "productId"),
        ("Part ID", "partId"),
        ("Job ID", "jobId"),
        ("Contact Number", "contactNumber"),
        ("Technician Name", "technicianName"),
        ("Jobs Completed", "jobsCompleted"),
        ("Avg Rating", "avgRating"),
        ("Scheduled Date", "scheduledDate"),
        ("Status", "status"),
        ("id", "id"),
    ];

    #[test]
    fn test_derive_key_call_sites() {
        for (header, expected) in CALL_SITES {
            assert_eq!(derive_key(header), *expected, "header {:?}", header);
            // deterministic across calls
            assert_eq!(derive_key(header), derive_key(header));
        }
    }

    #[test]
    fn test_derive_key_edge_cases() {
        assert_eq!(derive_key(""), "");
        assert_eq!(derive_key("NAME"), "name");
        assert_eq!(derive_key("total  cost"), "totalCost");
    }

    #[test]
    fn test_data_key_resolution() {
        assert_eq!(ColumnSpec::field("Name", "fullName").data_key(), "fullName");
        assert_eq!(ColumnSpec::computed("Stock", "stock").data_key(), "stock");
        assert_eq!(ColumnSpec::derived("Product ID").data_key(), "productId");
        assert_eq!(
            resolve_data_key(&ColumnSpec::derived("Contact Number")),
            "contactNumber"
        );
    }

    #[test]
    fn test_special_columns() {
        let columns = vec![
            ColumnSpec::field("Name", "name"),
            ColumnSpec::field("Job ID", "jobId"),
            ColumnSpec::field("Job Type", "jobType"),
            ColumnSpec::field("STATUS", "status"),
            ColumnSpec::action("Action"),
        ];

        assert_eq!(find_id_column(&columns).map(|c| c.data_key()), Some("jobId".into()));
        assert_eq!(find_status_column(&columns).map(|c| c.data_key()), Some("status".into()));
        assert_eq!(find_type_column(&columns).map(|c| c.data_key()), Some("jobType".into()));

        let no_special = vec![ColumnSpec::field("Name", "name"), ColumnSpec::action("id")];
        assert!(find_id_column(&no_special).is_none());
        assert!(find_status_column(&no_special).is_none());
    }
}
