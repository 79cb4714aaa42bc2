//! Клиентская фильтрация и сортировка строк (локальный режим таблицы).
//!
//! Порядок применения:
//! 1. текстовые фильтры по колонкам (подстрока, без учёта регистра);
//! 2. точное совпадение статуса и типа работ;
//! 3. стабильная сортировка по колонке ID, пустые значения всегда в конце.

use super::cell::{CellValue, DataRow};
use super::column::{find_id_column, find_status_column, find_type_column, ColumnSpec};
use super::filter_state::{ColumnFilter, FilterState, SortDirection};
use std::cmp::Ordering;

/// Applies every predicate and the id sort of `filter` to `rows`.
/// Returns references into `rows`; the input is never reordered.
pub fn apply_filters<'a, R: DataRow>(
    rows: &'a [R],
    columns: &[ColumnSpec],
    filter: &FilterState,
) -> Vec<&'a R> {
    let mut result: Vec<&R> = rows.iter().collect();

    for column_filter in &filter.column_filters {
        retain_matching_text(&mut result, column_filter);
    }

    if !filter.status_filter.is_empty() {
        if let Some(column) = find_status_column(columns) {
            retain_exact(&mut result, &column.data_key(), &filter.status_filter);
        }
    }

    if !filter.job_type_filter.is_empty() {
        if let Some(column) = find_type_column(columns) {
            retain_exact(&mut result, &column.data_key(), &filter.job_type_filter);
        }
    }

    if let Some(direction) = filter.id_sort {
        if let Some(column) = find_id_column(columns) {
            result = sort_rows(result, &column.data_key(), direction);
        }
    }

    result
}

fn retain_matching_text<R: DataRow>(rows: &mut Vec<&R>, filter: &ColumnFilter) {
    let needle = filter.value.to_lowercase();
    rows.retain(|row| {
        row.field(&filter.column)
            .map(|value| value.to_string().to_lowercase().contains(&needle))
            .unwrap_or(false)
    });
}

fn retain_exact<R: DataRow>(rows: &mut Vec<&R>, key: &str, expected: &str) {
    rows.retain(|row| {
        row.field(key)
            .map(|value| value.to_string() == expected)
            .unwrap_or(false)
    });
}

/// Стабильная сортировка по значению поля `key`.
pub fn sort_rows<'a, R: DataRow>(
    rows: Vec<&'a R>,
    key: &str,
    direction: SortDirection,
) -> Vec<&'a R> {
    let mut keyed: Vec<(Option<CellValue>, &R)> =
        rows.into_iter().map(|row| (row.field(key), row)).collect();

    keyed.sort_by(|(a, _), (b, _)| compare_for_sort(a.as_ref(), b.as_ref(), direction));

    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Missing values go last in both directions; only defined values are
/// affected by `Desc`.
pub fn compare_for_sort(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let cmp = a.compare(b);
            match direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn job_rows() -> Vec<Value> {
        vec![
            json!({"jobId": "J-1", "status": "Pending", "clientName": "Acme Corp"}),
            json!({"jobId": "J-2", "status": "Completed", "clientName": "Globex"}),
            json!({"jobId": "J-3", "status": "Pending", "clientName": "acme labs"}),
        ]
    }

    fn job_columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::field("Job ID", "jobId"),
            ColumnSpec::field("Client", "clientName"),
            ColumnSpec::field("Status", "status"),
        ]
    }

    fn ids(rows: &[&Value]) -> Vec<String> {
        rows.iter()
            .map(|r| r.get("jobId").and_then(|v| v.as_str()).unwrap_or("-").to_string())
            .collect()
    }

    #[test]
    fn test_status_filter_keeps_original_order() {
        let rows = job_rows();
        let filter = FilterState::new().with_status("Pending");
        let result = apply_filters(&rows, &job_columns(), &filter);
        assert_eq!(ids(&result), vec!["J-1", "J-3"]);
    }

    #[test]
    fn test_status_filter_is_exact_match() {
        let rows = job_rows();
        let filter = FilterState::new().with_status("Pend");
        assert!(apply_filters(&rows, &job_columns(), &filter).is_empty());
    }

    #[test]
    fn test_id_sort_desc_lexicographic() {
        let rows = job_rows();
        let filter = FilterState::new().with_id_sort(SortDirection::Desc);
        let result = apply_filters(&rows, &job_columns(), &filter);
        assert_eq!(ids(&result), vec!["J-3", "J-2", "J-1"]);
    }

    #[test]
    fn test_column_filter_case_insensitive_substring() {
        let rows = job_rows();
        let filter = FilterState::new().with_column_filter("clientName", "ACME");
        let result = apply_filters(&rows, &job_columns(), &filter);
        assert_eq!(ids(&result), vec!["J-1", "J-3"]);
    }

    #[test]
    fn test_missing_field_fails_column_filter() {
        let rows = vec![json!({"jobId": "J-1"}), json!({"jobId": "J-2", "notes": null})];
        let filter = FilterState::new().with_column_filter("notes", "a");
        assert!(apply_filters(&rows, &job_columns(), &filter).is_empty());
    }

    #[test]
    fn test_adding_filter_never_grows_result() {
        let rows = job_rows();
        let columns = job_columns();
        let base = FilterState::new().with_column_filter("clientName", "a");
        let narrowed = base.clone().with_column_filter("jobId", "3");

        let wide = apply_filters(&rows, &columns, &base);
        let narrow = apply_filters(&rows, &columns, &narrowed);
        assert!(narrow.len() <= wide.len());
        for row in &narrow {
            assert!(wide.iter().any(|w| std::ptr::eq(*w, *row)));
        }
    }

    #[test]
    fn test_numeric_ids_sort_numerically() {
        let rows = vec![json!({"id": 10}), json!({"id": 9}), json!({"id": 100})];
        let columns = vec![ColumnSpec::field("id", "id")];
        let filter = FilterState::new().with_id_sort(SortDirection::Asc);
        let result = apply_filters(&rows, &columns, &filter);
        let values: Vec<i64> = result.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(values, vec![9, 10, 100]);
    }

    #[test]
    fn test_missing_ids_sort_last_in_both_directions() {
        let rows = vec![
            json!({"id": 2, "tag": "a"}),
            json!({"tag": "b"}),
            json!({"id": 1, "tag": "c"}),
            json!({"id": null, "tag": "d"}),
            json!({"id": 3, "tag": "e"}),
        ];
        let columns = vec![ColumnSpec::field("id", "id")];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let filter = FilterState::new().with_id_sort(direction);
            let result = apply_filters(&rows, &columns, &filter);
            let tags: Vec<&str> = result.iter().filter_map(|r| r["tag"].as_str()).collect();
            assert_eq!(&tags[3..], &["b", "d"], "direction {:?}", direction);
        }
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let rows = vec![
            json!({"id": 1, "tag": "a"}),
            json!({"id": 0, "tag": "b"}),
            json!({"id": 1, "tag": "c"}),
            json!({"id": 0, "tag": "d"}),
        ];
        let once = sort_rows(rows.iter().collect(), "id", SortDirection::Asc);
        let tags: Vec<&str> = once.iter().filter_map(|r| r["tag"].as_str()).collect();
        assert_eq!(tags, vec!["b", "d", "a", "c"]);

        let twice = sort_rows(once.clone(), "id", SortDirection::Asc);
        assert!(once.iter().zip(&twice).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    #[test]
    fn test_job_type_filter_uses_type_column() {
        let rows = vec![
            json!({"jobId": "J-1", "jobType": "Repair"}),
            json!({"jobId": "J-2", "jobType": "Installation"}),
        ];
        let columns = vec![
            ColumnSpec::field("Job ID", "jobId"),
            ColumnSpec::field("Type", "jobType"),
        ];
        let filter = FilterState::new().with_job_type("Installation");
        assert_eq!(ids(&apply_filters(&rows, &columns, &filter)), vec!["J-2"]);
    }

    #[test]
    fn test_status_filter_without_status_column_is_ignored() {
        let rows = job_rows();
        let columns = vec![ColumnSpec::field("Job ID", "jobId")];
        let filter = FilterState::new().with_status("Pending");
        assert_eq!(apply_filters(&rows, &columns, &filter).len(), 3);
    }
}
