//! REST-контракт списочных эндпоинтов с серверной пагинацией.
//!
//! Запрос: `?page=2&pageSize=10&idSort=desc&status=pending&filters[clientName]=acme`
//! Ответ: `{ "data": [...], "meta": { "page": 2, "totalPages": 7, "total": 64 } }`

use super::data_table::{FilterState, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters of a paged list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_sort: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Free-text filters keyed by data key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size,
            id_sort: None,
            status: None,
            job_type: None,
            filters: BTreeMap::new(),
        }
    }

    /// Переводит снимок фильтров в параметры запроса. Пустые предикаты
    /// в запрос не попадают.
    pub fn from_filter_state(filter: &FilterState, page: usize, page_size: usize) -> Self {
        let mut query = Self::new(page, page_size);
        query.id_sort = filter.id_sort;
        query.status = non_empty(&filter.status_filter);
        query.job_type = non_empty(&filter.job_type_filter);
        query.filters = filter
            .column_filters
            .iter()
            .map(|f| (f.column.clone(), f.value.clone()))
            .collect();
        query
    }

    /// Обратное преобразование. Порядок текстовых фильтров становится
    /// алфавитным по ключу.
    pub fn filter_state(&self) -> FilterState {
        let mut state = FilterState {
            id_sort: self.id_sort,
            status_filter: self.status.clone().unwrap_or_default(),
            job_type_filter: self.job_type.clone().unwrap_or_default(),
            column_filters: Vec::new(),
        };
        for (column, value) in &self.filters {
            state.set_column_filter(column, value);
        }
        state
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub total_pages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

/// Ответ списочного эндпоинта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_from_filter_state_skips_empty_predicates() {
        let filter = FilterState::new()
            .with_status("Pending")
            .with_column_filter("clientName", "acme");
        let query = ListQuery::from_filter_state(&filter, 2, 10);

        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.id_sort, None);
        assert_eq!(query.status.as_deref(), Some("Pending"));
        assert_eq!(query.job_type, None);
        assert_eq!(query.filters.get("clientName").map(String::as_str), Some("acme"));
    }

    #[test]
    fn test_query_json_shape() {
        let filter = FilterState::new().with_id_sort(SortDirection::Desc);
        let query = ListQuery::from_filter_state(&filter, 0, 25);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"page": 1, "pageSize": 25, "idSort": "desc"})
        );
    }

    #[test]
    fn test_filter_state_back_translation() {
        let filter = FilterState::new()
            .with_id_sort(SortDirection::Asc)
            .with_job_type("Repair")
            .with_column_filter("technicianName", "lee")
            .with_column_filter("address", "main");
        let restored = ListQuery::from_filter_state(&filter, 1, 10).filter_state();

        assert_eq!(restored.id_sort, Some(SortDirection::Asc));
        assert_eq!(restored.job_type_filter, "Repair");
        assert_eq!(restored.status_filter, "");
        assert_eq!(restored.column_filter("technicianName"), Some("lee"));
        assert_eq!(restored.column_filters[0].column, "address");
    }

    #[test]
    fn test_list_response_deserialize() {
        let body = json!({
            "data": [{"jobId": "J-1"}, {"jobId": "J-2"}],
            "meta": {"page": 3, "totalPages": 5}
        });
        let response: ListResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.meta.page, 3);
        assert_eq!(response.meta.total_pages, 5);
        assert_eq!(response.meta.total, None);
    }
}
