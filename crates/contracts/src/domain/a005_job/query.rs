//! Построение запроса к `/api/jobs` из состояния фильтров таблицы.

use crate::enums::{JobStatus, JobType};
use crate::shared::data_table::FilterState;
use crate::shared::list::ListQuery;

/// Переводит фильтры таблицы в параметры `/api/jobs`.
///
/// В выпадающих списках показываются названия статусов и типов, API же
/// принимает коды. Неизвестное название передаётся как есть.
pub fn jobs_query(filter: &FilterState, page: usize, page_size: usize) -> ListQuery {
    let mut query = ListQuery::from_filter_state(filter, page, page_size);

    query.status = query.status.map(|name| {
        JobStatus::from_display_name(&name)
            .map(|s| s.code().to_string())
            .unwrap_or(name)
    });
    query.job_type = query.job_type.map(|name| {
        JobType::from_display_name(&name)
            .map(|t| t.code().to_string())
            .unwrap_or(name)
    });

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::SortDirection;

    #[test]
    fn test_display_names_become_codes() {
        let filter = FilterState::new()
            .with_status("In Progress")
            .with_job_type("Maintenance")
            .with_id_sort(SortDirection::Desc)
            .with_column_filter("clientName", "acme");
        let query = jobs_query(&filter, 2, 10);

        assert_eq!(query.status.as_deref(), Some("in_progress"));
        assert_eq!(query.job_type.as_deref(), Some("maintenance"));
        assert_eq!(query.id_sort, Some(SortDirection::Desc));
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_empty_filter_has_no_predicates() {
        let query = jobs_query(&FilterState::default(), 1, 10);
        assert_eq!(query, ListQuery::new(1, 10));
    }

    #[test]
    fn test_unknown_status_passed_through() {
        let query = jobs_query(&FilterState::new().with_status("Archived"), 1, 10);
        assert_eq!(query.status.as_deref(), Some("Archived"));
    }
}
