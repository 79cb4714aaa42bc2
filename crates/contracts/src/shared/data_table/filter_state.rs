use serde::{Deserialize, Serialize};

/// Направление сортировки по колонке ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Текстовый фильтр по одной колонке (ключ данных + подстрока)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column: String,
    pub value: String,
}

/// Полный снимок активных фильтров и сортировки таблицы.
///
/// Создаётся пустым при монтировании таблицы и при "Сбросить", целиком
/// заменяется при каждом "Применить".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub id_sort: Option<SortDirection>,
    pub status_filter: String,
    pub job_type_filter: String,
    /// At most one entry per column; empty values are never stored.
    pub column_filters: Vec<ColumnFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicate_count() == 0
    }

    /// Число на бейдже карточки фильтров: сортировка по ID, статус и
    /// текстовые фильтры. Тип работ на бейдже не учитывается.
    pub fn active_count(&self) -> usize {
        usize::from(self.id_sort.is_some())
            + usize::from(!self.status_filter.is_empty())
            + self.column_filters.len()
    }

    /// Every active predicate, the job type included.
    pub fn predicate_count(&self) -> usize {
        self.active_count() + usize::from(!self.job_type_filter.is_empty())
    }

    /// Sets, replaces or (for an empty value) removes the filter of a column.
    /// The position of an existing entry is kept.
    pub fn set_column_filter(&mut self, column: &str, value: &str) {
        if value.is_empty() {
            self.column_filters.retain(|f| f.column != column);
            return;
        }

        match self.column_filters.iter_mut().find(|f| f.column == column) {
            Some(existing) => existing.value = value.to_string(),
            None => self.column_filters.push(ColumnFilter {
                column: column.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn column_filter(&self, column: &str) -> Option<&str> {
        self.column_filters
            .iter()
            .find(|f| f.column == column)
            .map(|f| f.value.as_str())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn with_id_sort(mut self, direction: SortDirection) -> Self {
        self.id_sort = Some(direction);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status_filter = status.into();
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type_filter = job_type.into();
        self
    }

    pub fn with_column_filter(mut self, column: &str, value: &str) -> Self {
        self.set_column_filter(column, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_column_filter_replaces_in_place() {
        let mut state = FilterState::new();
        state.set_column_filter("name", "ac");
        state.set_column_filter("email", "@example");
        state.set_column_filter("name", "acme");

        assert_eq!(state.column_filters.len(), 2);
        assert_eq!(state.column_filters[0].column, "name");
        assert_eq!(state.column_filters[0].value, "acme");
        assert_eq!(state.column_filter("email"), Some("@example"));
    }

    #[test]
    fn test_empty_value_removes_entry() {
        let mut state = FilterState::new().with_column_filter("name", "acme");
        state.set_column_filter("name", "");
        assert!(state.column_filters.is_empty());

        state.set_column_filter("address", "");
        assert!(state.column_filters.is_empty());
    }

    #[test]
    fn test_active_count() {
        assert_eq!(FilterState::new().active_count(), 0);

        let state = FilterState::new()
            .with_id_sort(SortDirection::Desc)
            .with_status("Pending")
            .with_column_filter("clientName", "acme")
            .with_column_filter("address", "main");
        assert_eq!(state.active_count(), 4);

        let state = state.with_job_type("Repair");
        assert_eq!(state.active_count(), 4);
        assert_eq!(state.predicate_count(), 5);
    }

    #[test]
    fn test_badge_ignores_job_type() {
        let state = FilterState::new()
            .with_id_sort(SortDirection::Asc)
            .with_job_type("Repair");
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.predicate_count(), 2);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_clear_restores_fresh_state() {
        let mut state = FilterState::new()
            .with_id_sort(SortDirection::Asc)
            .with_status("Completed")
            .with_job_type("Installation")
            .with_column_filter("name", "x");
        state.clear();

        assert_eq!(state, FilterState::default());
        assert_eq!(state.id_sort, None);
        assert_eq!(state.status_filter, "");
        assert_eq!(state.job_type_filter, "");
        assert!(state.column_filters.is_empty());
        assert!(state.is_empty());
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse(""), None);
        assert_eq!(SortDirection::Desc.as_str(), "desc");
    }
}
