//! Модель карточки фильтров: какие колонки участвуют в каких осях фильтра
//! и какие значения статуса/типа предлагать в выпадающих списках.

use super::cell::DataRow;
use super::column::{find_id_column, find_status_column, find_type_column, ColumnSpec};
use std::collections::BTreeSet;

/// Настройки карточки фильтров, передаваемые хост-страницей
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Headers or data keys never offered as free-text inputs.
    pub exclude_columns: Vec<String>,
    /// Full status domain; required for remote tables where the loaded
    /// page is only a sample.
    pub status_options: Option<Vec<String>>,
    pub job_type_options: Option<Vec<String>>,
}

impl FilterOptions {
    pub fn exclude<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn with_status_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_job_type_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.job_type_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_excluded(&self, column: &ColumnSpec) -> bool {
        let key = column.data_key();
        self.exclude_columns
            .iter()
            .any(|excluded| column.header_is(excluded) || *excluded == key)
    }
}

/// Раскладка колонок по осям фильтра
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub id_column: Option<ColumnSpec>,
    pub status_column: Option<ColumnSpec>,
    pub type_column: Option<ColumnSpec>,
    /// Columns offered as free-text inputs, in column order.
    pub text_columns: Vec<ColumnSpec>,
    pub status_options: Vec<String>,
    pub job_type_options: Vec<String>,
}

impl FilterControls {
    pub fn new<R: DataRow>(columns: &[ColumnSpec], sample: &[R], options: &FilterOptions) -> Self {
        let id_column = find_id_column(columns).cloned();
        let status_column = find_status_column(columns).cloned();
        let type_column = find_type_column(columns).cloned();

        let is_special = |column: &ColumnSpec| {
            [&id_column, &status_column, &type_column]
                .iter()
                .any(|special| special.as_ref() == Some(column))
        };

        let text_columns = columns
            .iter()
            .filter(|c| c.filterable && !is_special(c) && !options.is_excluded(c))
            .cloned()
            .collect();

        let status_options = match (&options.status_options, &status_column) {
            (Some(predefined), _) => predefined.clone(),
            (None, Some(column)) => distinct_values(sample, &column.data_key()),
            (None, None) => Vec::new(),
        };

        let job_type_options = match (&options.job_type_options, &type_column) {
            (Some(predefined), _) => predefined.clone(),
            (None, Some(column)) => distinct_values(sample, &column.data_key()),
            (None, None) => Vec::new(),
        };

        Self {
            id_column,
            status_column,
            type_column,
            text_columns,
            status_options,
            job_type_options,
        }
    }
}

/// Sorted distinct string-coerced values of `key` across `rows`.
pub fn distinct_values<R: DataRow>(rows: &[R], key: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.field(key))
        .map(|value| value.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::field("Job ID", "jobId"),
            ColumnSpec::field("Client", "clientName"),
            ColumnSpec::field("Type", "jobType"),
            ColumnSpec::field("Status", "status"),
            ColumnSpec::field("Created At", "createdAt"),
            ColumnSpec::action("Action"),
        ]
    }

    fn sample() -> Vec<Value> {
        vec![
            json!({"jobId": "J-1", "status": "Pending", "jobType": "Repair"}),
            json!({"jobId": "J-2", "status": "Completed", "jobType": "Repair"}),
            json!({"jobId": "J-3", "status": "Pending"}),
        ]
    }

    #[test]
    fn test_columns_are_split_by_axis() {
        let options = FilterOptions::default().exclude(["Created At"]);
        let controls = FilterControls::new(&columns(), &sample(), &options);

        assert_eq!(controls.id_column.map(|c| c.data_key()), Some("jobId".into()));
        assert_eq!(controls.status_column.map(|c| c.data_key()), Some("status".into()));
        assert_eq!(controls.type_column.map(|c| c.data_key()), Some("jobType".into()));

        let text: Vec<String> = controls.text_columns.iter().map(|c| c.header.clone()).collect();
        assert_eq!(text, vec!["Client"]);
    }

    #[test]
    fn test_exclusion_by_data_key() {
        let options = FilterOptions::default().exclude(["clientName"]);
        let controls = FilterControls::new(&columns(), &sample(), &options);
        let text: Vec<String> = controls.text_columns.iter().map(|c| c.header.clone()).collect();
        assert_eq!(text, vec!["Created At"]);
    }

    #[test]
    fn test_status_options_derived_from_sample() {
        let controls = FilterControls::new(&columns(), &sample(), &FilterOptions::default());
        assert_eq!(controls.status_options, vec!["Completed", "Pending"]);
        assert_eq!(controls.job_type_options, vec!["Repair"]);
    }

    #[test]
    fn test_predefined_options_win_over_sample() {
        let options = FilterOptions::default()
            .with_status_options(["Pending", "In Progress", "Completed"])
            .with_job_type_options(["Installation", "Repair", "Maintenance"]);
        let controls = FilterControls::new(&columns(), &sample(), &options);

        assert_eq!(controls.status_options, vec!["Pending", "In Progress", "Completed"]);
        assert_eq!(controls.job_type_options.len(), 3);
    }

    #[test]
    fn test_distinct_values_coerces_to_string() {
        let rows = vec![json!({"n": 2}), json!({"n": 10}), json!({"n": 2}), json!({})];
        assert_eq!(distinct_values(&rows, "n"), vec!["10", "2"]);
    }
}
