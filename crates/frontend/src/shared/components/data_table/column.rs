use crate::shared::components::status_badge::StatusBadge;
use contracts::shared::data_table::{CellValue, ColumnSpec, DataRow};
use leptos::prelude::*;
use std::sync::Arc;

pub type CellRenderer<R> = Arc<dyn Fn(&R) -> AnyView + Send + Sync>;

/// Колонка таблицы: логическое описание плюс необязательный рендер ячейки.
pub struct Column<R> {
    pub spec: ColumnSpec,
    render: Option<CellRenderer<R>>,
    pub class_name: Option<&'static str>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            render: self.render.clone(),
            class_name: self.class_name,
        }
    }
}

impl<R: DataRow> Column<R> {
    /// Raw field value; a column headed "Status" shows it as a badge.
    pub fn field(header: &str, key: &str) -> Self {
        Self {
            spec: ColumnSpec::field(header, key),
            render: None,
            class_name: None,
        }
    }

    /// Raw field value looked up by the header-derived key
    /// (`"Client Name"` reads `clientName`).
    pub fn by_header(header: &str) -> Self {
        Self {
            spec: ColumnSpec::derived(header),
            render: None,
            class_name: None,
        }
    }

    /// Custom cell markup; filtering and sorting use `key`.
    pub fn computed<F>(header: &str, key: &str, render: F) -> Self
    where
        F: Fn(&R) -> AnyView + Send + Sync + 'static,
    {
        Self {
            spec: ColumnSpec::computed(header, key),
            render: Some(Arc::new(render)),
            class_name: None,
        }
    }

    /// Custom cell markup; the data key is derived from the header.
    pub fn derived<F>(header: &str, render: F) -> Self
    where
        F: Fn(&R) -> AnyView + Send + Sync + 'static,
    {
        Self {
            spec: ColumnSpec::derived(header),
            render: Some(Arc::new(render)),
            class_name: None,
        }
    }

    /// Buttons and links; never filtered or sorted.
    pub fn action<F>(header: &str, render: F) -> Self
    where
        F: Fn(&R) -> AnyView + Send + Sync + 'static,
    {
        Self {
            spec: ColumnSpec::action(header),
            render: Some(Arc::new(render)),
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn header(&self) -> &str {
        &self.spec.header
    }

    pub fn render_cell(&self, row: &R) -> AnyView {
        if let Some(render) = &self.render {
            return render(row);
        }

        match row.field(&self.spec.data_key()) {
            Some(CellValue::Text(text)) if self.spec.header == "Status" => {
                view! { <StatusBadge status=text /> }.into_any()
            }
            Some(value) => value.to_string().into_any(),
            None => ().into_any(),
        }
    }
}

pub fn column_specs<R>(columns: &[Column<R>]) -> Vec<ColumnSpec> {
    columns.iter().map(|c| c.spec.clone()).collect()
}
