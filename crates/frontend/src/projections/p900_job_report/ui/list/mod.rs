use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_job_report::api::fetch_job_report;
use crate::shared::components::data_table::{Column, CustomTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_details::open_record_tab;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_list_resource, error_alert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use contracts::shared::data_table::FilterOptions;
use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance};

const ENTITY: &str = "p900_job_report";

fn total_cost(row: &Value) -> f64 {
    row.get("totalCost").and_then(Value::as_f64).unwrap_or(0.0)
}

/// Сумма по колонке "Total Cost"; нечисловые значения не учитываются
pub fn report_total(rows: &[Value]) -> f64 {
    rows.iter().map(total_cost).sum()
}

#[component]
pub fn JobReportList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let report = create_list_resource("job report", fetch_job_report);

    // Ключи данных выводятся из заголовков: "Client Name" -> clientName
    let columns = vec![
        Column::by_header("Job ID"),
        Column::by_header("Client Name"),
        Column::by_header("Technician Name"),
        Column::by_header("Job Type"),
        Column::by_header("Status"),
        Column::by_header("Scheduled Date"),
        Column::derived("Total Cost", |row: &Value| {
            format!("{:.2}", total_cost(row)).into_any()
        })
        .with_class("table__cell--number"),
        Column::by_header("Parts Used"),
    ];

    let total = Signal::derive(move || report.items.with(|rows| report_total(rows)));

    view! {
        <PageFrame page_id="p900_job_report--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Job Report">
                <span class="page__summary">{move || format!("Total cost: {:.2}", total.get())}</span>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| report.reload.run(())>
                    {icon("refresh")}
                    {move || if report.loading.get() { "Loading..." } else { "Refresh" }}
                </Button>
            </PageHeader>

            {error_alert(report.error)}

            <div class="page__content">
                <CustomTable
                    data=report.items
                    columns=columns
                    on_action=Callback::new(move |row: Value| {
                        let id = row.get("jobId").map(|v| match v {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        });
                        match id {
                            Some(id) => open_record_tab(&ctx, ENTITY, &id, &row),
                            None => log::warn!("job report: row without jobId"),
                        }
                    })
                    filter_options=FilterOptions::default().exclude(["Total Cost", "Parts Used"])
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_total_skips_non_numeric() {
        let rows = vec![
            json!({"jobId": "J-1", "totalCost": 120.5}),
            json!({"jobId": "J-2", "totalCost": "n/a"}),
            json!({"jobId": "J-3"}),
            json!({"jobId": "J-4", "totalCost": 79.5}),
        ];
        assert_eq!(report_total(&rows), 200.0);
        assert_eq!(report_total(&[]), 0.0);
    }
}
