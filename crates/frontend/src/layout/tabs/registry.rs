//! Tab content registry - маппинг tab.key → View

use super::tab_labels::parse_detail_key;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_technician::ui::list::TechnicianList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_part::ui::list::PartList;
use crate::domain::a005_job::ui::list::JobList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_job_report::ui::list::JobReportList;
use crate::shared::components::record_details::RecordDetails;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// `tabs_store` нужен detail-табам для закрытия самих себя.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_client" => view! { <ClientList /> }.into_any(),
        "a002_technician" => view! { <TechnicianList /> }.into_any(),
        "a003_product" => view! { <ProductList /> }.into_any(),
        "a004_part" => view! { <PartList /> }.into_any(),
        "a005_job" => view! { <JobList /> }.into_any(),
        "p900_job_report" => view! { <JobReportList /> }.into_any(),

        k => match parse_detail_key(k) {
            Some((entity, id)) => {
                log::debug!("Creating RecordDetails for {} / {}", entity, id);
                let key_for_close = k.to_string();
                view! {
                    <RecordDetails
                        tab_key=k.to_string()
                        entity=entity.to_string()
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any()
            }
            None => {
                log::warn!("Unknown tab type: {}", k);
                view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
            }
        },
    }
}
