use crate::domain::a004_part::api::fetch_parts;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::{Column, CustomTable, TablePagination};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_details::open_record_tab;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_list_resource, error_alert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_part::aggregate::Part;
use contracts::shared::data_table::{FilterOptions, DEFAULT_ITEMS_PER_PAGE};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn PartList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let parts = create_list_resource("parts", fetch_parts);

    let columns = vec![
        Column::field("Part ID", "partId"),
        Column::field("Name", "name"),
        Column::field("Product", "productId"),
        // Фильтр по колонке ищет по тексту с пометкой "(reorder)"
        Column::computed("Stock", "stockLabel", |p: &Part| {
            let class = if p.needs_reorder() { "text--danger" } else { "" };
            view! { <span class=class>{p.stock_label()}</span> }.into_any()
        }),
        Column::field("Reorder Level", "reorderLevel"),
        Column::computed("Unit Price", "unitPrice", |p: &Part| {
            format!("{:.2}", p.unit_price).into_any()
        })
        .with_class("table__cell--number"),
    ];

    view! {
        <PageFrame page_id="a004_part--list" category=PAGE_CAT_LIST>
            <PageHeader title="Parts" subtitle="Stock at or below the reorder level is highlighted">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| parts.reload.run(())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            {error_alert(parts.error)}

            <div class="page__content">
                <CustomTable
                    data=parts.items
                    columns=columns
                    pagination=TablePagination::Local { items_per_page: DEFAULT_ITEMS_PER_PAGE * 2 }
                    on_action=Callback::new(move |p: Part| {
                        open_record_tab(&ctx, "a004_part", &p.part_id, &p)
                    })
                    filter_options=FilterOptions::default().exclude(["reorderLevel"])
                />
            </div>
        </PageFrame>
    }
}
