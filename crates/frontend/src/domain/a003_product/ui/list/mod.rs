use crate::domain::a003_product::api::fetch_products;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::{Column, CustomTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_details::open_record_tab;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_list_resource, error_alert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let products = create_list_resource("products", fetch_products);

    let columns = vec![
        Column::field("Product ID", "productId"),
        Column::field("Name", "name"),
        Column::field("Model", "model"),
        Column::field("Category", "category"),
        Column::computed("Price", "price", |p: &Product| format!("{:.2}", p.price).into_any())
            .with_class("table__cell--number"),
        // ключ "warrantyMonths" выводится из заголовка
        Column::derived("Warranty Months", |p: &Product| {
            format!("{} mo", p.warranty_months).into_any()
        }),
    ];

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| products.reload.run(())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            {error_alert(products.error)}

            <div class="page__content">
                <CustomTable
                    data=products.items
                    columns=columns
                    on_action=Callback::new(move |p: Product| {
                        open_record_tab(&ctx, "a003_product", &p.product_id, &p)
                    })
                />
            </div>
        </PageFrame>
    }
}
