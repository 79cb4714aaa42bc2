use crate::domain::a001_client::api::fetch_clients;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::{Column, CustomTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_details::open_record_tab;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_list_resource, error_alert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::data_table::FilterOptions;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

const ENTITY: &str = "a001_client";

#[component]
pub fn ClientList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let clients = create_list_resource("clients", fetch_clients);

    let open = move |client: &Client| open_record_tab(&ctx, ENTITY, &client.client_id, client);

    let columns = vec![
        Column::field("Client ID", "clientId"),
        Column::field("Name", "name"),
        Column::field("Contact Number", "contactNumber"),
        Column::computed("Email", "email", |c: &Client| {
            c.email.clone().unwrap_or_else(|| "-".to_string()).into_any()
        }),
        Column::field("Address", "address"),
        Column::field("Created At", "createdAt"),
        Column::action("Action", move |c: &Client| {
            let client = c.clone();
            view! {
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        open(&client);
                    }
                >
                    "Open"
                </Button>
            }
            .into_any()
        }),
    ];

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <PageHeader title="Clients">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| clients.reload.run(())>
                    {icon("refresh")}
                    {move || if clients.loading.get() { "Loading..." } else { "Refresh" }}
                </Button>
            </PageHeader>

            {error_alert(clients.error)}

            <div class="page__content">
                <CustomTable
                    data=clients.items
                    columns=columns
                    on_action=Callback::new(move |c: Client| open(&c))
                    filter_options=FilterOptions::default().exclude(["Created At"])
                />
            </div>
        </PageFrame>
    }
}
