use crate::domain::a002_technician::api::fetch_technicians;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::{Column, CustomTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_details::open_record_tab;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_list_resource, error_alert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_technician::aggregate::Technician;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn TechnicianList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let technicians = create_list_resource("technicians", fetch_technicians);

    // "Status" рендерится бейджем (Active / On Leave / Inactive)
    let columns = vec![
        Column::field("Tech ID", "techId"),
        Column::field("Name", "name"),
        Column::field("Contact Number", "contactNumber"),
        Column::field("Specialization", "specialization"),
        Column::field("Status", "status"),
        Column::field("Jobs Completed", "jobsCompleted").with_class("table__cell--number"),
    ];

    view! {
        <PageFrame page_id="a002_technician--list" category=PAGE_CAT_LIST>
            <PageHeader title="Technicians">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| technicians.reload.run(())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            {error_alert(technicians.error)}

            <div class="page__content">
                <CustomTable
                    data=technicians.items
                    columns=columns
                    on_action=Callback::new(move |t: Technician| {
                        open_record_tab(&ctx, "a002_technician", &t.tech_id, &t)
                    })
                />
            </div>
        </PageFrame>
    }
}
