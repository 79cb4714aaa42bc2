pub mod state;

use self::state::create_state;
use crate::domain::a005_job::api::fetch_jobs;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::{Column, CustomTable, TablePagination};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_details::open_record_tab;
use crate::shared::icons::icon;
use crate::shared::list_utils::error_alert;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_job::aggregate::Job;
use contracts::enums::{JobStatus, JobType};
use contracts::shared::data_table::{FilterOptions, FilterState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn JobList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = create_state();
    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        let Some((request, filter, page, page_size)) = state.try_update(|s| {
            (s.begin_request(), s.filter.clone(), s.page, s.page_size)
        }) else {
            return;
        };
        set_loading.set(true);
        log::debug!("jobs: fetching page {} ({} filters)", page, filter.predicate_count());
        spawn_local(async move {
            let result = fetch_jobs(&filter, page, page_size).await;
            if !state.with_untracked(|s| s.is_latest(request)) {
                log::debug!("jobs: dropping stale response for page {}", page);
                return;
            }
            match result {
                Ok(response) => {
                    log::info!(
                        "jobs: page {}/{} with {} rows",
                        response.meta.page,
                        response.meta.total_pages,
                        response.data.len()
                    );
                    state.update(|s| s.accept_meta(&response.meta));
                    set_jobs.set(response.data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("jobs: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let pagination = TablePagination::Remote {
        current_page: Signal::derive(move || state.with(|s| s.page)),
        total_pages: Signal::derive(move || state.with(|s| s.total_pages)),
        on_page_change: Callback::new(move |page: usize| {
            if state.try_update(|s| s.go_to_page(page)).unwrap_or(false) {
                fetch();
            }
        }),
    };

    let on_filter_change = Callback::new(move |filter: FilterState| {
        state.update(|s| s.apply_filter(filter));
        fetch();
    });

    let columns = vec![
        Column::field("Job ID", "jobId"),
        Column::field("Client", "clientName"),
        Column::computed("Technician", "technicianName", |j: &Job| {
            j.technician_name
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string())
                .into_any()
        }),
        Column::field("Type", "jobType"),
        Column::field("Status", "status"),
        Column::field("Scheduled Date", "scheduledDate"),
    ];

    let filter_options = FilterOptions::default()
        .exclude(["Scheduled Date"])
        .with_status_options(JobStatus::display_names())
        .with_job_type_options(JobType::display_names());

    view! {
        <PageFrame page_id="a005_job--list" category=PAGE_CAT_LIST>
            <PageHeader title="Jobs">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </Button>
            </PageHeader>

            {error_alert(error)}

            <div class="page__content">
                <CustomTable
                    data=jobs
                    columns=columns
                    pagination=pagination
                    filter_state=Signal::derive(move || state.with(|s| s.filter.clone()))
                    on_filter_change=on_filter_change
                    on_action=Callback::new(move |job: Job| {
                        open_record_tab(&ctx, "a005_job", &job.job_id, &job)
                    })
                    filter_options=filter_options
                />
            </div>
        </PageFrame>
    }
}
