use crate::shared::icons::icon;
use contracts::shared::data_table::{is_valid_page, PageItem};
use leptos::prelude::*;

/// PaginationControls component - prev/next and compacted page numbers.
///
/// Pages are 1-based. Requests outside `[1, total_pages]` are not emitted.
/// Page buttons and prev/next availability come from the table's page window.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    #[prop(into)] pages: Signal<Vec<PageItem>>,

    #[prop(into)] has_prev: Signal<bool>,

    #[prop(into)] has_next: Signal<bool>,

    /// Rows behind the pager
    #[prop(into)]
    total_count: Signal<usize>,

    /// Show `total_count` next to the page numbers
    #[prop(optional)]
    show_count: bool,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let request = move |page: usize| {
        if is_valid_page(page, total_pages.get_untracked()) {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| request(current_page.get_untracked().saturating_sub(1))
                disabled=move || !has_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                pages
                    .get()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=page == current
                                on:click=move |_| request(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => {
                            view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| request(current_page.get_untracked() + 1)
                disabled=move || !has_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            {show_count.then(|| view! {
                <span class="pagination-info">{move || format!("({})", total_count.get())}</span>
            })}
        </div>
    }
}
