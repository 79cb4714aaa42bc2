//! PageFrame: standard root wrapper for every page rendered inside a tab.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a005_job--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets `id`, `data-page-category` and the BEM class
/// (`page`, `page page--detail`, `page page--report`).
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) || !is_known_category(category) {
        log::warn!("PageFrame: non-standard page '{}' ({})", page_id, category);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
