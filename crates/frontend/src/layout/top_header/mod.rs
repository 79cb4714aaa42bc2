//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Field Service"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
            </div>
        </div>
    }
}
