//! TabPage component - wrapper для отображения контента таба

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Рендерит контент таба через `registry::render_tab_content` и скрывает
/// его классом `tabs__item--hidden`, пока таб не активен.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key_for_active.as_str());

    log::debug!("TabPage created: '{}'", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log::debug!("TabPage destroyed: '{}'", key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
