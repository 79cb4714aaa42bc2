//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "Справочники",
            icon: "database",
            items: vec![
                ("a001_client", tab_label_for_key("a001_client"), "users"),
                ("a002_technician", tab_label_for_key("a002_technician"), "wrench"),
                ("a003_product", tab_label_for_key("a003_product"), "products"),
                ("a004_part", tab_label_for_key("a004_part"), "inventory"),
            ],
        },
        MenuGroup {
            id: "documents",
            label: "Документы",
            icon: "file-text",
            items: vec![("a005_job", tab_label_for_key("a005_job"), "file-text")],
        },
        MenuGroup {
            id: "information",
            label: "Информация",
            icon: "bar-chart",
            items: vec![("p900_job_report", tab_label_for_key("p900_job_report"), "table")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec![
        "references".to_string(),
        "documents".to_string(),
        "information".to_string(),
    ]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
