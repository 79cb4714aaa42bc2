//! Карточка фильтров: сортировка по ID, статус, тип работ и текстовые
//! фильтры по колонкам. Правки копятся в черновике до "Apply".

use crate::shared::components::filter_panel::FilterPanel;
use contracts::shared::data_table::{FilterControls, FilterState, SortDirection};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn FilterCard(
    /// Which columns feed which filter axis, plus dropdown options
    #[prop(into)]
    controls: Signal<FilterControls>,

    /// Filter state currently applied to the table
    #[prop(into)]
    applied: Signal<FilterState>,

    on_apply: Callback<FilterState>,

    on_clear: Callback<()>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let draft = RwSignal::new(applied.get_untracked());

    // Внешняя замена фильтров (Clear, хост) сбрасывает черновик
    Effect::new(move |_| draft.set(applied.get()));

    let active_count = Signal::derive(move || applied.with(FilterState::active_count));

    let apply = move |_| on_apply.run(draft.get_untracked());
    let clear = move |_| {
        draft.set(FilterState::default());
        on_clear.run(());
    };

    view! {
        <FilterPanel is_expanded=is_expanded active_filters_count=active_count>
            {move || {
                let c = controls.get();
                view! {
                    <div class="filter-card__fields">
                        {c.id_column.map(|column| view! {
                            <label class="filter-card__field">
                                <span>{format!("Sort by {}", column.header)}</span>
                                <select
                                    prop:value=move || draft.with(|d| {
                                        d.id_sort.map(|s| s.as_str()).unwrap_or("").to_string()
                                    })
                                    on:change=move |ev| {
                                        let direction = SortDirection::parse(&event_target_value(&ev));
                                        draft.update(|d| d.id_sort = direction);
                                    }
                                >
                                    <option value="">"None"</option>
                                    <option value="asc">"Ascending"</option>
                                    <option value="desc">"Descending"</option>
                                </select>
                            </label>
                        })}

                        {c.status_column.map(|column| view! {
                            <label class="filter-card__field">
                                <span>{column.header}</span>
                                <select
                                    prop:value=move || draft.with(|d| d.status_filter.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.status_filter = value);
                                    }
                                >
                                    <option value="">"All"</option>
                                    {c.status_options.iter().map(|opt| view! {
                                        <option value=opt.clone()>{opt.clone()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                        })}

                        {c.type_column.map(|column| view! {
                            <label class="filter-card__field">
                                <span>{column.header}</span>
                                <select
                                    prop:value=move || draft.with(|d| d.job_type_filter.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.job_type_filter = value);
                                    }
                                >
                                    <option value="">"All"</option>
                                    {c.job_type_options.iter().map(|opt| view! {
                                        <option value=opt.clone()>{opt.clone()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                        })}

                        {c.text_columns.into_iter().map(|column| {
                            let key = StoredValue::new(column.data_key());
                            view! {
                                <label class="filter-card__field">
                                    <span>{column.header.clone()}</span>
                                    <input
                                        type="text"
                                        placeholder=format!("Filter by {}", column.header)
                                        prop:value=move || draft.with(|d| {
                                            key.with_value(|k| d.column_filter(k).unwrap_or("").to_string())
                                        })
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            key.with_value(|k| draft.update(|d| d.set_column_filter(k, &value)));
                                        }
                                    />
                                </label>
                            }
                        }).collect_view()}
                    </div>
                }
            }}
            <div class="filter-card__actions">
                <Button appearance=ButtonAppearance::Primary on_click=apply>
                    "Apply"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=clear>
                    "Clear"
                </Button>
            </div>
        </FilterPanel>
    }
}
