//! Read-only карточка записи, открытой из списка в отдельном табе.
//!
//! Список кладёт JSON строки в `AppGlobalContext.form_states` под ключом
//! detail-таба, карточка читает его оттуда.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, detail_tab_label, tab_label_for_key};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use thaw::{Button, ButtonAppearance};

/// Открывает detail-таб записи `id` сущности `entity_key`.
pub fn open_record_tab<T: Serialize>(ctx: &AppGlobalContext, entity_key: &str, id: &str, row: &T) {
    let key = detail_tab_key(entity_key, id);
    match serde_json::to_value(row) {
        Ok(value) => ctx.set_form_state(key.clone(), value),
        Err(e) => log::error!("Failed to snapshot {} {}: {}", entity_key, id, e),
    }
    ctx.open_tab(&key, &detail_tab_label(entity_key, id));
}

/// Пары "поле - значение" для отображения. `null` показывается как "-".
pub fn record_fields(value: &Value) -> Vec<(String, String)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect(),
        other => vec![("value".to_string(), display_value(other))],
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn RecordDetails(
    #[prop(into)] tab_key: String,
    #[prop(into)] entity: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let title = tab_label_for_key(&entity);
    let page_id = format!("{}--detail", entity);
    let key = StoredValue::new(tab_key);

    let fields = move || {
        key.with_value(|k| ctx.form_states.with(|states| states.get(k).map(record_fields)))
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {move || match fields() {
                    Some(fields) => view! {
                        <dl class="record-details">
                            {fields.into_iter().map(|(name, value)| view! {
                                <dt class="record-details__name">{name}</dt>
                                <dd class="record-details__value">{value}</dd>
                            }).collect_view()}
                        </dl>
                    }.into_any(),
                    None => view! {
                        <div class="placeholder">
                            "Record is no longer loaded. Reopen it from the list."
                        </div>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_fields() {
        let fields = record_fields(&json!({
            "jobId": "J-1",
            "technicianName": null,
            "price": 12.5
        }));
        assert!(fields.contains(&("jobId".to_string(), "J-1".to_string())));
        assert!(fields.contains(&("technicianName".to_string(), "-".to_string())));
        assert!(fields.contains(&("price".to_string(), "12.5".to_string())));
    }
}
