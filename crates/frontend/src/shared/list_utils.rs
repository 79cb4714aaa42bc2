//! Загрузка списков для страниц с локальной пагинацией
use leptos::prelude::*;
use std::future::Future;

/// Состояние загружаемого списка
pub struct ListResource<T: Send + Sync + 'static> {
    pub items: ReadSignal<Vec<T>>,
    pub error: ReadSignal<Option<String>>,
    pub loading: ReadSignal<bool>,
    pub reload: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

/// Создаёт список и сразу запускает первую загрузку.
///
/// `label` попадает только в лог.
pub fn create_list_resource<T, F, Fut>(label: &'static str, fetch: F) -> ListResource<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let (items, set_items) = signal(Vec::<T>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let reload = Callback::new(move |_: ()| {
        set_loading.set(true);
        let request = fetch();
        wasm_bindgen_futures::spawn_local(async move {
            match request.await {
                Ok(rows) => {
                    log::info!("{}: loaded {} rows", label, rows.len());
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("{}: {}", label, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    reload.run(());

    ListResource {
        items,
        error,
        loading,
        reload,
    }
}

/// Блок ошибки загрузки
pub fn error_alert(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! { <div class="alert alert--error">{e}</div> }
        })
    }
}
