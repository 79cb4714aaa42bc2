//! CustomTable - таблица с карточкой фильтров и пагинацией.
//!
//! Локальный режим: таблица сама фильтрует, сортирует и режет строки.
//! Серверный режим: строки и число страниц приходят от хоста как есть,
//! а изменения фильтров и страницы уходят в колбэки хоста.

use super::column::{column_specs, Column};
use super::filter_card::FilterCard;
use crate::shared::components::pagination_controls::PaginationControls;
use contracts::shared::data_table::{
    DataRow, FilterControls, FilterOptions, FilterState, PageItem, PaginationMode,
    DEFAULT_ITEMS_PER_PAGE,
};
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// Режим пагинации, выбранный хостом
#[derive(Clone, Copy)]
pub enum TablePagination {
    Local {
        items_per_page: usize,
    },
    /// Страница и число страниц принадлежат хосту.
    Remote {
        current_page: Signal<usize>,
        total_pages: Signal<usize>,
        on_page_change: Callback<usize>,
    },
}

impl Default for TablePagination {
    fn default() -> Self {
        TablePagination::Local {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl TablePagination {
    fn mode_untracked(&self) -> PaginationMode {
        match *self {
            TablePagination::Local { items_per_page } => PaginationMode::Local { items_per_page },
            TablePagination::Remote {
                current_page,
                total_pages,
                ..
            } => PaginationMode::Remote {
                current_page: current_page.get_untracked(),
                total_pages: total_pages.get_untracked(),
            },
        }
    }
}

#[derive(Clone)]
struct PageSnapshot<R> {
    rows: Vec<R>,
    current_page: usize,
    total_pages: usize,
    row_count: usize,
    pages: Vec<PageItem>,
    has_prev: bool,
    has_next: bool,
}

#[component]
pub fn CustomTable<R>(
    #[prop(into)] data: Signal<Vec<R>>,

    columns: Vec<Column<R>>,

    #[prop(optional)] pagination: TablePagination,

    /// Row click
    #[prop(optional)]
    on_action: Option<Callback<R>>,

    /// Every applied filter snapshot (Apply and Clear)
    #[prop(optional)]
    on_filter_change: Option<Callback<FilterState>>,

    /// Host-owned filter state, mirrored into the filter card
    #[prop(optional, into)]
    filter_state: Option<Signal<FilterState>>,

    #[prop(optional)] filter_options: FilterOptions,
) -> impl IntoView
where
    R: DataRow + Clone + Send + Sync + 'static,
{
    let specs = StoredValue::new(column_specs(&columns));
    let columns = StoredValue::new(columns);
    let filter_options = StoredValue::new(filter_options);
    let column_count = specs.with_value(|s| s.len().max(1));

    let strategy = RwSignal::new(pagination.mode_untracked().into_strategy::<R>());
    let applied = RwSignal::new(
        filter_state
            .map(|s| s.get_untracked())
            .unwrap_or_default(),
    );

    if let Some(external) = filter_state {
        Effect::new(move |_| {
            let next = external.get();
            if applied.with_untracked(|current| *current != next) {
                applied.set(next);
            }
        });
    }

    if let TablePagination::Remote {
        current_page,
        total_pages,
        ..
    } = pagination
    {
        Effect::new(move |_| {
            let (page, total) = (current_page.get(), total_pages.get());
            strategy.update(|s| s.sync_from_host(page, total));
        });
    }

    let page = Signal::derive(move || {
        let filter = applied.get();
        data.with(|rows| {
            strategy.with(|strategy| {
                specs.with_value(|specs| {
                    let window = strategy.window(rows, specs, &filter);
                    PageSnapshot {
                        pages: window.pages(),
                        has_prev: window.has_prev(),
                        has_next: window.has_next(),
                        current_page: window.current_page,
                        total_pages: window.total_pages,
                        row_count: window.row_count,
                        rows: window.rows.into_iter().cloned().collect(),
                    }
                })
            })
        })
    });

    let controls = Signal::derive(move || {
        data.with(|rows| {
            specs.with_value(|specs| {
                filter_options.with_value(|options| FilterControls::new(specs, rows, options))
            })
        })
    });

    let go_to_page = Callback::new(move |requested: usize| {
        let total = page.with_untracked(|p| p.total_pages);
        let Some(accepted) = strategy
            .try_update(|s| s.request_page(requested, total))
            .flatten()
        else {
            return;
        };
        log::debug!("CustomTable: page {} of {}", accepted, total);
        if let TablePagination::Remote { on_page_change, .. } = pagination {
            on_page_change.run(accepted);
        }
    });

    let on_apply = Callback::new(move |next: FilterState| {
        log::debug!("CustomTable: apply {} filter(s)", next.predicate_count());
        applied.set(next.clone());
        strategy.update(|s| {
            s.reset();
        });
        if let Some(callback) = on_filter_change {
            callback.run(next);
        }
    });

    let on_clear = Callback::new(move |_: ()| {
        log::debug!("CustomTable: clear filters");
        applied.set(FilterState::default());
        let first = strategy.try_update(|s| s.reset()).unwrap_or(1);
        if let Some(callback) = on_filter_change {
            callback.run(FilterState::default());
        }
        // Clear всегда возвращает на первую страницу, даже если хост уже там
        if let TablePagination::Remote { on_page_change, .. } = pagination {
            on_page_change.run(first);
        }
    });

    let show_count = matches!(pagination, TablePagination::Local { .. });

    view! {
        <div class="custom-table">
            <FilterCard
                controls=controls
                applied=applied
                on_apply=on_apply
                on_clear=on_clear
            />

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {columns.with_value(|cols| cols.iter().map(|column| {
                                let header = column.header().to_string();
                                view! { <TableHeaderCell>{header}</TableHeaderCell> }
                            }).collect_view())}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let snapshot = page.get();
                            if snapshot.rows.is_empty() {
                                return view! {
                                    <tr class="table__row table__row--empty">
                                        <td class="table__cell" colspan=column_count.to_string()>
                                            "No results found"
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }

                            let row_class = if on_action.is_some() { "table__row--clickable" } else { "" };
                            snapshot.rows.into_iter().map(|row| {
                                let cells = columns.with_value(|cols| cols.iter().map(|column| {
                                    let class = column.class_name.unwrap_or("");
                                    let content = column.render_cell(&row);
                                    view! {
                                        <TableCell class=class>
                                            <TableCellLayout>{content}</TableCellLayout>
                                        </TableCell>
                                    }
                                }).collect_view());

                                let row_for_click = row.clone();
                                view! {
                                    <TableRow
                                        class=row_class
                                        on:click=move |_| {
                                            if let Some(callback) = on_action {
                                                callback.run(row_for_click.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.current_page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                pages=Signal::derive(move || page.with(|p| p.pages.clone()))
                has_prev=Signal::derive(move || page.with(|p| p.has_prev))
                has_next=Signal::derive(move || page.with(|p| p.has_next))
                total_count=Signal::derive(move || page.with(|p| p.row_count))
                show_count=show_count
                on_page_change=go_to_page
            />
        </div>
    }
}
