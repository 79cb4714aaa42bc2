//! Движок универсальной таблицы списков.
//!
//! Используется всеми страницами списков (клиенты, техники, товары,
//! запчасти, заявки, отчёты). Не зависит от UI и целевой платформы:
//! frontend только рендерит то, что здесь посчитано.

pub mod cell;
pub mod column;
pub mod engine;
pub mod filter_controls;
pub mod filter_state;
pub mod pagination;

pub use cell::{cell_from_json, CellValue, DataRow};
pub use column::{
    derive_key, find_id_column, find_status_column, find_type_column, resolve_data_key,
    ColumnKey, ColumnSpec,
};
pub use engine::{apply_filters, compare_for_sort, sort_rows};
pub use filter_controls::{distinct_values, FilterControls, FilterOptions};
pub use filter_state::{ColumnFilter, FilterState, SortDirection};
pub use pagination::{
    compact_page_numbers, is_valid_page, total_pages, LocalPagination, PageItem, PageWindow,
    PaginationMode, PaginationStrategy, RemotePagination, DEFAULT_ITEMS_PER_PAGE,
};
