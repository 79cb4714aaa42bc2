//! Пагинация таблицы: компактный список номеров страниц и две стратегии
//! (локальная и серверная), выбираемые один раз при создании таблицы.

use super::cell::DataRow;
use super::column::ColumnSpec;
use super::engine::apply_filters;
use super::filter_state::FilterState;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Элемент панели пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `count` rows (0 rows, 0 pages).
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1))
}

pub fn is_valid_page(page: usize, total_pages: usize) -> bool {
    page >= 1 && page <= total_pages
}

/// Компактный список номеров страниц с многоточиями.
///
/// Не больше пяти страниц показываются все; иначе первая и последняя
/// страницы видны всегда, а окно вокруг текущей отделено многоточием.
pub fn compact_page_numbers(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= 5 {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)]
    } else if current_page >= total_pages - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}

/// Видимое окно таблицы
#[derive(Debug)]
pub struct PageWindow<'a, R> {
    pub rows: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Rows the window was cut from: the filtered count in local mode,
    /// the rows supplied by the host in remote mode.
    pub row_count: usize,
}

impl<'a, R> PageWindow<'a, R> {
    /// Page buttons for this window, compacted with ellipses.
    pub fn pages(&self) -> Vec<PageItem> {
        compact_page_numbers(self.current_page, self.total_pages)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Strategy behind the table's page window.
pub trait PaginationStrategy<R: DataRow> {
    /// Computes the rows to render for the current page.
    fn window<'a>(
        &self,
        rows: &'a [R],
        columns: &[ColumnSpec],
        filter: &FilterState,
    ) -> PageWindow<'a, R>;

    fn current_page(&self) -> usize;

    /// Returns the accepted page, or `None` when `page` is outside
    /// `[1, total_pages]`.
    fn request_page(&mut self, page: usize, total_pages: usize) -> Option<usize>;

    /// Back to page 1; returns the page to report to the host.
    fn reset(&mut self) -> usize;

    /// Host-owned page state. Only the remote strategy listens.
    fn sync_from_host(&mut self, _current_page: usize, _total_pages: usize) {}

    fn filters_locally(&self) -> bool;
}

/// Локальная пагинация: таблица сама фильтрует, сортирует и режет массив.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPagination {
    items_per_page: usize,
    current_page: usize,
}

impl LocalPagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            current_page: 1,
        }
    }
}

impl Default for LocalPagination {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl<R: DataRow> PaginationStrategy<R> for LocalPagination {
    fn window<'a>(
        &self,
        rows: &'a [R],
        columns: &[ColumnSpec],
        filter: &FilterState,
    ) -> PageWindow<'a, R> {
        let filtered = apply_filters(rows, columns, filter);
        let row_count = filtered.len();
        let total = total_pages(row_count, self.items_per_page);
        // Data may shrink under the current page (refresh, new filter).
        let page = self.current_page.min(total.max(1));
        let start = (page - 1) * self.items_per_page;

        PageWindow {
            rows: filtered
                .into_iter()
                .skip(start)
                .take(self.items_per_page)
                .collect(),
            current_page: page,
            total_pages: total,
            row_count,
        }
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    fn request_page(&mut self, page: usize, total_pages: usize) -> Option<usize> {
        if !is_valid_page(page, total_pages) {
            return None;
        }
        self.current_page = page;
        Some(page)
    }

    fn reset(&mut self) -> usize {
        self.current_page = 1;
        1
    }

    fn filters_locally(&self) -> bool {
        true
    }
}

/// Серверная пагинация: страница и число страниц принадлежат хосту,
/// строки рендерятся как есть.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePagination {
    current_page: usize,
    total_pages: usize,
}

impl RemotePagination {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }
}

impl<R: DataRow> PaginationStrategy<R> for RemotePagination {
    fn window<'a>(
        &self,
        rows: &'a [R],
        _columns: &[ColumnSpec],
        _filter: &FilterState,
    ) -> PageWindow<'a, R> {
        PageWindow {
            rows: rows.iter().collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            row_count: rows.len(),
        }
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    /// The host owns the page: the mirror is only updated through
    /// `sync_from_host`.
    fn request_page(&mut self, page: usize, total_pages: usize) -> Option<usize> {
        is_valid_page(page, total_pages).then_some(page)
    }

    fn reset(&mut self) -> usize {
        1
    }

    fn sync_from_host(&mut self, current_page: usize, total_pages: usize) {
        self.current_page = current_page;
        self.total_pages = total_pages;
    }

    fn filters_locally(&self) -> bool {
        false
    }
}

/// Режим пагинации, фиксированный на всё время жизни таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    Local { items_per_page: usize },
    Remote { current_page: usize, total_pages: usize },
}

impl Default for PaginationMode {
    fn default() -> Self {
        PaginationMode::Local {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PaginationMode {
    pub fn into_strategy<R: DataRow + 'static>(self) -> Box<dyn PaginationStrategy<R> + Send + Sync> {
        match self {
            PaginationMode::Local { items_per_page } => Box::new(LocalPagination::new(items_per_page)),
            PaginationMode::Remote {
                current_page,
                total_pages,
            } => Box::new(RemotePagination::new(current_page, total_pages)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use PageItem::{Ellipsis, Page};

    fn numbered_rows(count: usize) -> Vec<Value> {
        (1..=count).map(|i| json!({ "id": i })).collect()
    }

    fn id_columns() -> Vec<ColumnSpec> {
        vec![ColumnSpec::field("id", "id")]
    }

    #[test]
    fn test_compaction_small_totals() {
        assert_eq!(compact_page_numbers(1, 0), Vec::<PageItem>::new());
        assert_eq!(compact_page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(
            compact_page_numbers(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_compaction_23_pages() {
        assert_eq!(
            compact_page_numbers(1, 23),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(23)]
        );
        assert_eq!(
            compact_page_numbers(12, 23),
            vec![Page(1), Ellipsis, Page(11), Page(12), Page(13), Ellipsis, Page(23)]
        );
        assert_eq!(
            compact_page_numbers(22, 23),
            vec![Page(1), Ellipsis, Page(20), Page(21), Page(22), Page(23)]
        );
    }

    #[test]
    fn test_compaction_boundaries() {
        assert_eq!(
            compact_page_numbers(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        assert_eq!(
            compact_page_numbers(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            compact_page_numbers(4, 7),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(7)]
        );
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_local_window_slices_current_page() {
        let rows = numbered_rows(23);
        let mut strategy = LocalPagination::new(10);

        let window = PaginationStrategy::<Value>::window(&strategy, &rows, &id_columns(), &FilterState::new());
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.row_count, 23);
        assert_eq!(window.rows.len(), 10);
        assert!(!window.has_prev());
        assert!(window.has_next());
        assert_eq!(window.pages(), vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]);

        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 3, 3), Some(3));
        let window = PaginationStrategy::<Value>::window(&strategy, &rows, &id_columns(), &FilterState::new());
        assert_eq!(window.rows.len(), 3);
        assert_eq!(window.rows[0]["id"], json!(21));
        assert!(!window.has_next());
    }

    #[test]
    fn test_local_request_page_bounds() {
        let mut strategy = LocalPagination::new(10);
        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 0, 3), None);
        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 4, 3), None);
        assert_eq!(PaginationStrategy::<Value>::current_page(&strategy), 1);

        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 2, 3), Some(2));
        assert_eq!(PaginationStrategy::<Value>::current_page(&strategy), 2);
        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 1, 0), None);
        assert_eq!(PaginationStrategy::<Value>::current_page(&strategy), 2);
    }

    #[test]
    fn test_local_reset_and_filtering() {
        let rows = numbered_rows(30);
        let mut strategy = LocalPagination::new(10);
        PaginationStrategy::<Value>::request_page(&mut strategy, 3, 3);

        // filtered down to a single page: the window clamps
        let filter = FilterState::new().with_column_filter("id", "2");
        let window = PaginationStrategy::<Value>::window(&strategy, &rows, &id_columns(), &filter);
        assert_eq!(window.row_count, 12); // 2, 12 and 20..=29
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.current_page, 2);

        assert_eq!(PaginationStrategy::<Value>::reset(&mut strategy), 1);
        assert_eq!(PaginationStrategy::<Value>::current_page(&strategy), 1);
        assert!(PaginationStrategy::<Value>::filters_locally(&strategy));
    }

    #[test]
    fn test_remote_window_renders_rows_as_given() {
        let rows = numbered_rows(10);
        let strategy = RemotePagination::new(3, 5);
        let filter = FilterState::new().with_column_filter("id", "nothing matches");

        let window = PaginationStrategy::<Value>::window(&strategy, &rows, &id_columns(), &filter);
        assert_eq!(window.rows.len(), 10);
        assert_eq!(window.current_page, 3);
        assert_eq!(window.total_pages, 5);
        assert!(!PaginationStrategy::<Value>::filters_locally(&strategy));
    }

    #[test]
    fn test_remote_page_requests_leave_host_state_alone() {
        let mut strategy = RemotePagination::new(3, 5);
        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 4, 5), Some(4));
        assert_eq!(PaginationStrategy::<Value>::request_page(&mut strategy, 6, 5), None);
        assert_eq!(PaginationStrategy::<Value>::current_page(&strategy), 3);

        PaginationStrategy::<Value>::sync_from_host(&mut strategy, 4, 7);
        assert_eq!(PaginationStrategy::<Value>::current_page(&strategy), 4);
        assert_eq!(PaginationStrategy::<Value>::reset(&mut strategy), 1);
    }

    #[test]
    fn test_mode_selects_strategy() {
        let local = PaginationMode::default().into_strategy::<Value>();
        assert!(local.filters_locally());

        let remote = PaginationMode::Remote {
            current_page: 2,
            total_pages: 4,
        }
        .into_strategy::<Value>();
        assert!(!remote.filters_locally());
        assert_eq!(remote.current_page(), 2);
    }
}
