use contracts::shared::data_table::{FilterState, DEFAULT_ITEMS_PER_PAGE};
use contracts::shared::list::PageMeta;
use leptos::prelude::*;

/// Состояние списка заявок: страница и фильтры живут здесь, а не в таблице,
/// потому что фильтрация и пагинация серверные.
#[derive(Clone, Debug, PartialEq)]
pub struct JobListState {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub filter: FilterState,
    /// Номер последнего запущенного запроса
    pub request_seq: u64,
}

impl Default for JobListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_ITEMS_PER_PAGE,
            total_pages: 0,
            filter: FilterState::default(),
            request_seq: 0,
        }
    }
}

impl JobListState {
    /// New filters always start from page 1.
    pub fn apply_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.page = 1;
    }

    /// Returns `true` when the page actually changed and a refetch is due.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Starts a new request and returns its number.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Ответ устарел, если после него был запущен ещё один запрос.
    pub fn is_latest(&self, request: u64) -> bool {
        request == self.request_seq
    }

    pub fn accept_meta(&mut self, meta: &PageMeta) {
        self.page = meta.page.max(1);
        self.total_pages = meta.total_pages;
    }
}

pub fn create_state() -> RwSignal<JobListState> {
    RwSignal::new(JobListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_filter_resets_page() {
        let mut state = JobListState {
            page: 4,
            total_pages: 7,
            ..Default::default()
        };
        state.apply_filter(FilterState::new().with_status("Pending"));
        assert_eq!(state.page, 1);
        assert_eq!(state.filter.status_filter, "Pending");
    }

    #[test]
    fn test_clear_sequence_fetches_once() {
        // Clear: сначала пустой фильтр (страница 1), затем запрос страницы 1
        let mut state = JobListState {
            page: 3,
            ..Default::default()
        };
        state.apply_filter(FilterState::default());
        assert!(!state.go_to_page(1));
        assert!(state.go_to_page(2));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_only_latest_response_is_current() {
        let mut state = JobListState::default();
        let slow = state.begin_request();
        state.go_to_page(2);
        let fast = state.begin_request();

        assert!(state.is_latest(fast));
        assert!(!state.is_latest(slow));
    }

    #[test]
    fn test_accept_meta() {
        let mut state = JobListState::default();
        state.accept_meta(&PageMeta {
            page: 2,
            total_pages: 5,
            total: Some(48),
        });
        assert_eq!((state.page, state.total_pages), (2, 5));
    }
}
