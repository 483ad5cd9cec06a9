//! Состояние страницы: загрузка, фильтры, сортировка и пагинация.
//!
//! Each page instance creates its own state at mount and drops it on
//! navigation; nothing here is shared between pages or persisted.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::shared::pipeline::{
    FilterState, GroupDimension, SortState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};

// ============================================================================
// Load lifecycle
// ============================================================================

/// `Idle -> Loading -> Ready | Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Settles a finished fetch; the error text is prefixed for display.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Error(format!("Error loading data: {}", e)),
        }
    }
}

/// Generation counter that lets a page drop responses it no longer wants.
///
/// A fetch takes a ticket with [`LoadGeneration::begin`]; unmounting or a
/// newer fetch bumps the generation, and the old ticket stops being current.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

// ============================================================================
// List view state
// ============================================================================

/// Filter, sort and page cursor of one table.
///
/// Any change to the filter, sort or page size puts the cursor back on page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F> {
    pub filter: FilterState,
    pub sort: Option<SortState<F>>,
    /// 1-based; clamped against the row count when the page is cut.
    pub page: usize,
    pub page_size: usize,
}

impl<F: Copy + PartialEq> ListState<F> {
    pub fn new(filter: FilterState, sort: Option<SortState<F>>) -> Self {
        Self {
            filter,
            sort,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    pub fn update_filter(&mut self, f: impl FnOnce(&mut FilterState)) {
        let mut next = self.filter.clone();
        f(&mut next);
        self.set_filter(next);
    }

    pub fn request_sort(&mut self, key: F) {
        self.sort = Some(SortState::toggled(self.sort, key));
        self.page = 1;
    }

    /// Only sizes from [`PAGE_SIZE_OPTIONS`] are accepted.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }
}

/// List state of a grouped report plus its grouping dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedListState<F> {
    pub list: ListState<F>,
    pub group_by: GroupDimension,
}

impl<F: Copy + PartialEq> GroupedListState<F> {
    pub fn new(filter: FilterState) -> Self {
        Self {
            list: ListState::new(filter, None),
            group_by: GroupDimension::default(),
        }
    }

    pub fn set_group_by(&mut self, group_by: GroupDimension) {
        if self.group_by != group_by {
            self.group_by = group_by;
            self.list.page = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_order::SoField;
    use crate::shared::pipeline::{GroupField, SortDirection};

    fn list() -> ListState<SoField> {
        ListState::new(
            FilterState::for_year(2024),
            Some(SortState::descending(SoField::DateSoApproved)),
        )
    }

    #[test]
    fn test_defaults() {
        let state = list();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 15);
        assert_eq!(state.filter.year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_changes_reset_page() {
        let mut state = list();
        state.set_page(4);
        state.update_filter(|f| f.toggle_client("A"));
        assert_eq!(state.page, 1);

        state.set_page(3);
        state.request_sort(SoField::Client);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort.map(|s| s.direction), Some(SortDirection::Ascending));

        state.set_page(2);
        assert!(state.set_page_size(50));
        assert_eq!(state.page, 1);

        state.set_page(2);
        assert!(!state.set_page_size(7));
        assert_eq!(state.page, 2);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut state = list();
        state.set_page(3);
        state.set_filter(FilterState::for_year(2024));
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_page_navigation_bounds() {
        let mut state = list();
        state.previous_page();
        assert_eq!(state.page, 1);
        state.next_page(2);
        state.next_page(2);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_group_by_change_resets_page() {
        let mut state: GroupedListState<GroupField> = GroupedListState::new(FilterState::default());
        state.list.set_page(5);
        state.set_group_by(GroupDimension::Salesman);
        assert_eq!(state.list.page, 5);
        state.set_group_by(GroupDimension::Client);
        assert_eq!(state.list.page, 1);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        generation.invalidate();
        assert!(!generation.is_current(second));
    }

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u32> = LoadState::from_result(Ok::<_, String>(3));
        assert_eq!(ok.ready(), Some(&3));

        let err: LoadState<u32> = LoadState::from_result(Err("HTTP error! status: 500"));
        assert_eq!(err.error(), Some("Error loading data: HTTP error! status: 500"));
        assert!(LoadState::<u32>::Loading.ready().is_none());
    }
}
