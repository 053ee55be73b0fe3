use std::marker::PhantomData;
use std::num::NonZeroUsize;

use crate::field::{Lookup, Queryable};
use crate::filter::{DateRange, FilterSet, Selection};
use crate::paginate::{Page, page_count};
use crate::sort::{SortDirection, SortState, sort_records};

/// State of one list screen: filters, sort and the current page.
///
/// Every change to filters, sort or page size moves back to page 1; only
/// the navigation methods change the page.
#[derive(Debug, Clone)]
pub struct ListView<T: Queryable> {
    filters: FilterSet<T::Field>,
    sort: SortState<T::Field>,
    default_direction: SortDirection,
    page_size: NonZeroUsize,
    page: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T: Queryable> ListView<T> {
    pub fn new(page_size: NonZeroUsize, default_direction: SortDirection) -> Self {
        Self {
            filters: FilterSet::new(),
            sort: SortState::new(T::DEFAULT_SORT, default_direction),
            default_direction,
            page_size,
            page: 1,
            _record: PhantomData,
        }
    }

    pub fn filters(&self) -> &FilterSet<T::Field> {
        &self.filters
    }

    pub fn sort(&self) -> &SortState<T::Field> {
        &self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.set_search(term);
        self.page = 1;
    }

    pub fn set_selection(&mut self, field: T::Field, selection: Selection) {
        self.filters.set_selection(field, selection);
        self.page = 1;
    }

    pub fn set_flag(&mut self, field: T::Field, on: bool) {
        self.filters.set_flag(field, on);
        self.page = 1;
    }

    pub fn set_date_range(&mut self, from: Option<String>, to: Option<String>) {
        let range = T::DATE_FIELD.map(|field| DateRange { field, from, to });
        self.filters.set_date_range(range);
        self.page = 1;
    }

    /// Replace all filters at once
    pub fn set_filters(&mut self, filters: FilterSet<T::Field>) {
        self.filters = filters;
        self.page = 1;
    }

    /// Click on a column header
    pub fn select_sort(&mut self, key: T::Field) {
        self.sort.select(key, self.default_direction);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortState<T::Field>) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Jump to a page; no clamping, so a page past the end renders empty.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Advance one page, staying put on the last one.
    pub fn next(&mut self, records: &[T], lookup: &dyn Lookup) {
        let matched = self.filters.apply(records, lookup).len();
        let last = page_count(matched, self.page_size).max(1);
        if self.page < last {
            self.page += 1;
        }
    }

    /// Current page of `records`; joined columns resolve through `lookup`.
    pub fn render<'a>(&self, records: &'a [T], lookup: &dyn Lookup) -> Page<&'a T> {
        let mut matched = self.filters.apply(records, lookup);
        sort_records(&mut matched, &self.sort, lookup);
        crate::paginate::paginate(&matched, self.page, self.page_size)
    }
}
