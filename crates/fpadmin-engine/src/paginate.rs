use serde::Serialize;
use std::num::NonZeroUsize;

/// Page sizes offered when nothing else is configured
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [30, 50, 100];

/// Number of pages needed for `total` items; zero for an empty collection.
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// One page of a filtered and sorted collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page_number: usize,
    pub page_size: usize,
    /// Matching records across all pages
    pub total_count: usize,
    pub page_count: usize,
}

impl<T> Page<T> {
    /// Nothing matched at all (as opposed to a page past the end)
    pub fn is_empty_state(&self) -> bool {
        self.total_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.page_count
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            page_count: self.page_count,
        }
    }
}

/// Slice `items` into the requested 1-based page.
///
/// Page 0 is read as page 1. A page beyond the last yields no items.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<T> {
    let page_number = page.max(1);
    let size = page_size.get();
    let start = (page_number - 1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page_number,
        page_size: size,
        total_count: items.len(),
        page_count: page_count(items.len(), page_size),
    }
}
