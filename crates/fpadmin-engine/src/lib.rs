// Engine module - record querying and edit validation
// Sits between the record types and the store; never performs I/O and never fails.
//
// A list view runs three stages in a fixed order:
//   filter (AND of active predicates) -> sort (one key, id tie-break) -> paginate
// Any change to the first two stages or to the page size sends the view back to page 1.

pub mod edit;
pub mod entities;
pub mod field;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod validation;
pub mod view;

pub use edit::{EditMode, Editable, validate_submission};
pub use entities::*;
pub use field::{Detached, FieldKey, FieldValue, Lookup, Queryable};
pub use filter::{DateRange, EnumFilter, FilterSet, Selection};
pub use paginate::{DEFAULT_PAGE_SIZE_OPTIONS, Page, page_count, paginate};
pub use sort::{SortDirection, SortState, compare_values, sort_records};
pub use validation::{FieldError, ValidationReport, Validator, ViolationKind};
pub use view::ListView;

use std::num::NonZeroUsize;

/// Run filter, sort and pagination in one pass.
pub fn query<'a, T: Queryable>(
    records: &'a [T],
    filters: &FilterSet<T::Field>,
    sort: &SortState<T::Field>,
    page: usize,
    page_size: NonZeroUsize,
    lookup: &dyn Lookup,
) -> Page<&'a T> {
    let mut matched = filters.apply(records, lookup);
    sort_records(&mut matched, sort, lookup);
    paginate(&matched, page, page_size)
}
