pub mod common;
pub mod record;
pub mod result;
pub mod system;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use record::{
    DraftViewModel, FilterSummary, RecordDetailViewModel, RecordListViewModel, RecordRow,
    RecordTable, RecordWriteViewModel, ReferenceViewModel, SortSummary,
    ValidationFailureViewModel, WriteAction,
};
pub use result::CommandResultViewModel;
pub use system::ConfigViewModel;

/// Bridge from a view model to the text view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
