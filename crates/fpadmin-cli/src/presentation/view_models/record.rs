use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use fpadmin_engine::{EditMode, FieldError, SortDirection};
use fpadmin_types::EntityKind;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RecordListViewModel<T: Serialize> {
    pub entity: EntityKind,
    pub label: &'static str,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub sort: SortSummary,
    pub filters: FilterSummary,
    pub records: Vec<T>,

    /// Text rendering of `records`; JSON carries the records themselves
    #[serde(skip)]
    pub table: RecordTable,
}

#[derive(Debug, Serialize)]
pub struct SortSummary {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// Filters as the operator gave them
#[derive(Debug, Default, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,
    #[serde(rename = "where", skip_serializing_if = "BTreeMap::is_empty")]
    pub selectors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.only.is_empty()
            && self.selectors.is_empty()
            && self.since.is_none()
            && self.until.is_none()
    }
}

#[derive(Debug, Default)]
pub struct RecordTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<RecordRow>,
}

#[derive(Debug)]
pub struct RecordRow {
    pub id: String,
    /// Values for `RecordTable::columns`, in order
    pub cells: Vec<String>,
    /// Every field, for verbose output
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Serialize)]
pub struct RecordDetailViewModel<T: Serialize> {
    pub entity: EntityKind,
    pub label: &'static str,
    pub id: String,
    pub record: T,
    pub references: Vec<ReferenceViewModel>,

    #[serde(skip)]
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceViewModel {
    pub field: &'static str,
    pub target: EntityKind,
    pub id: String,
    /// `null` when the target no longer exists
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Created,
    Updated,
    Deleted,
    /// Delete of an id that was not there
    Unchanged,
}

#[derive(Debug, Serialize)]
pub struct RecordWriteViewModel<T: Serialize> {
    pub action: WriteAction,
    pub entity: EntityKind,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,

    #[serde(skip)]
    pub fields: Vec<(&'static str, String)>,
}

/// Current state of a record as an editable draft
#[derive(Debug, Serialize)]
pub struct DraftViewModel<D: Serialize> {
    pub entity: EntityKind,
    pub id: String,
    pub draft: D,
}

#[derive(Debug, Serialize)]
pub struct ValidationFailureViewModel {
    pub entity: EntityKind,
    pub mode: EditMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub errors: Vec<FieldError>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl<T: Serialize> CreateView for RecordListViewModel<T> {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::RecordListView;
        Box::new(RecordListView::new(self, mode))
    }
}

impl<T: Serialize> CreateView for RecordDetailViewModel<T> {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::RecordDetailView;
        Box::new(RecordDetailView::new(self, mode))
    }
}

impl<T: Serialize> CreateView for RecordWriteViewModel<T> {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::RecordWriteView;
        Box::new(RecordWriteView::new(self, mode))
    }
}

impl<D: Serialize> CreateView for DraftViewModel<D> {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::DraftView;
        Box::new(DraftView::new(self))
    }
}

impl CreateView for ValidationFailureViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::ValidationFailureView;
        Box::new(ValidationFailureView::new(self))
    }
}
