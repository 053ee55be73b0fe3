use serde::Serialize;

use crate::args::hints;
use crate::presentation::view_models::{
    CommandResultViewModel, DraftViewModel, FilterSummary, Guidance, RecordDetailViewModel,
    RecordListViewModel, RecordRow, RecordTable, RecordWriteViewModel, ReferenceViewModel,
    SortSummary, StatusBadge, ValidationFailureViewModel, WriteAction,
};
use fpadmin_engine::{EditMode, FieldKey, Lookup, Queryable, ValidationReport};
use fpadmin_runtime::{ListRequest, Listing, RecordDetail};
use fpadmin_types::{EntityKind, Record, RecordKey};

fn summary_cells<T: Queryable>(record: &T, lookup: &dyn Lookup) -> Vec<String> {
    T::SUMMARY_FIELDS
        .iter()
        .map(|&f| record.field(f, lookup).to_string())
        .collect()
}

fn all_fields<T: Queryable>(record: &T, lookup: &dyn Lookup) -> Vec<(&'static str, String)> {
    <T::Field as FieldKey>::ALL
        .iter()
        .map(|&f| (f.name(), record.field(f, lookup).to_string()))
        .collect()
}

pub fn present_list<T>(
    listing: Listing<T>,
    request: &ListRequest,
    lookup: &dyn Lookup,
) -> CommandResultViewModel<RecordListViewModel<T>>
where
    T: Queryable + Serialize,
{
    let page = listing.page;
    let kind = T::KIND;

    let table = RecordTable {
        columns: T::SUMMARY_FIELDS.iter().map(|f| f.name()).collect(),
        rows: page
            .items
            .iter()
            .map(|record| RecordRow {
                id: record.id().as_str().to_string(),
                cells: summary_cells(record, lookup),
                fields: all_fields(record, lookup),
            })
            .collect(),
    };

    let filters = FilterSummary {
        search: request.search.clone(),
        status: request.status.clone(),
        only: request.only.clone(),
        selectors: request.selectors.iter().cloned().collect(),
        since: request.since.clone(),
        until: request.until.clone(),
    };

    let is_empty_state = page.is_empty_state();
    let past_end = !is_empty_state && page.items.is_empty();
    let has_next = page.has_next();
    let page_number = page.page_number;
    let page_count = page.page_count;
    let total_count = page.total_count;
    let filtered = !filters.is_empty();

    let content = RecordListViewModel {
        entity: kind,
        label: kind.label(),
        total_count,
        page: page_number,
        page_size: page.page_size,
        page_count,
        sort: SortSummary {
            key: listing.sort,
            direction: listing.direction,
        },
        filters,
        records: page.items,
        table,
    };

    let mut result = CommandResultViewModel::new(content);

    if is_empty_state {
        result = result.with_badge(StatusBadge::info(if filtered {
            format!("No {} records match the filters", kind)
        } else {
            format!("No {} records yet", kind)
        }));
        result = if filtered {
            result.with_suggestion(
                Guidance::new("Clear the filters to see every record")
                    .with_command(hints::fmt::list(kind)),
            )
        } else {
            result.with_suggestion(
                Guidance::new("Create the first record").with_command(hints::fmt::create(kind)),
            )
        };
    } else if past_end {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Page {} is past the last page ({})",
                page_number, page_count
            )))
            .with_suggestion(
                Guidance::new("Go back to the first page")
                    .with_command(hints::fmt::list_page(kind, 1)),
            );
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} {} record(s), page {} of {}",
            total_count, kind, page_number, page_count
        )));
        if has_next {
            result = result.with_suggestion(
                Guidance::new(format!("{} more page(s)", page_count - page_number))
                    .with_command(hints::fmt::list_page(kind, page_number + 1)),
            );
        }
    }

    result
}

pub fn present_detail<T>(
    detail: RecordDetail<T>,
    lookup: &dyn Lookup,
) -> CommandResultViewModel<RecordDetailViewModel<T>>
where
    T: Queryable + Serialize,
{
    let kind = T::KIND;
    let id = detail.record.id().as_str().to_string();
    let fields = all_fields(&detail.record, lookup);

    let references: Vec<ReferenceViewModel> = detail
        .references
        .into_iter()
        .map(|r| {
            let error = match r.name {
                Some(_) => None,
                None => Some(format!("{} not found: {}", r.key.target, r.key.id)),
            };
            ReferenceViewModel {
                field: r.key.field,
                target: r.key.target,
                id: r.key.id,
                name: r.name,
                error,
            }
        })
        .collect();

    let unresolved = references.iter().filter(|r| r.name.is_none()).count();

    let content = RecordDetailViewModel {
        entity: kind,
        label: kind.label(),
        id: id.clone(),
        record: detail.record,
        references,
        fields,
    };

    let mut result = CommandResultViewModel::new(content);
    if unresolved > 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} reference(s) could not be resolved",
            unresolved
        )));
    }

    result.with_suggestion(
        Guidance::new("Edit this record").with_command(hints::fmt::edit(kind, &id)),
    )
}

pub fn present_written<T>(
    action: WriteAction,
    record: T,
    lookup: &dyn Lookup,
) -> CommandResultViewModel<RecordWriteViewModel<T>>
where
    T: Queryable + Serialize,
{
    let kind = T::KIND;
    let id = record.id().as_str().to_string();
    let fields = all_fields(&record, lookup);

    let badge = StatusBadge::success(format!(
        "{} {} {}",
        match action {
            WriteAction::Created => "Created",
            WriteAction::Updated => "Updated",
            WriteAction::Deleted => "Deleted",
            WriteAction::Unchanged => "Unchanged",
        },
        kind,
        id
    ));

    let suggestion = match action {
        WriteAction::Deleted | WriteAction::Unchanged => {
            Guidance::new("Back to the list").with_command(hints::fmt::list(kind))
        }
        WriteAction::Created | WriteAction::Updated => {
            Guidance::new("Show the record").with_command(hints::fmt::show(kind, &id))
        }
    };

    CommandResultViewModel::new(RecordWriteViewModel {
        action,
        entity: kind,
        id,
        record: Some(record),
        fields,
    })
    .with_badge(badge)
    .with_suggestion(suggestion)
}

/// Deleting an id that is not there changes nothing.
pub fn present_nothing_deleted<T>(
    kind: EntityKind,
    id: &str,
) -> CommandResultViewModel<RecordWriteViewModel<T>>
where
    T: Serialize,
{
    CommandResultViewModel::new(RecordWriteViewModel {
        action: WriteAction::Unchanged,
        entity: kind,
        id: id.to_string(),
        record: None,
        fields: Vec::new(),
    })
    .with_badge(StatusBadge::info(format!(
        "No {} {}; nothing deleted",
        kind, id
    )))
    .with_suggestion(Guidance::new("Back to the list").with_command(hints::fmt::list(kind)))
}

pub fn present_draft<D>(kind: EntityKind, id: &str, draft: D) -> CommandResultViewModel<DraftViewModel<D>>
where
    D: Serialize,
{
    CommandResultViewModel::new(DraftViewModel {
        entity: kind,
        id: id.to_string(),
        draft,
    })
    .with_badge(StatusBadge::info(format!("Current values of {} {}", kind, id)))
    .with_suggestion(
        Guidance::new("Submit the fields to change").with_command(hints::fmt::edit(kind, id)),
    )
}

pub fn present_validation_failure(
    kind: EntityKind,
    mode: EditMode,
    id: Option<&str>,
    report: &ValidationReport,
) -> CommandResultViewModel<ValidationFailureViewModel> {
    let count = report.errors.len();
    let mut result = CommandResultViewModel::new(ValidationFailureViewModel {
        entity: kind,
        mode,
        id: id.map(str::to_string),
        errors: report.errors.clone(),
    })
    .with_badge(StatusBadge::error(format!(
        "{} {} rejected: {} field error(s)",
        mode, kind, count
    )));

    if let Some(id) = id {
        result = result.with_suggestion(
            Guidance::new("See the current values").with_command(format!(
                "fpadmin {} edit {}",
                hints::entity(kind),
                id
            )),
        );
    }

    result
}
