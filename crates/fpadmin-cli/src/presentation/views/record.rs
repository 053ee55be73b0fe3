use serde::Serialize;
use std::fmt;

use crate::presentation::formatters::{display_width, pad, truncate};
use crate::presentation::view_models::{
    DraftViewModel, RecordDetailViewModel, RecordListViewModel, RecordWriteViewModel,
    ValidationFailureViewModel, ViewMode, WriteAction,
};

const MAX_CELL: usize = 32;

fn write_fields(f: &mut fmt::Formatter, fields: &[(&'static str, String)]) -> fmt::Result {
    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in fields {
        writeln!(f, "  {:<width$}  {}", name, value, width = width)?;
    }
    Ok(())
}

// --------------------------------------------------------
// Record List View
// --------------------------------------------------------

pub struct RecordListView<'a, T: Serialize> {
    data: &'a RecordListViewModel<T>,
    mode: ViewMode,
}

impl<'a, T: Serialize> RecordListView<'a, T> {
    pub fn new(data: &'a RecordListViewModel<T>, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let table = &self.data.table;
        let cells: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|c| truncate(c, MAX_CELL)).collect())
            .collect();

        let widths: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                cells
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .chain(std::iter::once(column.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = table
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &w)| pad(&column.to_uppercase(), w))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;
        writeln!(f, "{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)))?;

        for row in &cells {
            let line: Vec<String> = row.iter().zip(&widths).map(|(c, &w)| pad(c, w)).collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }
        Ok(())
    }
}

impl<'a, T: Serialize> fmt::Display for RecordListView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        if self.mode == ViewMode::Minimal {
            for row in &data.table.rows {
                writeln!(f, "{}", row.id)?;
            }
            return Ok(());
        }

        if data.table.rows.is_empty() {
            if data.total_count == 0 {
                writeln!(f, "No {} found.", data.label)?;
            }
            return Ok(());
        }

        match self.mode {
            ViewMode::Compact => {
                for row in &data.table.rows {
                    let rest: Vec<String> =
                        row.cells.iter().skip(1).map(|c| truncate(c, MAX_CELL)).collect();
                    writeln!(f, "{}  {}", row.id, rest.join("  "))?;
                }
            }
            ViewMode::Verbose => {
                for (i, row) in data.table.rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "[{}]", row.id)?;
                    write_fields(f, &row.fields)?;
                }
            }
            ViewMode::Standard | ViewMode::Minimal => self.render_table(f)?,
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}: page {}/{} ({} per page), {} matching, sorted by {} {}",
            data.label,
            data.page,
            data.page_count,
            data.page_size,
            data.total_count,
            data.sort.key,
            data.sort.direction
        )
    }
}

// --------------------------------------------------------
// Record Detail View
// --------------------------------------------------------

pub struct RecordDetailView<'a, T: Serialize> {
    data: &'a RecordDetailViewModel<T>,
    mode: ViewMode,
}

impl<'a, T: Serialize> RecordDetailView<'a, T> {
    pub fn new(data: &'a RecordDetailViewModel<T>, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a, T: Serialize> fmt::Display for RecordDetailView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", data.id);
        }

        writeln!(f, "{} {}", data.label, data.id)?;
        write_fields(f, &data.fields)?;

        if !data.references.is_empty() {
            writeln!(f)?;
            writeln!(f, "References:")?;
            for reference in &data.references {
                match (&reference.name, &reference.error) {
                    (Some(name), _) => writeln!(
                        f,
                        "  {} -> {} {} ({})",
                        reference.field, reference.target, reference.id, name
                    )?,
                    (None, Some(error)) => {
                        writeln!(f, "  warning: {}: {}", reference.field, error)?
                    }
                    (None, None) => writeln!(
                        f,
                        "  warning: {}: {} {} is missing",
                        reference.field, reference.target, reference.id
                    )?,
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Write Result View
// --------------------------------------------------------

pub struct RecordWriteView<'a, T: Serialize> {
    data: &'a RecordWriteViewModel<T>,
    mode: ViewMode,
}

impl<'a, T: Serialize> RecordWriteView<'a, T> {
    pub fn new(data: &'a RecordWriteViewModel<T>, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a, T: Serialize> fmt::Display for RecordWriteView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        match (self.mode, data.action) {
            (ViewMode::Minimal, _) => writeln!(f, "{}", data.id),
            (_, WriteAction::Unchanged | WriteAction::Deleted) => Ok(()),
            _ => write_fields(f, &data.fields),
        }
    }
}

// --------------------------------------------------------
// Draft View
// --------------------------------------------------------

pub struct DraftView<'a, D: Serialize> {
    data: &'a DraftViewModel<D>,
}

impl<'a, D: Serialize> DraftView<'a, D> {
    pub fn new(data: &'a DraftViewModel<D>) -> Self {
        Self { data }
    }
}

impl<'a, D: Serialize> fmt::Display for DraftView<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self.data.draft).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", json)
    }
}

// --------------------------------------------------------
// Validation Failure View
// --------------------------------------------------------

pub struct ValidationFailureView<'a> {
    data: &'a ValidationFailureViewModel,
}

impl<'a> ValidationFailureView<'a> {
    pub fn new(data: &'a ValidationFailureViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ValidationFailureView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .data
            .errors
            .iter()
            .map(|e| e.field.len())
            .max()
            .unwrap_or(0);
        for error in &self.data.errors {
            writeln!(f, "  {:<width$}  {}", error.field, error.kind, width = width)?;
        }
        Ok(())
    }
}
