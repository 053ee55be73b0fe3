use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::field::Queryable;
use crate::validation::{ValidationReport, Validator};

/// Which way the detail surface was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    Create,
    Edit,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Create => write!(f, "create"),
            EditMode::Edit => write!(f, "edit"),
        }
    }
}

/// A record that can be created and edited through a typed draft.
pub trait Editable: Queryable {
    type Draft: Clone + fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned;

    /// Record a create submission starts from: defaults everywhere, dates on `today`.
    fn blank(id: Self::Id, today: NaiveDate) -> Self;

    /// Draft pre-populated with every field of this record
    fn to_draft(&self) -> Self::Draft;

    /// Field-level checks on the submitted values alone
    fn check_draft(draft: &Self::Draft, v: &mut Validator);

    /// Merge submitted fields. Absent fields are kept; the id never changes.
    ///
    /// `today` stamps whatever the merge derives: completion dates, update
    /// dates, status history entries.
    fn apply(&mut self, draft: Self::Draft, today: NaiveDate);

    /// Cross-field checks on the merged record
    fn check_record(&self, _v: &mut Validator) {}
}

/// Validate `draft` against `base` and return the merged record.
///
/// `base` is the stored record in edit mode and [`Editable::blank`] in create
/// mode. Cross-field rules run on the merged result, so an edit that only
/// changes one side of a pair is still checked against the other.
pub fn validate_submission<T: Editable>(
    mode: EditMode,
    base: &T,
    draft: &T::Draft,
    today: NaiveDate,
) -> Result<T, ValidationReport> {
    let mut v = Validator::new(mode);
    T::check_draft(draft, &mut v);
    v.finish()?;

    let mut candidate = base.clone();
    candidate.apply(draft.clone(), today);

    let mut v = Validator::new(mode);
    candidate.check_record(&mut v);
    v.finish()?;

    Ok(candidate)
}
