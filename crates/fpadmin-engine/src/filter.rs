use chrono::NaiveDate;
use fpadmin_types::parse_date;

use crate::field::{FieldKey, FieldValue, Lookup, Queryable};

/// Value of an enum selector. `All` is the "すべて" entry that disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Blank input, `all` and `すべて` all mean no filtering.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") || trimmed == "すべて" {
            Selection::All
        } else {
            Selection::Only(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumFilter<F> {
    pub field: F,
    pub selection: Selection,
}

/// Inclusive date bounds on one field. Bounds are kept as entered; a bound
/// that does not parse counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange<F> {
    pub field: F,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl<F: FieldKey> DateRange<F> {
    pub fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (
            self.from.as_deref().and_then(parse_date),
            self.to.as_deref().and_then(parse_date),
        )
    }

    pub fn is_active(&self) -> bool {
        let (from, to) = self.bounds();
        from.is_some() || to.is_some()
    }

    fn admits(&self, value: &FieldValue<'_>) -> bool {
        let (from, to) = self.bounds();
        if from.is_none() && to.is_none() {
            return true;
        }

        // Records without a date never fall inside an active range.
        let date = match value {
            FieldValue::Date(date) => *date,
            FieldValue::Timestamp(at) => at.date(),
            _ => return false,
        };

        from.is_none_or(|f| date >= f) && to.is_none_or(|t| date <= t)
    }
}

/// Active filter criteria of a list view, combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet<F> {
    pub search: Option<String>,
    pub enums: Vec<EnumFilter<F>>,
    pub flags: Vec<F>,
    pub date_range: Option<DateRange<F>>,
}

impl<F> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            search: None,
            enums: Vec::new(),
            flags: Vec::new(),
            date_range: None,
        }
    }
}

impl<F: FieldKey> FilterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn select(mut self, field: F, selection: Selection) -> Self {
        self.set_selection(field, selection);
        self
    }

    pub fn flag(mut self, field: F) -> Self {
        self.set_flag(field, true);
        self
    }

    pub fn date_range(mut self, field: F, from: Option<String>, to: Option<String>) -> Self {
        self.date_range = Some(DateRange { field, from, to });
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
    }

    /// Replace the selector on `field`; `All` removes it.
    pub fn set_selection(&mut self, field: F, selection: Selection) {
        self.enums.retain(|e| e.field != field);
        if !selection.is_all() {
            self.enums.push(EnumFilter { field, selection });
        }
    }

    pub fn set_flag(&mut self, field: F, on: bool) {
        self.flags.retain(|f| *f != field);
        if on {
            self.flags.push(field);
        }
    }

    pub fn set_date_range(&mut self, range: Option<DateRange<F>>) {
        self.date_range = range;
    }

    /// True when no predicate restricts the collection
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.enums.is_empty()
            && self.flags.is_empty()
            && self.date_range.as_ref().is_none_or(|r| !r.is_active())
    }

    pub fn matches<T>(&self, record: &T, lookup: &dyn Lookup) -> bool
    where
        T: Queryable<Field = F>,
    {
        if let Some(term) = &self.search {
            let needle = term.trim().to_lowercase();
            let hit = T::SEARCH_FIELDS
                .iter()
                .any(|f| record.field(*f, lookup).contains_lowercase(&needle));
            if !hit {
                return false;
            }
        }

        let enums_hold = self.enums.iter().all(|e| match &e.selection {
            Selection::All => true,
            Selection::Only(expected) => record.field(e.field, lookup).matches_exactly(expected),
        });
        if !enums_hold {
            return false;
        }

        let flags_hold = self
            .flags
            .iter()
            .all(|f| matches!(record.field(*f, lookup), FieldValue::Flag(true)));
        if !flags_hold {
            return false;
        }

        match &self.date_range {
            Some(range) => range.admits(&record.field(range.field, lookup)),
            None => true,
        }
    }

    /// Subset of `records` that satisfies every active predicate, in input order.
    pub fn apply<'a, T>(&self, records: &'a [T], lookup: &dyn Lookup) -> Vec<&'a T>
    where
        T: Queryable<Field = F>,
    {
        records
            .iter()
            .filter(|r| self.matches(*r, lookup))
            .collect()
    }
}
