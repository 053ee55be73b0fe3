use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fpadmin_types::{Record, RecordKey};

use crate::field::{FieldKey, FieldValue, Lookup, Queryable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("Unknown sort direction: '{}'", other)),
        }
    }
}

/// The single active sort key of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub key: F,
    pub direction: SortDirection,
}

impl<F: FieldKey> SortState<F> {
    pub fn new(key: F, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click semantics: the active key flips direction, any other key
    /// becomes active with `default_direction`.
    pub fn select(&mut self, key: F, default_direction: SortDirection) {
        if self.key == key {
            self.direction = self.direction.toggle();
        } else {
            self.key = key;
            self.direction = default_direction;
        }
    }
}

/// Ascending order of two field values. `Missing` sorts first.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Less,
        (_, FieldValue::Missing) => Ordering::Greater,
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x.cmp(y),
        (
            FieldValue::Fraction { done: a, total: t },
            FieldValue::Fraction { done: b, total: u },
        ) => fraction_ratio(*a, *t)
            .total_cmp(&fraction_ratio(*b, *u))
            .then(a.cmp(b))
            .then(t.cmp(u)),
        (FieldValue::Flag(x), FieldValue::Flag(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Choice { label: x, .. }, FieldValue::Choice { label: y, .. }) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// An empty quota counts as zero progress.
fn fraction_ratio(done: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(done) / f64::from(total)
    }
}

/// Sort filtered records in place.
///
/// Equal keys fall back to id ascending regardless of direction, so the
/// result does not depend on the input order.
pub fn sort_records<T: Queryable>(
    records: &mut [&T],
    sort: &SortState<T::Field>,
    lookup: &dyn Lookup,
) {
    records.sort_by(|a, b| {
        let primary = compare_values(&a.field(sort.key, lookup), &b.field(sort.key, lookup));
        let primary = match sort.direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };
        primary.then_with(|| Record::id(*a).as_str().cmp(Record::id(*b).as_str()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_sorts_first() {
        let date = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(compare_values(&FieldValue::Missing, &date), Ordering::Less);
        assert_eq!(compare_values(&date, &FieldValue::Missing), Ordering::Greater);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(
            compare_values(&FieldValue::Number(9.0), &FieldValue::Number(10.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_fractions_compare_by_progress() {
        let half = FieldValue::Fraction { done: 2, total: 4 };
        let most = FieldValue::Fraction { done: 4, total: 5 };
        let empty = FieldValue::Fraction { done: 0, total: 0 };
        assert_eq!(compare_values(&half, &most), Ordering::Less);
        assert_eq!(compare_values(&empty, &half), Ordering::Less);
    }

    #[test]
    fn test_direction_parse_and_toggle() {
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(
            SortDirection::Descending.toggle().toggle(),
            SortDirection::Descending
        );
    }
}
