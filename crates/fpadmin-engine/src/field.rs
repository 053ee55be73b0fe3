use chrono::{NaiveDate, NaiveDateTime};
use fpadmin_types::{Choice, Fp, FpId, Partner, PartnerId, Record, User, UserId};
use std::fmt;
use std::hash::Hash;

/// Named, addressable field of a queryable record.
pub trait FieldKey: Copy + Eq + Hash + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Look a field up by name; `-` and `_` are interchangeable.
    fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(&normalized))
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $field:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::field::FieldKey for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $field),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::field::FieldKey::name(*self))
            }
        }
    };
}

pub(crate) use field_enum;

/// Borrowed value of one field, typed for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choice {
        label: &'static str,
        key: &'static str,
    },
    Number(f64),
    /// Progress shown as `done/total`
    Fraction {
        done: u32,
        total: u32,
    },
    Date(NaiveDate),
    /// Tags such as consultation topics; empty lists read as missing
    List(&'a [String]),
    /// Minute-precision timestamp; date range filters look at its date
    Timestamp(NaiveDateTime),
    Flag(bool),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn choice<C: Choice>(value: C) -> Self {
        FieldValue::Choice {
            label: value.label(),
            key: value.key(),
        }
    }

    pub fn optional_text(value: Option<&'a str>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => FieldValue::Text(s),
            _ => FieldValue::Missing,
        }
    }

    pub fn list(items: &'a [String]) -> Self {
        if items.is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::List(items)
        }
    }

    pub fn number(value: impl Into<f64>) -> Self {
        FieldValue::Number(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Case-insensitive substring match; `needle` must already be lowercase.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            FieldValue::Choice { label, key } => {
                label.to_lowercase().contains(needle) || key.contains(needle)
            }
            FieldValue::List(items) => items.iter().any(|i| i.to_lowercase().contains(needle)),
            FieldValue::Number(_)
            | FieldValue::Fraction { .. }
            | FieldValue::Date(_)
            | FieldValue::Timestamp(_) => self.to_string().contains(needle),
            FieldValue::Flag(_) | FieldValue::Missing => false,
        }
    }

    /// Exact match used by enum selectors: labels match verbatim, keys
    /// case-insensitively.
    pub(crate) fn matches_exactly(&self, expected: &str) -> bool {
        let expected = expected.trim();
        match self {
            FieldValue::Choice { label, key } => {
                *label == expected || key.eq_ignore_ascii_case(&expected.replace('-', "_"))
            }
            FieldValue::Text(s) => *s == expected,
            FieldValue::List(items) => items.iter().any(|i| i == expected),
            FieldValue::Flag(b) => expected.parse::<bool>().map(|e| e == *b).unwrap_or(false),
            FieldValue::Number(_)
            | FieldValue::Fraction { .. }
            | FieldValue::Date(_)
            | FieldValue::Timestamp(_) => self.to_string() == expected,
            FieldValue::Missing => false,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Choice { label, .. } => write!(f, "{}", label),
            FieldValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            FieldValue::Number(n) => write!(f, "{:.1}", n),
            FieldValue::Fraction { done, total } => write!(f, "{}/{}", done, total),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M")),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            FieldValue::Flag(true) => write!(f, "yes"),
            FieldValue::Flag(false) => write!(f, "no"),
            FieldValue::Missing => write!(f, "-"),
        }
    }
}

/// Access to the records other records point at.
///
/// List views show and search columns joined through foreign keys (the FP
/// name on an allocation, the reviewer's name on a review). The store answers
/// these lookups; a record on its own answers through [`Detached`].
pub trait Lookup {
    fn user(&self, id: &UserId) -> Option<&User>;
    fn fp(&self, id: &FpId) -> Option<&Fp>;
    fn partner(&self, id: &PartnerId) -> Option<&Partner>;
}

/// Lookup with nothing behind it: every joined column reads as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl Lookup for Detached {
    fn user(&self, _id: &UserId) -> Option<&User> {
        None
    }

    fn fp(&self, _id: &FpId) -> Option<&Fp> {
        None
    }

    fn partner(&self, _id: &PartnerId) -> Option<&Partner> {
        None
    }
}

/// A record that can be listed, filtered and sorted by named fields.
///
/// The associated constants describe which fields each list view exposes:
/// free-text search targets, the status selector, derived boolean toggles
/// and the date used for range filtering.
pub trait Queryable: Record {
    type Field: FieldKey;

    /// Fields consulted by free-text search
    const SEARCH_FIELDS: &'static [Self::Field];
    /// Fields offered as sort keys
    const SORTABLE: &'static [Self::Field];
    /// Columns shown in one-line listings
    const SUMMARY_FIELDS: &'static [Self::Field];
    const STATUS_FIELD: Option<Self::Field>;
    /// Derived boolean fields usable as "only show ..." toggles
    const FLAG_FIELDS: &'static [Self::Field];
    const DATE_FIELD: Option<Self::Field>;
    const DEFAULT_SORT: Self::Field;

    /// Value of `field`; joined columns resolve their target through `lookup`.
    fn field<'a>(&'a self, field: Self::Field, lookup: &'a dyn Lookup) -> FieldValue<'a>;
}
