use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use fpadmin_types::{EntityKind, parse_date, parse_datetime};

use crate::edit::EditMode;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9-]{8,14}$").unwrap());

/// What is wrong with one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    InvalidFormat { expected: &'static str },
    OutOfRange { min: f64, max: f64 },
    /// Must not come after `other`
    OutOfOrder { other: &'static str },
    UnknownReference { target: EntityKind, id: String },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Required => write!(f, "is required"),
            ViolationKind::InvalidFormat { expected } => write!(f, "must be a valid {}", expected),
            ViolationKind::OutOfRange { min, max } => {
                write!(f, "must be between {} and {}", min, max)
            }
            ViolationKind::OutOfOrder { other } => write!(f, "must not be before {}", other),
            ViolationKind::UnknownReference { target, id } => {
                write!(f, "refers to unknown {} '{}'", target, id)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

/// Every field-level problem found in one submission
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn push(&mut self, field: impl Into<String>, kind: ViolationKind) {
        self.errors.push(FieldError {
            field: field.into(),
            kind,
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "Validation failed: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationReport {}

/// Collects field errors for one submission.
///
/// Required checks depend on the mode: creating needs every required field,
/// editing only rejects required fields that were submitted blank. Format
/// checks run on any value that is present.
#[derive(Debug)]
pub struct Validator {
    mode: EditMode,
    report: ValidationReport,
}

impl Validator {
    pub fn new(mode: EditMode) -> Self {
        Self {
            mode,
            report: ValidationReport::default(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn reject(&mut self, field: &str, kind: ViolationKind) {
        self.report.push(field, kind);
    }

    pub fn required_text(&mut self, field: &str, value: Option<&str>) {
        let missing = match (value, self.mode) {
            (Some(v), _) => v.trim().is_empty(),
            (None, EditMode::Create) => true,
            (None, EditMode::Edit) => false,
        };
        if missing {
            self.reject(field, ViolationKind::Required);
        }
    }

    pub fn required<V>(&mut self, field: &str, value: Option<&V>) {
        if value.is_none() && self.mode == EditMode::Create {
            self.reject(field, ViolationKind::Required);
        }
    }

    pub fn email(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = non_blank(value)
            && !EMAIL_RE.is_match(v)
        {
            self.reject(
                field,
                ViolationKind::InvalidFormat {
                    expected: "email address",
                },
            );
        }
    }

    pub fn phone(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = non_blank(value)
            && !PHONE_RE.is_match(v)
        {
            self.reject(
                field,
                ViolationKind::InvalidFormat {
                    expected: "phone number",
                },
            );
        }
    }

    /// Only `http://` and `https://` links are accepted.
    pub fn url(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = non_blank(value) {
            let rest = v
                .strip_prefix("https://")
                .or_else(|| v.strip_prefix("http://"));
            let ok = rest.is_some_and(|r| !r.is_empty() && !r.contains(char::is_whitespace));
            if !ok {
                self.reject(
                    field,
                    ViolationKind::InvalidFormat {
                        expected: "http(s) URL",
                    },
                );
            }
        }
    }

    pub fn date(&mut self, field: &str, value: Option<&str>) -> Option<NaiveDate> {
        let v = non_blank(value)?;
        let parsed = parse_date(v);
        if parsed.is_none() {
            self.reject(
                field,
                ViolationKind::InvalidFormat {
                    expected: "date (YYYY-MM-DD)",
                },
            );
        }
        parsed
    }

    pub fn datetime(&mut self, field: &str, value: Option<&str>) -> Option<NaiveDateTime> {
        let v = non_blank(value)?;
        let parsed = parse_datetime(v);
        if parsed.is_none() {
            self.reject(
                field,
                ViolationKind::InvalidFormat {
                    expected: "timestamp (YYYY/MM/DD HH:MM)",
                },
            );
        }
        parsed
    }

    pub fn range(&mut self, field: &str, value: Option<f64>, min: f64, max: f64) {
        if let Some(v) = value
            && !(min..=max).contains(&v)
        {
            self.reject(field, ViolationKind::OutOfRange { min, max });
        }
    }

    /// `later` must not precede `earlier`; reported on the later field.
    pub fn ordered<V: PartialOrd>(
        &mut self,
        earlier_field: &'static str,
        earlier: &V,
        later_field: &str,
        later: &V,
    ) {
        if later < earlier {
            self.reject(
                later_field,
                ViolationKind::OutOfOrder {
                    other: earlier_field,
                },
            );
        }
    }

    pub fn finish(self) -> Result<(), ValidationReport> {
        if self.report.is_empty() {
            Ok(())
        } else {
            Err(self.report)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
