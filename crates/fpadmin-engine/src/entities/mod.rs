//! Field tables and edit rules for every admin record.

mod allocation;
mod billing;
mod content;
mod fp;
mod history;
mod partner;
mod review;
mod user;

pub use allocation::AllocationField;
pub use billing::{PaymentUrlField, PlanField};
pub use content::{BannerField, FaqField, LegalDocumentField};
pub use fp::FpField;
pub use history::HistoryField;
pub use partner::PartnerField;
pub use review::ReviewField;
pub use user::UserField;

use chrono::NaiveDate;
use fpadmin_types::parse_date;

use crate::validation::Validator;

fn date_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn check_required_date(v: &mut Validator, field: &str, value: Option<&String>) {
    v.required_text(field, value.map(String::as_str));
    v.date(field, value.map(String::as_str));
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn merge_date(target: &mut NaiveDate, value: Option<String>) {
    if let Some(date) = value.as_deref().and_then(parse_date) {
        *target = date;
    }
}

/// A submitted blank clears an optional date; unparseable input is left to
/// the validator and never reaches here.
fn merge_optional_date(target: &mut Option<NaiveDate>, value: Option<String>) {
    if let Some(value) = value {
        *target = parse_date(&value);
    }
}

/// A submitted blank clears an optional field.
fn merge_optional_text(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        *target = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}
