use chrono::NaiveDate;
use fpadmin_types::{Fp, FpDraft, FpId, FpRole, FpStatus, FpType};

use super::{check_required_date, date_text, merge, merge_date, merge_optional_text};
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::{Validator, ViolationKind};

field_enum!(
    FpField {
        Id => "id",
        Name => "name",
        Email => "email",
        FpType => "fp_type",
        Company => "company",
        JoinDate => "join_date",
        ReviewCount => "review_count",
        AverageRating => "average_rating",
        Rank => "rank",
        /// `assigned/total` for the current month
        MonthlyAssignment => "monthly_assignment",
        MonthlyAssigned => "monthly_assigned",
        MonthlyTotal => "monthly_total",
        Status => "status",
        Role => "role",
        /// Monthly quota not yet met
        Incomplete => "incomplete",
    }
);

impl Queryable for Fp {
    type Field = FpField;

    const SEARCH_FIELDS: &'static [FpField] =
        &[FpField::Id, FpField::Name, FpField::Email, FpField::Company];
    const SORTABLE: &'static [FpField] = &[
        FpField::Id,
        FpField::Name,
        FpField::JoinDate,
        FpField::ReviewCount,
        FpField::AverageRating,
        FpField::Rank,
        FpField::MonthlyAssigned,
    ];
    const SUMMARY_FIELDS: &'static [FpField] = &[
        FpField::Id,
        FpField::Name,
        FpField::FpType,
        FpField::JoinDate,
        FpField::ReviewCount,
        FpField::AverageRating,
        FpField::Rank,
        FpField::MonthlyAssignment,
        FpField::Status,
    ];
    const STATUS_FIELD: Option<FpField> = Some(FpField::Status);
    const FLAG_FIELDS: &'static [FpField] = &[FpField::Incomplete];
    const DATE_FIELD: Option<FpField> = Some(FpField::JoinDate);
    const DEFAULT_SORT: FpField = FpField::JoinDate;

    fn field<'a>(&'a self, field: FpField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            FpField::Id => FieldValue::Text(self.id.as_ref()),
            FpField::Name => FieldValue::Text(&self.name),
            FpField::Email => FieldValue::Text(&self.email),
            FpField::FpType => FieldValue::choice(self.fp_type),
            FpField::Company => FieldValue::optional_text(self.company.as_deref()),
            FpField::JoinDate => FieldValue::Date(self.join_date),
            FpField::ReviewCount => FieldValue::number(self.review_count),
            FpField::AverageRating => FieldValue::Number(self.average_rating),
            FpField::Rank => FieldValue::number(self.rank),
            FpField::MonthlyAssignment => FieldValue::Fraction {
                done: self.monthly_assigned,
                total: self.monthly_total,
            },
            FpField::MonthlyAssigned => FieldValue::number(self.monthly_assigned),
            FpField::MonthlyTotal => FieldValue::number(self.monthly_total),
            FpField::Status => FieldValue::choice(self.status),
            FpField::Role => FieldValue::choice(self.role),
            FpField::Incomplete => FieldValue::Flag(self.is_behind_quota()),
        }
    }
}

impl Editable for Fp {
    type Draft = FpDraft;

    fn blank(id: FpId, today: NaiveDate) -> Self {
        Fp {
            id,
            name: String::new(),
            email: String::new(),
            fp_type: FpType::Individual,
            company: None,
            join_date: today,
            review_count: 0,
            average_rating: 0.0,
            rank: 1,
            monthly_assigned: 0,
            monthly_total: 0,
            status: FpStatus::Active,
            role: FpRole::General,
        }
    }

    fn to_draft(&self) -> FpDraft {
        FpDraft {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            fp_type: Some(self.fp_type),
            company: self.company.clone(),
            join_date: Some(date_text(self.join_date)),
            review_count: Some(self.review_count),
            average_rating: Some(self.average_rating),
            rank: Some(self.rank),
            monthly_assigned: Some(self.monthly_assigned),
            monthly_total: Some(self.monthly_total),
            status: Some(self.status),
            role: Some(self.role),
        }
    }

    fn check_draft(draft: &FpDraft, v: &mut Validator) {
        v.required_text("name", draft.name.as_deref());
        v.required_text("email", draft.email.as_deref());
        v.email("email", draft.email.as_deref());
        v.range("average_rating", draft.average_rating, 0.0, 5.0);
        v.range("rank", draft.rank.map(f64::from), 1.0, 5.0);
        if draft.join_date.is_some() {
            check_required_date(v, "join_date", draft.join_date.as_ref());
        }
    }

    fn apply(&mut self, draft: FpDraft, _today: NaiveDate) {
        merge(&mut self.name, draft.name);
        merge(&mut self.email, draft.email);
        merge(&mut self.fp_type, draft.fp_type);
        merge_optional_text(&mut self.company, draft.company);
        merge_date(&mut self.join_date, draft.join_date);
        merge(&mut self.review_count, draft.review_count);
        merge(&mut self.average_rating, draft.average_rating);
        merge(&mut self.rank, draft.rank);
        merge(&mut self.monthly_assigned, draft.monthly_assigned);
        merge(&mut self.monthly_total, draft.monthly_total);
        merge(&mut self.status, draft.status);
        merge(&mut self.role, draft.role);
    }

    /// Corporate accounts carry the firm name.
    fn check_record(&self, v: &mut Validator) {
        if self.fp_type == FpType::Corporate && self.company.is_none() {
            v.reject("company", ViolationKind::Required);
        }
    }
}
