use chrono::NaiveDate;
use fpadmin_types::{
    AllocationId, AllocationStatus, AllocationType, FpId, MatchingAllocation,
    MatchingAllocationDraft,
};

use super::merge;
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::{Validator, ViolationKind};

field_enum!(
    AllocationField {
        Id => "id",
        FpId => "fp_id",
        /// Joined from the allocated FP
        FpName => "fp_name",
        FpEmail => "fp_email",
        FpCompany => "fp_company",
        FpType => "fp_type",
        AllocationType => "allocation_type",
        CompletedAllocations => "completed_allocations",
        TotalAllocations => "total_allocations",
        CompletionRate => "completion_rate",
        Status => "status",
        CompletionDate => "completion_date",
        /// status is not 完了
        InProgress => "in_progress",
    }
);

impl Queryable for MatchingAllocation {
    type Field = AllocationField;

    const SEARCH_FIELDS: &'static [AllocationField] = &[
        AllocationField::Id,
        AllocationField::FpName,
        AllocationField::FpEmail,
        AllocationField::FpCompany,
    ];
    const SORTABLE: &'static [AllocationField] = &[
        AllocationField::Id,
        AllocationField::FpName,
        AllocationField::AllocationType,
        AllocationField::CompletedAllocations,
        AllocationField::TotalAllocations,
        AllocationField::CompletionRate,
        AllocationField::CompletionDate,
    ];
    const SUMMARY_FIELDS: &'static [AllocationField] = &[
        AllocationField::Id,
        AllocationField::FpName,
        AllocationField::FpType,
        AllocationField::AllocationType,
        AllocationField::CompletedAllocations,
        AllocationField::TotalAllocations,
        AllocationField::Status,
        AllocationField::CompletionDate,
    ];
    const STATUS_FIELD: Option<AllocationField> = Some(AllocationField::Status);
    const FLAG_FIELDS: &'static [AllocationField] = &[AllocationField::InProgress];
    const DATE_FIELD: Option<AllocationField> = Some(AllocationField::CompletionDate);
    const DEFAULT_SORT: AllocationField = AllocationField::Id;

    fn field<'a>(&'a self, field: AllocationField, lookup: &'a dyn Lookup) -> FieldValue<'a> {
        let fp = move || lookup.fp(&self.fp_id);
        match field {
            AllocationField::Id => FieldValue::Text(self.id.as_ref()),
            AllocationField::FpId => FieldValue::Text(self.fp_id.as_ref()),
            AllocationField::FpName => {
                FieldValue::optional_text(fp().map(|fp| fp.name.as_str()))
            }
            AllocationField::FpEmail => {
                FieldValue::optional_text(fp().map(|fp| fp.email.as_str()))
            }
            AllocationField::FpCompany => {
                FieldValue::optional_text(fp().and_then(|fp| fp.company.as_deref()))
            }
            AllocationField::FpType => fp().map_or(FieldValue::Missing, |fp| {
                FieldValue::choice(fp.fp_type)
            }),
            AllocationField::AllocationType => FieldValue::choice(self.allocation_type),
            AllocationField::CompletedAllocations => {
                FieldValue::number(self.completed_allocations)
            }
            AllocationField::TotalAllocations => FieldValue::number(self.total_allocations),
            AllocationField::CompletionRate => FieldValue::Number(self.completion_rate()),
            AllocationField::Status => FieldValue::choice(self.status),
            AllocationField::CompletionDate => self
                .completion_date
                .map_or(FieldValue::Missing, FieldValue::Date),
            AllocationField::InProgress => FieldValue::Flag(self.is_in_progress()),
        }
    }
}

impl Editable for MatchingAllocation {
    type Draft = MatchingAllocationDraft;

    fn blank(id: AllocationId, _today: NaiveDate) -> Self {
        MatchingAllocation {
            id,
            fp_id: FpId::new(""),
            allocation_type: AllocationType::Basic,
            completed_allocations: 0,
            total_allocations: 0,
            status: AllocationStatus::Incomplete,
            completion_date: None,
        }
    }

    fn to_draft(&self) -> MatchingAllocationDraft {
        MatchingAllocationDraft {
            fp_id: Some(self.fp_id.clone()),
            allocation_type: Some(self.allocation_type),
            completed_allocations: Some(self.completed_allocations),
            total_allocations: Some(self.total_allocations),
        }
    }

    fn check_draft(draft: &MatchingAllocationDraft, v: &mut Validator) {
        v.required_text("fp_id", draft.fp_id.as_ref().map(|id| id.as_ref()));
        v.required("total_allocations", draft.total_allocations.as_ref());
    }

    /// Status follows the counts. A quota that becomes complete is dated
    /// `today`; one that falls back to incomplete loses its date.
    fn apply(&mut self, draft: MatchingAllocationDraft, today: NaiveDate) {
        if let Some(fp_id) = draft.fp_id {
            self.fp_id = FpId::new(fp_id.as_ref().trim());
        }
        merge(&mut self.allocation_type, draft.allocation_type);
        merge(&mut self.completed_allocations, draft.completed_allocations);
        merge(&mut self.total_allocations, draft.total_allocations);

        self.status = self.derived_status();
        self.completion_date = match self.status {
            AllocationStatus::Completed => self.completion_date.or(Some(today)),
            AllocationStatus::Incomplete => None,
        };
    }

    fn check_record(&self, v: &mut Validator) {
        if self.completed_allocations > self.total_allocations {
            v.reject(
                "completed_allocations",
                ViolationKind::OutOfRange {
                    min: 0.0,
                    max: self.total_allocations as f64,
                },
            );
        }
    }
}
