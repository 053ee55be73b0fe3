use chrono::{NaiveDate, NaiveTime};
use fpadmin_types::{
    AllocationMethod, DeliveryType, FpId, HistoryId, MatchingHistory, MatchingHistoryDraft,
    MatchingStage, PartnerId, StatusChange, UserId, parse_datetime,
};

use super::merge;
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::Validator;

/// Author of status steps submitted without one
const DEFAULT_UPDATER: &str = "管理者";

field_enum!(
    HistoryField {
        Id => "id",
        AllocatedAt => "allocated_at",
        FpId => "fp_id",
        FpName => "fp_name",
        FpType => "fp_type",
        FpRole => "fp_role",
        UserId => "user_id",
        UserName => "user_name",
        DeliveryType => "delivery_type",
        AllocationMethod => "allocation_method",
        CurrentStatus => "current_status",
        PartnerId => "partner_id",
        PartnerName => "partner_name",
        /// Number of recorded status steps
        Steps => "steps",
    }
);

impl Queryable for MatchingHistory {
    type Field = HistoryField;

    const SEARCH_FIELDS: &'static [HistoryField] = &[
        HistoryField::Id,
        HistoryField::FpName,
        HistoryField::UserName,
    ];
    const SORTABLE: &'static [HistoryField] = &[
        HistoryField::Id,
        HistoryField::AllocatedAt,
        HistoryField::FpName,
        HistoryField::UserName,
        HistoryField::CurrentStatus,
        HistoryField::PartnerName,
    ];
    const SUMMARY_FIELDS: &'static [HistoryField] = &[
        HistoryField::Id,
        HistoryField::AllocatedAt,
        HistoryField::FpName,
        HistoryField::FpType,
        HistoryField::UserName,
        HistoryField::DeliveryType,
        HistoryField::AllocationMethod,
        HistoryField::CurrentStatus,
        HistoryField::PartnerName,
    ];
    const STATUS_FIELD: Option<HistoryField> = Some(HistoryField::CurrentStatus);
    const FLAG_FIELDS: &'static [HistoryField] = &[];
    const DATE_FIELD: Option<HistoryField> = Some(HistoryField::AllocatedAt);
    const DEFAULT_SORT: HistoryField = HistoryField::AllocatedAt;

    fn field<'a>(&'a self, field: HistoryField, lookup: &'a dyn Lookup) -> FieldValue<'a> {
        let fp = move || lookup.fp(&self.fp_id);
        match field {
            HistoryField::Id => FieldValue::Text(self.id.as_ref()),
            HistoryField::AllocatedAt => FieldValue::Timestamp(self.allocated_at),
            HistoryField::FpId => FieldValue::Text(self.fp_id.as_ref()),
            HistoryField::FpName => FieldValue::optional_text(fp().map(|fp| fp.name.as_str())),
            HistoryField::FpType => fp().map_or(FieldValue::Missing, |fp| {
                FieldValue::choice(fp.fp_type)
            }),
            HistoryField::FpRole => {
                fp().map_or(FieldValue::Missing, |fp| FieldValue::choice(fp.role))
            }
            HistoryField::UserId => FieldValue::Text(self.user_id.as_ref()),
            HistoryField::UserName => FieldValue::optional_text(
                lookup.user(&self.user_id).map(|user| user.name.as_str()),
            ),
            HistoryField::DeliveryType => FieldValue::choice(self.delivery_type),
            HistoryField::AllocationMethod => FieldValue::choice(self.allocation_method),
            HistoryField::CurrentStatus => FieldValue::choice(self.current_status),
            HistoryField::PartnerId => {
                FieldValue::optional_text(self.partner_id.as_ref().map(|id| id.as_ref()))
            }
            HistoryField::PartnerName => FieldValue::optional_text(
                self.partner_id
                    .as_ref()
                    .and_then(|id| lookup.partner(id))
                    .map(|p| p.name.as_str()),
            ),
            HistoryField::Steps => FieldValue::number(
                u32::try_from(self.status_history.len()).unwrap_or(u32::MAX),
            ),
        }
    }
}

impl Editable for MatchingHistory {
    type Draft = MatchingHistoryDraft;

    fn blank(id: HistoryId, today: NaiveDate) -> Self {
        MatchingHistory {
            id,
            allocated_at: today.and_time(NaiveTime::MIN),
            fp_id: FpId::new(""),
            user_id: UserId::new(""),
            delivery_type: DeliveryType::Basic,
            allocation_method: AllocationMethod::Manual,
            current_status: MatchingStage::New,
            partner_id: None,
            status_history: Vec::new(),
        }
    }

    fn to_draft(&self) -> MatchingHistoryDraft {
        MatchingHistoryDraft {
            allocated_at: Some(self.allocated_at.format("%Y/%m/%d %H:%M").to_string()),
            fp_id: Some(self.fp_id.clone()),
            user_id: Some(self.user_id.clone()),
            delivery_type: Some(self.delivery_type),
            allocation_method: Some(self.allocation_method),
            current_status: Some(self.current_status),
            partner_id: self.partner_id.clone(),
            updated_by: None,
            notes: None,
        }
    }

    fn check_draft(draft: &MatchingHistoryDraft, v: &mut Validator) {
        v.required_text("fp_id", draft.fp_id.as_ref().map(|id| id.as_ref()));
        v.required_text("user_id", draft.user_id.as_ref().map(|id| id.as_ref()));
        v.datetime("allocated_at", draft.allocated_at.as_deref());
    }

    /// A new record opens its history with the initial status at
    /// `allocated_at`. Later status changes append a step dated `today`.
    fn apply(&mut self, draft: MatchingHistoryDraft, today: NaiveDate) {
        if let Some(at) = draft.allocated_at.as_deref().and_then(parse_datetime) {
            self.allocated_at = at;
        }
        if let Some(fp_id) = draft.fp_id {
            self.fp_id = FpId::new(fp_id.as_ref().trim());
        }
        if let Some(user_id) = draft.user_id {
            self.user_id = UserId::new(user_id.as_ref().trim());
        }
        merge(&mut self.delivery_type, draft.delivery_type);
        merge(&mut self.allocation_method, draft.allocation_method);
        if let Some(partner) = draft.partner_id {
            let trimmed = partner.as_ref().trim();
            self.partner_id = (!trimmed.is_empty()).then(|| PartnerId::new(trimmed));
        }

        let previous = self.current_status;
        merge(&mut self.current_status, draft.current_status);

        let changed_at = if self.status_history.is_empty() {
            Some(self.allocated_at)
        } else if self.current_status != previous {
            Some(today.and_time(NaiveTime::MIN))
        } else {
            None
        };
        if let Some(changed_at) = changed_at {
            self.status_history.push(StatusChange {
                changed_at,
                status: self.current_status,
                updated_by: draft
                    .updated_by
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| DEFAULT_UPDATER.to_string()),
                notes: draft.notes.unwrap_or_default(),
            });
        }
    }

    fn check_record(&self, v: &mut Validator) {
        if let Some(first) = self.status_history.first() {
            v.ordered(
                "allocated_at",
                &self.allocated_at,
                "status_history",
                &first.changed_at,
            );
        }
    }
}
