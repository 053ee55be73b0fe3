use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    AllocationMethod, DeliveryType, EntityKind, ForeignKey, FpId, HistoryId, InsertPosition,
    MatchingStage, PartnerId, Record, UserId,
};

/// One step a matched consultation went through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    #[serde(with = "minute_format")]
    pub changed_at: NaiveDateTime,
    pub status: MatchingStage,
    /// Operator or FP name, `システム` for automatic steps
    pub updated_by: String,
    #[serde(default)]
    pub notes: String,
}

/// A single lead handed to an FP, with the consultation's progress since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingHistory {
    pub id: HistoryId,
    #[serde(with = "minute_format")]
    pub allocated_at: NaiveDateTime,
    pub fp_id: FpId,
    pub user_id: UserId,
    pub delivery_type: DeliveryType,
    pub allocation_method: AllocationMethod,
    pub current_status: MatchingStage,
    /// Partner the end user came in through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<PartnerId>,
    /// Oldest first; the last entry matches `current_status`
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
}

/// A changed `current_status` appends a step to the history, attributed to
/// `updated_by` with `notes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchingHistoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp_id: Option<FpId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<AllocationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<MatchingStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<PartnerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for MatchingHistory {
    type Id = HistoryId;

    const PREFIX: &'static str = "HIST";
    const KIND: EntityKind = EntityKind::History;
    const INSERT_AT: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &HistoryId {
        &self.id
    }

    fn display_name(&self) -> &str {
        self.id.as_ref()
    }

    fn references(&self) -> Vec<ForeignKey> {
        let mut refs = vec![
            ForeignKey::new("fp_id", EntityKind::Fp, &self.fp_id),
            ForeignKey::new("user_id", EntityKind::User, &self.user_id),
        ];
        if let Some(partner) = &self.partner_id {
            refs.push(ForeignKey::new("partner_id", EntityKind::Partner, partner));
        }
        refs
    }
}

/// Timestamps are kept to the minute, `2024/09/15 14:30`.
mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::parse_datetime;

    const FORMAT: &str = "%Y/%m/%d %H:%M";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
    }
}
