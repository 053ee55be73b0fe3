use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EntityKind, InsertPosition, PartnerId, PartnerStatus, Record};

/// Referral source feeding users in through its own landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub contact_email: String,
    pub lp_url: String,
    pub status: PartnerStatus,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartnerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PartnerStatus>,
}

impl Record for Partner {
    type Id = PartnerId;

    const PREFIX: &'static str = "P";
    const KIND: EntityKind = EntityKind::Partner;
    const INSERT_AT: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &PartnerId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
