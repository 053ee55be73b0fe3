use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EntityKind, FpId, FpRole, FpStatus, FpType, InsertPosition, Record};

/// Financial planner account, either an individual (個人) or a firm (法人)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fp {
    pub id: FpId,
    pub name: String,
    pub email: String,
    pub fp_type: FpType,
    /// Firm name; expected for corporate accounts
    #[serde(default)]
    pub company: Option<String>,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub review_count: u32,
    /// 0.0 when unrated
    #[serde(default)]
    pub average_rating: f64,
    /// 1 (lowest) to 5
    pub rank: u8,
    /// Leads handed over so far this month
    #[serde(default)]
    pub monthly_assigned: u32,
    /// Leads promised this month
    #[serde(default)]
    pub monthly_total: u32,
    pub status: FpStatus,
    pub role: FpRole,
}

impl Fp {
    /// The month's quota is not yet met
    pub fn is_behind_quota(&self) -> bool {
        self.monthly_assigned < self.monthly_total
    }

    /// `assigned/total`, as the FP list shows it
    pub fn monthly_assignment(&self) -> String {
        format!("{}/{}", self.monthly_assigned, self.monthly_total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FpDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp_type: Option<FpType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_assigned: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FpStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<FpRole>,
}

impl Record for Fp {
    type Id = FpId;

    const PREFIX: &'static str = "FP";
    const KIND: EntityKind = EntityKind::Fp;
    const INSERT_AT: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &FpId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
