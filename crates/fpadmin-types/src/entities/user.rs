use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    EntityKind, ForeignKey, InsertPosition, LineStatus, PartnerId, Record, UserId,
    VerificationStatus,
};

/// End user registered through the matching service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Reading of the name in kana
    #[serde(default)]
    pub furigana: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub prefecture: Option<String>,
    #[serde(default)]
    pub consultation_content: Option<String>,
    #[serde(default)]
    pub line_status: Option<LineStatus>,
    #[serde(default)]
    pub last_login: Option<NaiveDate>,
    pub registration_date: NaiveDate,
    pub verification_status: VerificationStatus,
    /// Partner whose landing page brought the user in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<PartnerId>,
    /// Not yet opened by an operator
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furigana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_status: Option<LineStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<PartnerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Record for User {
    type Id = UserId;

    const PREFIX: &'static str = "U";
    const KIND: EntityKind = EntityKind::User;
    const INSERT_AT: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn references(&self) -> Vec<ForeignKey> {
        self.partner_id
            .iter()
            .map(|id| ForeignKey::new("partner_id", EntityKind::Partner, id))
            .collect()
    }
}
