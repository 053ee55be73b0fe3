use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    EntityKind, ForeignKey, FpId, InsertPosition, MatchingStage, Record, ReviewId, ReviewerType,
    UserId,
};

/// Review of an FP, posted by the end user after a consultation or by an
/// operator on the user's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub posted_at: NaiveDate,
    pub reviewer_type: ReviewerType,
    /// The reviewing end user; operator reviews carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub fp_id: FpId,
    /// 1 to 5 stars
    pub rating: u8,
    #[serde(default)]
    pub review_content: String,
    pub status_at_review: MatchingStage,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consultation_topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewRecordDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_type: Option<ReviewerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp_id: Option<FpId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_at_review: Option<MatchingStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_topics: Option<Vec<String>>,
}

impl Record for ReviewRecord {
    type Id = ReviewId;

    const PREFIX: &'static str = "R";
    const KIND: EntityKind = EntityKind::Review;
    const INSERT_AT: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &ReviewId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.review_content
    }

    fn references(&self) -> Vec<ForeignKey> {
        let mut refs = Vec::with_capacity(2);
        if let Some(user) = &self.user_id {
            refs.push(ForeignKey::new("user_id", EntityKind::User, user));
        }
        refs.push(ForeignKey::new("fp_id", EntityKind::Fp, &self.fp_id));
        refs
    }
}
