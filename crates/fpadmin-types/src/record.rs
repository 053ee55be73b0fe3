use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::RecordKey;

/// Where newly created records land in their collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// Entity kinds managed by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Fp,
    Partner,
    Allocation,
    History,
    Review,
    PaymentUrl,
    Plan,
    Faq,
    LegalDocument,
    Banner,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::User,
        EntityKind::Fp,
        EntityKind::Partner,
        EntityKind::Allocation,
        EntityKind::History,
        EntityKind::Review,
        EntityKind::PaymentUrl,
        EntityKind::Plan,
        EntityKind::Faq,
        EntityKind::LegalDocument,
        EntityKind::Banner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Fp => "fp",
            EntityKind::Partner => "partner",
            EntityKind::Allocation => "allocation",
            EntityKind::History => "history",
            EntityKind::Review => "review",
            EntityKind::PaymentUrl => "payment_url",
            EntityKind::Plan => "plan",
            EntityKind::Faq => "faq",
            EntityKind::LegalDocument => "legal_document",
            EntityKind::Banner => "banner",
        }
    }

    /// Operator-facing label, as shown in the console navigation
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "ユーザー",
            EntityKind::Fp => "FP",
            EntityKind::Partner => "パートナー",
            EntityKind::Allocation => "マッチング割当",
            EntityKind::History => "マッチング・割当履歴",
            EntityKind::Review => "レビュー",
            EntityKind::PaymentUrl => "決済URL",
            EntityKind::Plan => "サブスクリプションプラン",
            EntityKind::Faq => "FAQ",
            EntityKind::LegalDocument => "規約・法務文書",
            EntityKind::Banner => "広告バナー",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference from one record to another, by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    /// Field on the referencing record (e.g. "fp_id").
    pub field: &'static str,
    /// Entity the id points into.
    pub target: EntityKind,
    pub id: String,
}

impl ForeignKey {
    pub fn new(field: &'static str, target: EntityKind, id: impl AsRef<str>) -> Self {
        Self {
            field,
            target,
            id: id.as_ref().to_string(),
        }
    }
}

/// A flat admin record stored in an in-memory collection.
pub trait Record: Clone + fmt::Debug + Serialize + for<'de> Deserialize<'de> {
    type Id: RecordKey;

    /// Prefix of generated ids (`U`, `FP`, ...)
    const PREFIX: &'static str;
    const KIND: EntityKind;
    const INSERT_AT: InsertPosition;

    fn id(&self) -> &Self::Id;

    /// Short human label used in listings and reference resolution
    fn display_name(&self) -> &str;

    /// Outgoing references to other collections
    fn references(&self) -> Vec<ForeignKey> {
        Vec::new()
    }
}
