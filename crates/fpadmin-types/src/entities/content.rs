use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    BannerId, EntityKind, FaqId, InsertPosition, LegalDocumentId, LegalDocumentKind,
    PublicationStatus, Record,
};

// --------------------------------------------------------
// FAQ
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: FaqId,
    /// Position on the public FAQ page, ascending
    pub display_order: u32,
    pub category: String,
    pub question: String,
    pub answer: String,
    pub publication_status: PublicationStatus,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqItemDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_status: Option<PublicationStatus>,
}

impl Record for FaqItem {
    type Id = FaqId;

    const PREFIX: &'static str = "FAQ";
    const KIND: EntityKind = EntityKind::Faq;
    const INSERT_AT: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &FaqId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.question
    }
}

// --------------------------------------------------------
// Legal documents
// --------------------------------------------------------

/// One uploaded revision of a legal document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentVersion {
    pub version: String,
    pub upload_date: NaiveDate,
    pub file_name: String,
    /// Fabricated local reference, see [`crate::local_file_ref`]
    pub file_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub id: LegalDocumentId,
    pub kind: LegalDocumentKind,
    pub name: String,
    /// Free-form version tag, e.g. "v2.1"
    pub current_version: String,
    pub last_updated: NaiveDate,
    pub publication_status: PublicationStatus,
    /// Newest first
    #[serde(default)]
    pub history: Vec<DocumentVersion>,
}

/// Submitting a `current_version` together with a `file_name` uploads a new
/// revision and puts it at the top of the history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegalDocumentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<LegalDocumentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_status: Option<PublicationStatus>,
}

impl Record for LegalDocument {
    type Id = LegalDocumentId;

    const PREFIX: &'static str = "LD";
    const KIND: EntityKind = EntityKind::LegalDocument;
    const INSERT_AT: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &LegalDocumentId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

// --------------------------------------------------------
// Ad banners
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdBanner {
    pub id: BannerId,
    /// Slot on the site, 1-based; 0 keeps the banner out of rotation
    pub position: u32,
    /// Fabricated local reference, see [`crate::local_file_ref`]
    pub image_ref: String,
    pub link_url: String,
    pub display_start: NaiveDate,
    pub display_end: NaiveDate,
    pub publication_status: PublicationStatus,
    #[serde(default)]
    pub clicks: u32,
}

impl AdBanner {
    pub fn is_placed(&self) -> bool {
        self.position > 0
    }

    /// `2024/09/01 - 2024/10/31`
    pub fn display_period(&self) -> String {
        format!(
            "{} - {}",
            self.display_start.format("%Y/%m/%d"),
            self.display_end.format("%Y/%m/%d")
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdBannerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Name of the picked file; turned into a local reference on submit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_status: Option<PublicationStatus>,
}

impl Record for AdBanner {
    type Id = BannerId;

    const PREFIX: &'static str = "BANNER";
    const KIND: EntityKind = EntityKind::Banner;
    const INSERT_AT: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &BannerId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.link_url
    }
}
