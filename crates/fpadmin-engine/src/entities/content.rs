use chrono::NaiveDate;
use fpadmin_types::{
    AdBanner, AdBannerDraft, BannerId, DocumentVersion, FaqId, FaqItem, FaqItemDraft,
    LegalDocument, LegalDocumentDraft, LegalDocumentId, LegalDocumentKind, PublicationStatus,
    local_file_ref,
};

use super::{check_required_date, date_text, merge, merge_date};
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::{Validator, ViolationKind};

// --------------------------------------------------------
// FAQ
// --------------------------------------------------------

field_enum!(
    FaqField {
        Id => "id",
        DisplayOrder => "display_order",
        Category => "category",
        Question => "question",
        Answer => "answer",
        PublicationStatus => "publication_status",
        LastUpdated => "last_updated",
    }
);

impl Queryable for FaqItem {
    type Field = FaqField;

    const SEARCH_FIELDS: &'static [FaqField] = &[
        FaqField::Category,
        FaqField::Question,
        FaqField::Answer,
    ];
    const SORTABLE: &'static [FaqField] = &[
        FaqField::Id,
        FaqField::DisplayOrder,
        FaqField::Category,
        FaqField::LastUpdated,
    ];
    const SUMMARY_FIELDS: &'static [FaqField] = &[
        FaqField::Id,
        FaqField::DisplayOrder,
        FaqField::Category,
        FaqField::Question,
        FaqField::PublicationStatus,
        FaqField::LastUpdated,
    ];
    const STATUS_FIELD: Option<FaqField> = Some(FaqField::PublicationStatus);
    const FLAG_FIELDS: &'static [FaqField] = &[];
    const DATE_FIELD: Option<FaqField> = Some(FaqField::LastUpdated);
    const DEFAULT_SORT: FaqField = FaqField::DisplayOrder;

    fn field<'a>(&'a self, field: FaqField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            FaqField::Id => FieldValue::Text(self.id.as_ref()),
            FaqField::DisplayOrder => FieldValue::number(self.display_order),
            FaqField::Category => FieldValue::Text(&self.category),
            FaqField::Question => FieldValue::Text(&self.question),
            FaqField::Answer => FieldValue::Text(&self.answer),
            FaqField::PublicationStatus => FieldValue::choice(self.publication_status),
            FaqField::LastUpdated => FieldValue::Date(self.last_updated),
        }
    }
}

impl Editable for FaqItem {
    type Draft = FaqItemDraft;

    fn blank(id: FaqId, today: NaiveDate) -> Self {
        FaqItem {
            id,
            display_order: 0,
            category: String::new(),
            question: String::new(),
            answer: String::new(),
            publication_status: PublicationStatus::Private,
            last_updated: today,
        }
    }

    fn to_draft(&self) -> FaqItemDraft {
        FaqItemDraft {
            display_order: Some(self.display_order),
            category: Some(self.category.clone()),
            question: Some(self.question.clone()),
            answer: Some(self.answer.clone()),
            publication_status: Some(self.publication_status),
        }
    }

    fn check_draft(draft: &FaqItemDraft, v: &mut Validator) {
        v.required_text("category", draft.category.as_deref());
        v.required_text("question", draft.question.as_deref());
        v.required_text("answer", draft.answer.as_deref());
        v.required("display_order", draft.display_order.as_ref());
    }

    fn apply(&mut self, draft: FaqItemDraft, today: NaiveDate) {
        merge(&mut self.display_order, draft.display_order);
        merge(&mut self.category, draft.category);
        merge(&mut self.question, draft.question);
        merge(&mut self.answer, draft.answer);
        merge(&mut self.publication_status, draft.publication_status);
        self.last_updated = today;
    }
}

// --------------------------------------------------------
// Legal documents
// --------------------------------------------------------

field_enum!(
    LegalDocumentField {
        Id => "id",
        Kind => "kind",
        Name => "name",
        CurrentVersion => "current_version",
        /// File of the current version
        FileName => "file_name",
        /// Number of uploaded versions
        Versions => "versions",
        LastUpdated => "last_updated",
        PublicationStatus => "publication_status",
    }
);

impl Queryable for LegalDocument {
    type Field = LegalDocumentField;

    const SEARCH_FIELDS: &'static [LegalDocumentField] = &[
        LegalDocumentField::Name,
        LegalDocumentField::CurrentVersion,
        LegalDocumentField::FileName,
    ];
    const SORTABLE: &'static [LegalDocumentField] = &[
        LegalDocumentField::Id,
        LegalDocumentField::Kind,
        LegalDocumentField::CurrentVersion,
        LegalDocumentField::LastUpdated,
    ];
    const SUMMARY_FIELDS: &'static [LegalDocumentField] = &[
        LegalDocumentField::Id,
        LegalDocumentField::Kind,
        LegalDocumentField::Name,
        LegalDocumentField::CurrentVersion,
        LegalDocumentField::LastUpdated,
        LegalDocumentField::PublicationStatus,
    ];
    const STATUS_FIELD: Option<LegalDocumentField> = Some(LegalDocumentField::PublicationStatus);
    const FLAG_FIELDS: &'static [LegalDocumentField] = &[];
    const DATE_FIELD: Option<LegalDocumentField> = Some(LegalDocumentField::LastUpdated);
    const DEFAULT_SORT: LegalDocumentField = LegalDocumentField::LastUpdated;

    fn field<'a>(&'a self, field: LegalDocumentField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            LegalDocumentField::Id => FieldValue::Text(self.id.as_ref()),
            LegalDocumentField::Kind => FieldValue::choice(self.kind),
            LegalDocumentField::Name => FieldValue::Text(&self.name),
            LegalDocumentField::CurrentVersion => FieldValue::Text(&self.current_version),
            LegalDocumentField::FileName => FieldValue::optional_text(
                self.history.first().map(|v| v.file_name.as_str()),
            ),
            LegalDocumentField::Versions => FieldValue::number(
                u32::try_from(self.history.len()).unwrap_or(u32::MAX),
            ),
            LegalDocumentField::LastUpdated => FieldValue::Date(self.last_updated),
            LegalDocumentField::PublicationStatus => FieldValue::choice(self.publication_status),
        }
    }
}

impl Editable for LegalDocument {
    type Draft = LegalDocumentDraft;

    fn blank(id: LegalDocumentId, today: NaiveDate) -> Self {
        LegalDocument {
            id,
            kind: LegalDocumentKind::Terms,
            name: String::new(),
            current_version: String::new(),
            last_updated: today,
            publication_status: PublicationStatus::Private,
            history: Vec::new(),
        }
    }

    /// The file of the current version is already on record, so
    /// `file_name` stays empty until a new one is picked.
    fn to_draft(&self) -> LegalDocumentDraft {
        LegalDocumentDraft {
            kind: Some(self.kind),
            name: Some(self.name.clone()),
            current_version: Some(self.current_version.clone()),
            file_name: None,
            publication_status: Some(self.publication_status),
        }
    }

    fn check_draft(draft: &LegalDocumentDraft, v: &mut Validator) {
        v.required("kind", draft.kind.as_ref());
        v.required_text("name", draft.name.as_deref());
        v.required_text("current_version", draft.current_version.as_deref());
        v.required_text("file_name", draft.file_name.as_deref());
    }

    /// A picked file uploads a new revision under the submitted version tag.
    fn apply(&mut self, draft: LegalDocumentDraft, today: NaiveDate) {
        merge(&mut self.kind, draft.kind);
        merge(&mut self.name, draft.name);
        merge(&mut self.current_version, draft.current_version);
        merge(&mut self.publication_status, draft.publication_status);
        if let Some(file) = draft.file_name {
            let file_ref = local_file_ref("legal", &file);
            self.history.insert(
                0,
                DocumentVersion {
                    version: self.current_version.clone(),
                    upload_date: today,
                    file_name: file.trim().to_string(),
                    file_ref,
                },
            );
        }
        self.last_updated = today;
    }

    /// Version tags are unique within a document, and the current version
    /// is the newest upload.
    fn check_record(&self, v: &mut Validator) {
        let mut seen: Vec<&str> = Vec::with_capacity(self.history.len());
        for entry in &self.history {
            if seen.contains(&entry.version.as_str()) {
                v.reject(
                    "current_version",
                    ViolationKind::InvalidFormat {
                        expected: "version tag not uploaded before",
                    },
                );
                return;
            }
            seen.push(&entry.version);
        }
        if let Some(latest) = self.history.first()
            && latest.version != self.current_version
        {
            v.reject("file_name", ViolationKind::Required);
        }
    }
}

// --------------------------------------------------------
// Ad banners
// --------------------------------------------------------

field_enum!(
    BannerField {
        Id => "id",
        Position => "position",
        ImageRef => "image_ref",
        LinkUrl => "link_url",
        DisplayStart => "display_start",
        DisplayEnd => "display_end",
        PublicationStatus => "publication_status",
        Clicks => "clicks",
        /// Occupies a slot (position > 0)
        Placed => "placed",
    }
);

impl Queryable for AdBanner {
    type Field = BannerField;

    const SEARCH_FIELDS: &'static [BannerField] = &[BannerField::Id, BannerField::LinkUrl];
    const SORTABLE: &'static [BannerField] = &[
        BannerField::Id,
        BannerField::Position,
        BannerField::DisplayStart,
        BannerField::DisplayEnd,
        BannerField::Clicks,
    ];
    const SUMMARY_FIELDS: &'static [BannerField] = &[
        BannerField::Id,
        BannerField::Position,
        BannerField::LinkUrl,
        BannerField::DisplayStart,
        BannerField::DisplayEnd,
        BannerField::PublicationStatus,
        BannerField::Clicks,
    ];
    const STATUS_FIELD: Option<BannerField> = Some(BannerField::PublicationStatus);
    const FLAG_FIELDS: &'static [BannerField] = &[BannerField::Placed];
    const DATE_FIELD: Option<BannerField> = Some(BannerField::DisplayStart);
    const DEFAULT_SORT: BannerField = BannerField::Position;

    fn field<'a>(&'a self, field: BannerField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            BannerField::Id => FieldValue::Text(self.id.as_ref()),
            BannerField::Position => FieldValue::number(self.position),
            BannerField::ImageRef => FieldValue::optional_text(Some(self.image_ref.as_str())),
            BannerField::LinkUrl => FieldValue::Text(&self.link_url),
            BannerField::DisplayStart => FieldValue::Date(self.display_start),
            BannerField::DisplayEnd => FieldValue::Date(self.display_end),
            BannerField::PublicationStatus => FieldValue::choice(self.publication_status),
            BannerField::Clicks => FieldValue::number(self.clicks),
            BannerField::Placed => FieldValue::Flag(self.is_placed()),
        }
    }
}

impl Editable for AdBanner {
    type Draft = AdBannerDraft;

    fn blank(id: BannerId, today: NaiveDate) -> Self {
        AdBanner {
            id,
            position: 0,
            image_ref: String::new(),
            link_url: String::new(),
            display_start: today,
            display_end: today,
            publication_status: PublicationStatus::Private,
            clicks: 0,
        }
    }

    /// The picked file is not known after upload, so `image_file` stays empty.
    fn to_draft(&self) -> AdBannerDraft {
        AdBannerDraft {
            position: Some(self.position),
            image_file: None,
            link_url: Some(self.link_url.clone()),
            display_start: Some(date_text(self.display_start)),
            display_end: Some(date_text(self.display_end)),
            publication_status: Some(self.publication_status),
        }
    }

    fn check_draft(draft: &AdBannerDraft, v: &mut Validator) {
        v.required_text("image_file", draft.image_file.as_deref());
        v.required_text("link_url", draft.link_url.as_deref());
        v.url("link_url", draft.link_url.as_deref());
        check_required_date(v, "display_start", draft.display_start.as_ref());
        check_required_date(v, "display_end", draft.display_end.as_ref());
    }

    fn apply(&mut self, draft: AdBannerDraft, _today: NaiveDate) {
        merge(&mut self.position, draft.position);
        if let Some(file) = draft.image_file {
            self.image_ref = local_file_ref("banners", &file);
        }
        merge(&mut self.link_url, draft.link_url);
        merge_date(&mut self.display_start, draft.display_start);
        merge_date(&mut self.display_end, draft.display_end);
        merge(&mut self.publication_status, draft.publication_status);
    }

    fn check_record(&self, v: &mut Validator) {
        v.ordered(
            "display_start",
            &self.display_start,
            "display_end",
            &self.display_end,
        );
    }
}
