use chrono::NaiveDate;
use fpadmin_types::{
    FpId, MatchingStage, ReviewId, ReviewRecord, ReviewRecordDraft, ReviewerType, UserId,
};

use super::{check_required_date, date_text, merge, merge_date};
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::{Validator, ViolationKind};

field_enum!(
    ReviewField {
        Id => "id",
        PostedAt => "posted_at",
        ReviewerType => "reviewer_type",
        UserId => "user_id",
        /// Name of the reviewing end user; operator reviews have none
        ReviewerName => "reviewer_name",
        FpId => "fp_id",
        FpName => "fp_name",
        FpType => "fp_type",
        Rating => "rating",
        ReviewContent => "review_content",
        StatusAtReview => "status_at_review",
        ConsultationTopics => "consultation_topics",
    }
);

impl Queryable for ReviewRecord {
    type Field = ReviewField;

    const SEARCH_FIELDS: &'static [ReviewField] = &[
        ReviewField::Id,
        ReviewField::FpName,
        ReviewField::ReviewerName,
    ];
    const SORTABLE: &'static [ReviewField] = &[
        ReviewField::Id,
        ReviewField::PostedAt,
        ReviewField::FpName,
        ReviewField::Rating,
        ReviewField::StatusAtReview,
    ];
    const SUMMARY_FIELDS: &'static [ReviewField] = &[
        ReviewField::Id,
        ReviewField::PostedAt,
        ReviewField::ReviewerType,
        ReviewField::ReviewerName,
        ReviewField::FpName,
        ReviewField::Rating,
        ReviewField::StatusAtReview,
    ];
    const STATUS_FIELD: Option<ReviewField> = Some(ReviewField::StatusAtReview);
    const FLAG_FIELDS: &'static [ReviewField] = &[];
    const DATE_FIELD: Option<ReviewField> = Some(ReviewField::PostedAt);
    const DEFAULT_SORT: ReviewField = ReviewField::PostedAt;

    fn field<'a>(&'a self, field: ReviewField, lookup: &'a dyn Lookup) -> FieldValue<'a> {
        let fp = move || lookup.fp(&self.fp_id);
        match field {
            ReviewField::Id => FieldValue::Text(self.id.as_ref()),
            ReviewField::PostedAt => FieldValue::Date(self.posted_at),
            ReviewField::ReviewerType => FieldValue::choice(self.reviewer_type),
            ReviewField::UserId => {
                FieldValue::optional_text(self.user_id.as_ref().map(|id| id.as_ref()))
            }
            ReviewField::ReviewerName => FieldValue::optional_text(
                self.user_id
                    .as_ref()
                    .filter(|_| self.reviewer_type == ReviewerType::EndUser)
                    .and_then(|id| lookup.user(id))
                    .map(|user| user.name.as_str()),
            ),
            ReviewField::FpId => FieldValue::Text(self.fp_id.as_ref()),
            ReviewField::FpName => FieldValue::optional_text(fp().map(|fp| fp.name.as_str())),
            ReviewField::FpType => fp().map_or(FieldValue::Missing, |fp| {
                FieldValue::choice(fp.fp_type)
            }),
            ReviewField::Rating => FieldValue::number(self.rating),
            ReviewField::ReviewContent => {
                FieldValue::optional_text(Some(self.review_content.as_str()))
            }
            ReviewField::StatusAtReview => FieldValue::choice(self.status_at_review),
            ReviewField::ConsultationTopics => FieldValue::list(&self.consultation_topics),
        }
    }
}

impl Editable for ReviewRecord {
    type Draft = ReviewRecordDraft;

    fn blank(id: ReviewId, today: NaiveDate) -> Self {
        ReviewRecord {
            id,
            posted_at: today,
            reviewer_type: ReviewerType::SystemAdmin,
            user_id: None,
            fp_id: FpId::new(""),
            rating: 0,
            review_content: String::new(),
            status_at_review: MatchingStage::Interviewed,
            consultation_topics: Vec::new(),
        }
    }

    fn to_draft(&self) -> ReviewRecordDraft {
        ReviewRecordDraft {
            posted_at: Some(date_text(self.posted_at)),
            reviewer_type: Some(self.reviewer_type),
            user_id: self.user_id.clone(),
            fp_id: Some(self.fp_id.clone()),
            rating: Some(self.rating),
            review_content: Some(self.review_content.clone()),
            status_at_review: Some(self.status_at_review),
            consultation_topics: Some(self.consultation_topics.clone()),
        }
    }

    fn check_draft(draft: &ReviewRecordDraft, v: &mut Validator) {
        v.required_text("fp_id", draft.fp_id.as_ref().map(|id| id.as_ref()));
        v.required("rating", draft.rating.as_ref());
        v.range("rating", draft.rating.map(f64::from), 1.0, 5.0);
        v.required_text("review_content", draft.review_content.as_deref());
        if draft.posted_at.is_some() {
            check_required_date(v, "posted_at", draft.posted_at.as_ref());
        }
    }

    fn apply(&mut self, draft: ReviewRecordDraft, _today: NaiveDate) {
        merge_date(&mut self.posted_at, draft.posted_at);
        merge(&mut self.reviewer_type, draft.reviewer_type);
        if let Some(user_id) = draft.user_id {
            let trimmed = user_id.as_ref().trim();
            self.user_id = (!trimmed.is_empty()).then(|| UserId::new(trimmed));
        }
        if let Some(fp_id) = draft.fp_id {
            self.fp_id = FpId::new(fp_id.as_ref().trim());
        }
        merge(&mut self.rating, draft.rating);
        merge(&mut self.review_content, draft.review_content);
        merge(&mut self.status_at_review, draft.status_at_review);
        if let Some(topics) = draft.consultation_topics {
            self.consultation_topics = topics
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }
    }

    /// End-user reviews name their author, and a review is only written
    /// while the consultation is still moving along the pipeline.
    fn check_record(&self, v: &mut Validator) {
        if self.reviewer_type == ReviewerType::EndUser && self.user_id.is_none() {
            v.reject("user_id", ViolationKind::Required);
        }
        if !self.status_at_review.is_pipeline() {
            v.reject(
                "status_at_review",
                ViolationKind::InvalidFormat {
                    expected: "matching stage from 新規 to 契約",
                },
            );
        }
    }
}
