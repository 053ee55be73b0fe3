use chrono::NaiveDate;
use fpadmin_types::{
    BillingCycle, PaymentUrl, PaymentUrlDraft, PaymentUrlId, PaymentUrlStatus, PlanId,
    PlanStatus, SubscriptionPlan, SubscriptionPlanDraft,
};

use super::{check_required_date, date_text, merge, merge_date};
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::Validator;

const MAX_AMOUNT_YEN: f64 = 10_000_000.0;

field_enum!(
    PaymentUrlField {
        Id => "id",
        UrlName => "url_name",
        Url => "url",
        Description => "description",
        Amount => "amount",
        Status => "status",
        CreatedAt => "created_at",
        LastPaymentDate => "last_payment_date",
        PaymentCount => "payment_count",
    }
);

impl Queryable for PaymentUrl {
    type Field = PaymentUrlField;

    const SEARCH_FIELDS: &'static [PaymentUrlField] =
        &[PaymentUrlField::Id, PaymentUrlField::UrlName];
    const SORTABLE: &'static [PaymentUrlField] = &[
        PaymentUrlField::Id,
        PaymentUrlField::UrlName,
        PaymentUrlField::Url,
        PaymentUrlField::Amount,
        PaymentUrlField::Status,
        PaymentUrlField::CreatedAt,
        PaymentUrlField::LastPaymentDate,
        PaymentUrlField::PaymentCount,
    ];
    const SUMMARY_FIELDS: &'static [PaymentUrlField] = &[
        PaymentUrlField::Id,
        PaymentUrlField::UrlName,
        PaymentUrlField::Status,
        PaymentUrlField::CreatedAt,
        PaymentUrlField::LastPaymentDate,
        PaymentUrlField::PaymentCount,
    ];
    const STATUS_FIELD: Option<PaymentUrlField> = Some(PaymentUrlField::Status);
    const FLAG_FIELDS: &'static [PaymentUrlField] = &[];
    const DATE_FIELD: Option<PaymentUrlField> = Some(PaymentUrlField::CreatedAt);
    const DEFAULT_SORT: PaymentUrlField = PaymentUrlField::CreatedAt;

    fn field<'a>(&'a self, field: PaymentUrlField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            PaymentUrlField::Id => FieldValue::Text(self.id.as_ref()),
            PaymentUrlField::UrlName => FieldValue::Text(&self.url_name),
            PaymentUrlField::Url => FieldValue::Text(&self.url),
            PaymentUrlField::Description => {
                FieldValue::optional_text(Some(self.description.as_str()))
            }
            PaymentUrlField::Amount => FieldValue::number(self.amount),
            PaymentUrlField::Status => FieldValue::choice(self.status),
            PaymentUrlField::CreatedAt => FieldValue::Date(self.created_at),
            PaymentUrlField::LastPaymentDate => self
                .last_payment_date
                .map_or(FieldValue::Missing, FieldValue::Date),
            PaymentUrlField::PaymentCount => FieldValue::number(self.payment_count),
        }
    }
}

impl Editable for PaymentUrl {
    type Draft = PaymentUrlDraft;

    fn blank(id: PaymentUrlId, today: NaiveDate) -> Self {
        PaymentUrl {
            id,
            url_name: String::new(),
            url: String::new(),
            description: String::new(),
            amount: 0,
            status: PaymentUrlStatus::Active,
            created_at: today,
            last_payment_date: None,
            payment_count: 0,
        }
    }

    fn to_draft(&self) -> PaymentUrlDraft {
        PaymentUrlDraft {
            url_name: Some(self.url_name.clone()),
            url: Some(self.url.clone()),
            description: Some(self.description.clone()),
            amount: Some(self.amount),
            status: Some(self.status),
        }
    }

    fn check_draft(draft: &PaymentUrlDraft, v: &mut Validator) {
        v.required_text("url_name", draft.url_name.as_deref());
        v.required_text("url", draft.url.as_deref());
        v.url("url", draft.url.as_deref());
        v.required("amount", draft.amount.as_ref());
        v.range("amount", draft.amount.map(f64::from), 1.0, MAX_AMOUNT_YEN);
    }

    fn apply(&mut self, draft: PaymentUrlDraft, _today: NaiveDate) {
        merge(&mut self.url_name, draft.url_name);
        merge(&mut self.url, draft.url);
        if let Some(description) = draft.description {
            self.description = description.trim().to_string();
        }
        merge(&mut self.amount, draft.amount);
        merge(&mut self.status, draft.status);
    }
}

field_enum!(
    PlanField {
        Id => "id",
        PlanName => "plan_name",
        Price => "price",
        BillingCycle => "billing_cycle",
        Status => "status",
        SubscriberCount => "subscriber_count",
        CreatedAt => "created_at",
    }
);

impl Queryable for SubscriptionPlan {
    type Field = PlanField;

    const SEARCH_FIELDS: &'static [PlanField] = &[PlanField::Id, PlanField::PlanName];
    const SORTABLE: &'static [PlanField] = &[
        PlanField::Id,
        PlanField::PlanName,
        PlanField::Price,
        PlanField::SubscriberCount,
        PlanField::CreatedAt,
    ];
    const SUMMARY_FIELDS: &'static [PlanField] = &[
        PlanField::Id,
        PlanField::PlanName,
        PlanField::Price,
        PlanField::BillingCycle,
        PlanField::Status,
        PlanField::SubscriberCount,
    ];
    const STATUS_FIELD: Option<PlanField> = Some(PlanField::Status);
    const FLAG_FIELDS: &'static [PlanField] = &[];
    const DATE_FIELD: Option<PlanField> = Some(PlanField::CreatedAt);
    const DEFAULT_SORT: PlanField = PlanField::CreatedAt;

    fn field<'a>(&'a self, field: PlanField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            PlanField::Id => FieldValue::Text(self.id.as_ref()),
            PlanField::PlanName => FieldValue::Text(&self.plan_name),
            PlanField::Price => FieldValue::number(self.price),
            PlanField::BillingCycle => FieldValue::choice(self.billing_cycle),
            PlanField::Status => FieldValue::choice(self.status),
            PlanField::SubscriberCount => FieldValue::number(self.subscriber_count),
            PlanField::CreatedAt => FieldValue::Date(self.created_at),
        }
    }
}

impl Editable for SubscriptionPlan {
    type Draft = SubscriptionPlanDraft;

    fn blank(id: PlanId, today: NaiveDate) -> Self {
        SubscriptionPlan {
            id,
            plan_name: String::new(),
            price: 0,
            billing_cycle: BillingCycle::Monthly,
            status: PlanStatus::Active,
            subscriber_count: 0,
            created_at: today,
        }
    }

    fn to_draft(&self) -> SubscriptionPlanDraft {
        SubscriptionPlanDraft {
            plan_name: Some(self.plan_name.clone()),
            price: Some(self.price),
            billing_cycle: Some(self.billing_cycle),
            status: Some(self.status),
            subscriber_count: Some(self.subscriber_count),
            created_at: Some(date_text(self.created_at)),
        }
    }

    fn check_draft(draft: &SubscriptionPlanDraft, v: &mut Validator) {
        v.required_text("plan_name", draft.plan_name.as_deref());
        v.required("price", draft.price.as_ref());
        v.range("price", draft.price.map(f64::from), 0.0, MAX_AMOUNT_YEN);
        if draft.created_at.is_some() {
            check_required_date(v, "created_at", draft.created_at.as_ref());
        }
    }

    fn apply(&mut self, draft: SubscriptionPlanDraft, _today: NaiveDate) {
        merge(&mut self.plan_name, draft.plan_name);
        merge(&mut self.price, draft.price);
        merge(&mut self.billing_cycle, draft.billing_cycle);
        merge(&mut self.status, draft.status);
        merge(&mut self.subscriber_count, draft.subscriber_count);
        merge_date(&mut self.created_at, draft.created_at);
    }
}
