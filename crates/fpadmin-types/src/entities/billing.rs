use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    BillingCycle, EntityKind, InsertPosition, PaymentUrlId, PaymentUrlStatus, PlanId, PlanStatus,
    Record,
};

/// Subscription plan offered to FPs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub plan_name: String,
    /// Price per billing cycle in yen, tax excluded
    pub price: u32,
    pub billing_cycle: BillingCycle,
    pub status: PlanStatus,
    #[serde(default)]
    pub subscriber_count: u32,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubscriptionPlanDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for SubscriptionPlan {
    type Id = PlanId;

    const PREFIX: &'static str = "SP";
    const KIND: EntityKind = EntityKind::Plan;
    const INSERT_AT: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &PlanId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.plan_name
    }
}

/// Checkout link handed out for card payments.
///
/// Only metadata: nothing here talks to a payment processor. The payment
/// figures are reported by the processor and only shown here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentUrl {
    pub id: PaymentUrlId,
    pub url_name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Amount charged in yen
    pub amount: u32,
    pub status: PaymentUrlStatus,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub last_payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaymentUrlDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentUrlStatus>,
}

impl Record for PaymentUrl {
    type Id = PaymentUrlId;

    const PREFIX: &'static str = "URL";
    const KIND: EntityKind = EntityKind::PaymentUrl;
    const INSERT_AT: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &PaymentUrlId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.url_name
    }
}
