use chrono::NaiveDate;
use fpadmin_types::{Partner, PartnerDraft, PartnerId, PartnerStatus};

use super::merge;
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::Validator;

field_enum!(
    PartnerField {
        Id => "id",
        Name => "name",
        ContactEmail => "contact_email",
        LpUrl => "lp_url",
        Status => "status",
        LastUpdated => "last_updated",
    }
);

impl Queryable for Partner {
    type Field = PartnerField;

    const SEARCH_FIELDS: &'static [PartnerField] = &[
        PartnerField::Id,
        PartnerField::Name,
        PartnerField::ContactEmail,
    ];
    const SORTABLE: &'static [PartnerField] = &[
        PartnerField::Id,
        PartnerField::Name,
        PartnerField::ContactEmail,
        PartnerField::Status,
        PartnerField::LastUpdated,
    ];
    const SUMMARY_FIELDS: &'static [PartnerField] = &[
        PartnerField::Id,
        PartnerField::Name,
        PartnerField::ContactEmail,
        PartnerField::Status,
        PartnerField::LastUpdated,
    ];
    const STATUS_FIELD: Option<PartnerField> = Some(PartnerField::Status);
    const FLAG_FIELDS: &'static [PartnerField] = &[];
    const DATE_FIELD: Option<PartnerField> = Some(PartnerField::LastUpdated);
    const DEFAULT_SORT: PartnerField = PartnerField::LastUpdated;

    fn field<'a>(&'a self, field: PartnerField, _lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            PartnerField::Id => FieldValue::Text(self.id.as_ref()),
            PartnerField::Name => FieldValue::Text(&self.name),
            PartnerField::ContactEmail => FieldValue::Text(&self.contact_email),
            PartnerField::LpUrl => FieldValue::Text(&self.lp_url),
            PartnerField::Status => FieldValue::choice(self.status),
            PartnerField::LastUpdated => FieldValue::Date(self.last_updated),
        }
    }
}

impl Editable for Partner {
    type Draft = PartnerDraft;

    fn blank(id: PartnerId, today: NaiveDate) -> Self {
        Partner {
            id,
            name: String::new(),
            contact_email: String::new(),
            lp_url: String::new(),
            status: PartnerStatus::Active,
            last_updated: today,
        }
    }

    fn to_draft(&self) -> PartnerDraft {
        PartnerDraft {
            name: Some(self.name.clone()),
            contact_email: Some(self.contact_email.clone()),
            lp_url: Some(self.lp_url.clone()),
            status: Some(self.status),
        }
    }

    fn check_draft(draft: &PartnerDraft, v: &mut Validator) {
        v.required_text("name", draft.name.as_deref());
        v.required_text("contact_email", draft.contact_email.as_deref());
        v.email("contact_email", draft.contact_email.as_deref());
        v.required_text("lp_url", draft.lp_url.as_deref());
        v.url("lp_url", draft.lp_url.as_deref());
    }

    /// Every accepted save stamps `last_updated`.
    fn apply(&mut self, draft: PartnerDraft, today: NaiveDate) {
        merge(&mut self.name, draft.name);
        merge(&mut self.contact_email, draft.contact_email);
        merge(&mut self.lp_url, draft.lp_url);
        merge(&mut self.status, draft.status);
        self.last_updated = today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Detached;

    #[test]
    fn test_save_stamps_last_updated() {
        let created = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
        let mut partner = Partner::blank(PartnerId::new("P001"), created);

        partner.apply(
            PartnerDraft {
                status: Some(PartnerStatus::Suspended),
                ..Default::default()
            },
            today,
        );

        assert_eq!(partner.last_updated, today);
        assert_eq!(
            partner.field(PartnerField::LastUpdated, &Detached),
            FieldValue::Date(today)
        );
    }
}
