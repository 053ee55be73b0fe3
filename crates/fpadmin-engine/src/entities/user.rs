use chrono::NaiveDate;
use fpadmin_types::{PartnerId, User, UserDraft, UserId, VerificationStatus};

use super::{
    check_required_date, date_text, merge, merge_date, merge_optional_date, merge_optional_text,
};
use crate::edit::Editable;
use crate::field::{FieldValue, Lookup, Queryable, field_enum};
use crate::validation::Validator;

field_enum!(
    UserField {
        Id => "id",
        Name => "name",
        Furigana => "furigana",
        Email => "email",
        Phone => "phone",
        BirthDate => "birth_date",
        Prefecture => "prefecture",
        LineStatus => "line_status",
        LastLogin => "last_login",
        RegistrationDate => "registration_date",
        VerificationStatus => "verification_status",
        PartnerId => "partner_id",
        /// Name of the referring partner
        PartnerName => "partner_name",
        /// Not yet opened by an operator
        New => "new",
        /// Came in through a partner referral
        Referred => "referred",
    }
);

impl Queryable for User {
    type Field = UserField;

    const SEARCH_FIELDS: &'static [UserField] = &[
        UserField::Id,
        UserField::Name,
        UserField::Furigana,
        UserField::Email,
    ];
    const SORTABLE: &'static [UserField] = &[
        UserField::Id,
        UserField::Name,
        UserField::Furigana,
        UserField::RegistrationDate,
        UserField::LastLogin,
        UserField::VerificationStatus,
        UserField::PartnerName,
    ];
    const SUMMARY_FIELDS: &'static [UserField] = &[
        UserField::Id,
        UserField::Name,
        UserField::Email,
        UserField::RegistrationDate,
        UserField::VerificationStatus,
        UserField::PartnerName,
        UserField::New,
    ];
    const STATUS_FIELD: Option<UserField> = Some(UserField::VerificationStatus);
    const FLAG_FIELDS: &'static [UserField] = &[UserField::New, UserField::Referred];
    const DATE_FIELD: Option<UserField> = Some(UserField::RegistrationDate);
    const DEFAULT_SORT: UserField = UserField::RegistrationDate;

    fn field<'a>(&'a self, field: UserField, lookup: &'a dyn Lookup) -> FieldValue<'a> {
        match field {
            UserField::Id => FieldValue::Text(self.id.as_ref()),
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Furigana => FieldValue::optional_text(Some(self.furigana.as_str())),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Phone => FieldValue::optional_text(self.phone.as_deref()),
            UserField::BirthDate => self.birth_date.map_or(FieldValue::Missing, FieldValue::Date),
            UserField::Prefecture => FieldValue::optional_text(self.prefecture.as_deref()),
            UserField::LineStatus => self
                .line_status
                .map_or(FieldValue::Missing, FieldValue::choice),
            UserField::LastLogin => self.last_login.map_or(FieldValue::Missing, FieldValue::Date),
            UserField::RegistrationDate => FieldValue::Date(self.registration_date),
            UserField::VerificationStatus => FieldValue::choice(self.verification_status),
            UserField::PartnerId => {
                FieldValue::optional_text(self.partner_id.as_ref().map(|p| p.as_ref()))
            }
            UserField::PartnerName => FieldValue::optional_text(
                self.partner_id
                    .as_ref()
                    .and_then(|id| lookup.partner(id))
                    .map(|p| p.name.as_str()),
            ),
            UserField::New => FieldValue::Flag(self.is_new),
            UserField::Referred => FieldValue::Flag(self.partner_id.is_some()),
        }
    }
}

impl Editable for User {
    type Draft = UserDraft;

    /// Users created by an operator start unverified and already seen.
    fn blank(id: UserId, today: NaiveDate) -> Self {
        User {
            id,
            name: String::new(),
            furigana: String::new(),
            email: String::new(),
            phone: None,
            birth_date: None,
            prefecture: None,
            consultation_content: None,
            line_status: None,
            last_login: None,
            registration_date: today,
            verification_status: VerificationStatus::Unverified,
            partner_id: None,
            is_new: false,
        }
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: Some(self.name.clone()),
            furigana: Some(self.furigana.clone()),
            email: Some(self.email.clone()),
            phone: self.phone.clone(),
            birth_date: self.birth_date.map(date_text),
            prefecture: self.prefecture.clone(),
            consultation_content: self.consultation_content.clone(),
            line_status: self.line_status,
            registration_date: Some(date_text(self.registration_date)),
            verification_status: Some(self.verification_status),
            partner_id: self.partner_id.clone(),
            is_new: Some(self.is_new),
        }
    }

    fn check_draft(draft: &UserDraft, v: &mut Validator) {
        v.required_text("name", draft.name.as_deref());
        v.required_text("email", draft.email.as_deref());
        v.email("email", draft.email.as_deref());
        v.phone("phone", draft.phone.as_deref());
        v.date("birth_date", draft.birth_date.as_deref());
        if draft.registration_date.is_some() {
            check_required_date(v, "registration_date", draft.registration_date.as_ref());
        }
    }

    fn apply(&mut self, draft: UserDraft, _today: NaiveDate) {
        merge(&mut self.name, draft.name);
        merge(&mut self.furigana, draft.furigana);
        merge(&mut self.email, draft.email);
        merge_optional_text(&mut self.phone, draft.phone);
        merge_optional_date(&mut self.birth_date, draft.birth_date);
        merge_optional_text(&mut self.prefecture, draft.prefecture);
        merge_optional_text(&mut self.consultation_content, draft.consultation_content);
        if let Some(line) = draft.line_status {
            self.line_status = Some(line);
        }
        merge_date(&mut self.registration_date, draft.registration_date);
        merge(&mut self.verification_status, draft.verification_status);
        if let Some(partner) = draft.partner_id {
            self.partner_id = (!partner.as_ref().trim().is_empty())
                .then(|| PartnerId::new(partner.as_ref().trim()));
        }
        merge(&mut self.is_new, draft.is_new);
    }

    fn check_record(&self, v: &mut Validator) {
        if let Some(birth) = &self.birth_date {
            v.ordered(
                "birth_date",
                birth,
                "registration_date",
                &self.registration_date,
            );
        }
    }
}
