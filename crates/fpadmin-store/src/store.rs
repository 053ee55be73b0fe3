use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fpadmin_engine::{
    EditMode, Editable, Lookup, ValidationReport, ViolationKind, validate_submission,
};
use fpadmin_types::{
    AdBanner, EntityKind, FaqItem, ForeignKey, Fp, FpId, LegalDocument, MatchingAllocation,
    MatchingHistory, Partner, PartnerId, PaymentUrl, Record, RecordKey, ReviewRecord,
    SubscriptionPlan, User, UserId,
};

use crate::collection::Collection;
use crate::{Error, Result};

/// Every collection the console manages, owned in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    users: Collection<User>,
    fps: Collection<Fp>,
    partners: Collection<Partner>,
    allocations: Collection<MatchingAllocation>,
    histories: Collection<MatchingHistory>,
    reviews: Collection<ReviewRecord>,
    payment_urls: Collection<PaymentUrl>,
    plans: Collection<SubscriptionPlan>,
    faqs: Collection<FaqItem>,
    legal_documents: Collection<LegalDocument>,
    banners: Collection<AdBanner>,
}

/// Record type with a home collection in [`Store`].
pub trait Stored: Editable {
    fn collection(store: &Store) -> &Collection<Self>;
    fn collection_mut(store: &mut Store) -> &mut Collection<Self>;
}

macro_rules! stored {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Stored for $ty {
                fn collection(store: &Store) -> &Collection<Self> {
                    &store.$field
                }

                fn collection_mut(store: &mut Store) -> &mut Collection<Self> {
                    &mut store.$field
                }
            }
        )+

        impl Store {
            /// Re-check every collection after loading from outside.
            pub fn verify(&mut self) -> Result<()> {
                $(self.$field.verify()?;)+
                Ok(())
            }

            /// Record counts per entity, in navigation order
            pub fn counts(&self) -> Vec<(EntityKind, usize)> {
                vec![$((<$ty as Record>::KIND, self.$field.len())),+]
            }
        }
    };
}

stored!(
    User => users,
    Fp => fps,
    Partner => partners,
    MatchingAllocation => allocations,
    MatchingHistory => histories,
    ReviewRecord => reviews,
    PaymentUrl => payment_urls,
    SubscriptionPlan => plans,
    FaqItem => faqs,
    LegalDocument => legal_documents,
    AdBanner => banners,
);

/// Outcome of following one foreign key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedReference {
    #[serde(flatten)]
    pub key: ForeignKey,
    /// Display name of the target, `None` when it does not exist
    pub name: Option<String>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection<T: Stored>(&self) -> &Collection<T> {
        T::collection(self)
    }

    pub fn records<T: Stored>(&self) -> &[T] {
        T::collection(self).records()
    }

    pub fn get<T: Stored>(&self, id: &str) -> Result<&T> {
        T::collection(self).require(id)
    }

    /// Replace a whole collection, e.g. with seed data.
    pub fn load<T: Stored>(&mut self, records: Vec<T>) -> Result<()> {
        *T::collection_mut(self) = Collection::from_records(records)?;
        Ok(())
    }

    pub fn resolve_user(&self, id: &UserId) -> Result<&User> {
        self.get(id.as_str())
    }

    pub fn resolve_fp(&self, id: &FpId) -> Result<&Fp> {
        self.get(id.as_str())
    }

    pub fn resolve_partner(&self, id: &PartnerId) -> Result<&Partner> {
        self.get(id.as_str())
    }

    /// Display name of whatever `key` points at.
    pub fn resolve(&self, key: &ForeignKey) -> Result<&str> {
        let id = key.id.as_str();
        match key.target {
            EntityKind::User => self.get::<User>(id).map(Record::display_name),
            EntityKind::Fp => self.get::<Fp>(id).map(Record::display_name),
            EntityKind::Partner => self.get::<Partner>(id).map(Record::display_name),
            EntityKind::Allocation => self.get::<MatchingAllocation>(id).map(Record::display_name),
            EntityKind::History => self.get::<MatchingHistory>(id).map(Record::display_name),
            EntityKind::Review => self.get::<ReviewRecord>(id).map(Record::display_name),
            EntityKind::PaymentUrl => self.get::<PaymentUrl>(id).map(Record::display_name),
            EntityKind::Plan => self.get::<SubscriptionPlan>(id).map(Record::display_name),
            EntityKind::Faq => self.get::<FaqItem>(id).map(Record::display_name),
            EntityKind::LegalDocument => self.get::<LegalDocument>(id).map(Record::display_name),
            EntityKind::Banner => self.get::<AdBanner>(id).map(Record::display_name),
        }
    }

    pub fn resolve_references<T: Record>(&self, record: &T) -> Vec<ResolvedReference> {
        record
            .references()
            .into_iter()
            .map(|key| {
                let name = self.resolve(&key).ok().map(str::to_string);
                ResolvedReference { key, name }
            })
            .collect()
    }

    /// Run the create flow: validate against a blank record, then insert
    /// under a fresh id.
    pub fn create<T: Stored>(&mut self, draft: &T::Draft, today: NaiveDate) -> Result<T::Id> {
        let id = T::collection(self).peek_id();
        let blank = T::blank(id.clone(), today);
        let record = validate_submission(EditMode::Create, &blank, draft, today)?;
        self.check_references(&record, None)?;

        T::collection_mut(self).insert(record)?;
        Ok(id)
    }

    /// Merge submitted fields into an existing record. Derived fields are
    /// stamped with `today`.
    pub fn update<T: Stored>(&mut self, id: &str, draft: &T::Draft, today: NaiveDate) -> Result<&T> {
        let current = self.get::<T>(id)?.clone();
        let record = validate_submission(EditMode::Edit, &current, draft, today)?;
        self.check_references(&record, Some(&current))?;

        T::collection_mut(self).replace(record)?;
        self.get(id)
    }

    /// Opening a user's detail clears the "new" marker. Returns whether
    /// anything changed.
    pub fn mark_user_seen(&mut self, id: &UserId) -> Result<bool> {
        let mut user = self.resolve_user(id)?.clone();
        if !user.is_new {
            return Ok(false);
        }
        user.is_new = false;
        self.users.replace(user)?;
        Ok(true)
    }

    /// Remove a record; deleting an id that is not there changes nothing.
    pub fn delete<T: Stored>(&mut self, id: &str) -> Option<T> {
        T::collection_mut(self).remove(id)
    }

    /// References must point at existing records. On edit, references the
    /// submission left unchanged are not re-checked, so a record whose target
    /// was deleted earlier can still be edited.
    fn check_references<T: Record>(&self, record: &T, current: Option<&T>) -> Result<()> {
        let unchanged = current.map(Record::references).unwrap_or_default();
        let mut report = ValidationReport::default();

        for key in record.references() {
            if unchanged.contains(&key) || self.resolve(&key).is_ok() {
                continue;
            }
            report.push(
                key.field,
                ViolationKind::UnknownReference {
                    target: key.target,
                    id: key.id.clone(),
                },
            );
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(report))
        }
    }
}

/// Joined list columns read straight from the collections.
impl Lookup for Store {
    fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id.as_str())
    }

    fn fp(&self, id: &FpId) -> Option<&Fp> {
        self.fps.get(id.as_str())
    }

    fn partner(&self, id: &PartnerId) -> Option<&Partner> {
        self.partners.get(id.as_str())
    }
}
