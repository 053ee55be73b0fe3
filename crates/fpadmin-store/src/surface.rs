use chrono::NaiveDate;

use fpadmin_engine::{EditMode, ValidationReport};
use fpadmin_types::RecordKey;

use crate::store::{Store, Stored};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceState<Id> {
    Closed,
    Create,
    Edit(Id),
}

/// Detail/edit panel bound to at most one record.
///
/// Opening always starts from a fresh draft; nothing carries over from a
/// previous open. A failed submit keeps the panel open with the report.
#[derive(Debug)]
pub struct DetailSurface<T: Stored> {
    state: SurfaceState<T::Id>,
    draft: T::Draft,
    report: Option<ValidationReport>,
}

impl<T: Stored> Default for DetailSurface<T> {
    fn default() -> Self {
        Self {
            state: SurfaceState::Closed,
            draft: T::Draft::default(),
            report: None,
        }
    }
}

impl<T: Stored> DetailSurface<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SurfaceState<T::Id> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SurfaceState::Closed
    }

    pub fn mode(&self) -> Option<EditMode> {
        match self.state {
            SurfaceState::Closed => None,
            SurfaceState::Create => Some(EditMode::Create),
            SurfaceState::Edit(_) => Some(EditMode::Edit),
        }
    }

    pub fn open_create(&mut self) {
        self.state = SurfaceState::Create;
        self.draft = T::Draft::default();
        self.report = None;
    }

    /// Open on an existing record with the draft pre-populated from it.
    pub fn open_edit(&mut self, store: &Store, id: &str) -> Result<()> {
        let record = store.get::<T>(id)?;
        self.draft = record.to_draft();
        self.state = SurfaceState::Edit(record.id().clone());
        self.report = None;
        Ok(())
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    /// Replace the draft with what the operator submitted
    pub fn set_draft(&mut self, draft: T::Draft) {
        self.draft = draft;
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Commit the draft to `store` and close. Returns the id of the record
    /// written.
    pub fn submit(&mut self, store: &mut Store, today: NaiveDate) -> Result<T::Id> {
        let outcome = match &self.state {
            SurfaceState::Closed => return Err(Error::SurfaceClosed),
            SurfaceState::Create => store.create::<T>(&self.draft, today),
            SurfaceState::Edit(id) => store
                .update::<T>(id.as_str(), &self.draft, today)
                .map(|_| id.clone()),
        };

        match outcome {
            Ok(id) => {
                self.cancel();
                Ok(id)
            }
            Err(Error::Validation(report)) => {
                self.report = Some(report.clone());
                Err(Error::Validation(report))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpadmin_types::{PlanStatus, SubscriptionPlan, SubscriptionPlanDraft};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_submit_on_closed_surface_fails() {
        let mut store = Store::new();
        let mut surface = DetailSurface::<SubscriptionPlan>::new();
        assert!(matches!(
            surface.submit(&mut store, today()),
            Err(Error::SurfaceClosed)
        ));
    }

    #[test]
    fn test_create_then_close() {
        let mut store = Store::new();
        let mut surface = DetailSurface::<SubscriptionPlan>::new();

        surface.open_create();
        *surface.draft_mut() = SubscriptionPlanDraft {
            plan_name: Some("基本プラン".to_string()),
            price: Some(45_000),
            ..Default::default()
        };
        let id = surface.submit(&mut store, today()).unwrap();

        assert_eq!(id.as_ref(), "SP001");
        assert!(!surface.is_open());
        assert_eq!(store.get::<SubscriptionPlan>("SP001").unwrap().status, PlanStatus::Active);
    }

    #[test]
    fn test_failed_submit_stays_open_with_report() {
        let mut store = Store::new();
        let mut surface = DetailSurface::<SubscriptionPlan>::new();

        surface.open_create();
        assert!(surface.submit(&mut store, today()).is_err());
        assert_eq!(surface.mode(), Some(EditMode::Create));
        assert!(surface.report().unwrap().has_error("plan_name"));
        assert!(store.records::<SubscriptionPlan>().is_empty());
    }

    #[test]
    fn test_reopen_discards_previous_draft() {
        let mut surface = DetailSurface::<SubscriptionPlan>::new();
        surface.open_create();
        surface.draft_mut().plan_name = Some("途中".to_string());
        surface.cancel();

        surface.open_create();
        assert_eq!(surface.draft(), &SubscriptionPlanDraft::default());
    }
}
