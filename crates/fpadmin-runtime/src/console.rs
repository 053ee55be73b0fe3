use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use fpadmin_engine::{FieldKey, Page, SortDirection};
use fpadmin_store::{DetailSurface, ResolvedReference, Store, Stored};
use fpadmin_types::{EntityKind, RecordKey, User, UserId};

use crate::config::Config;
use crate::request::ListRequest;
use crate::Result;

/// A record together with the names its foreign keys resolve to
#[derive(Debug, Clone, Serialize)]
pub struct RecordDetail<T> {
    pub record: T,
    pub references: Vec<ResolvedReference>,
}

impl<T> RecordDetail<T> {
    pub fn unresolved(&self) -> impl Iterator<Item = &ResolvedReference> {
        self.references.iter().filter(|r| r.name.is_none())
    }
}

/// One rendered page plus the sort that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    #[serde(flatten)]
    pub page: Page<T>,
    pub sort: &'static str,
    pub direction: SortDirection,
}

/// Where the console keeps its config and, optionally, its records.
#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    pub data_dir: PathBuf,
    /// Snapshot to load from and write mutations back to. Without one the
    /// store is seeded fresh and changes are dropped with the process.
    pub data_file: Option<PathBuf>,
    /// Date used for new records; the local date when unset
    pub today: Option<NaiveDate>,
}

/// Entry point for every operation the admin screens perform.
pub struct Console {
    store: Store,
    config: Config,
    data_file: Option<PathBuf>,
    today: NaiveDate,
}

impl Console {
    pub fn open(options: ConsoleOptions) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(&options.data_dir))?;
        Self::open_with_config(options, config)
    }

    /// Like [`Console::open`], with a config the caller already loaded.
    pub fn open_with_config(options: ConsoleOptions, config: Config) -> Result<Self> {
        let store = match &options.data_file {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading store snapshot");
                Store::load_snapshot(path)?
            }
            _ => Store::seeded(config.seed.demo_seed)?,
        };

        Ok(Self {
            store,
            config,
            data_file: options.data_file,
            today: options.today.unwrap_or_else(|| Local::now().date_naive()),
        })
    }

    /// Build a console over an existing store, without persistence.
    pub fn from_parts(store: Store, config: Config, today: NaiveDate) -> Self {
        Self {
            store,
            config,
            data_file: None,
            today,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn counts(&self) -> Vec<(EntityKind, usize)> {
        self.store.counts()
    }

    pub fn list<T: Stored>(&self, request: &ListRequest) -> Result<Listing<T>> {
        let view = request.to_view::<T>(&self.config.list)?;
        let page = view.render(self.store.records::<T>(), &self.store);
        let sort = view.sort();

        debug!(
            entity = %T::KIND,
            matched = page.total_count,
            page = page.page_number,
            pages = page.page_count,
            shown = page.items.len(),
            "listed records"
        );

        Ok(Listing {
            page: page.map(Clone::clone),
            sort: sort.key.name(),
            direction: sort.direction,
        })
    }

    pub fn get<T: Stored>(&self, id: &str) -> Result<RecordDetail<T>> {
        let record = self.store.get::<T>(id)?.clone();
        let references = self.store.resolve_references(&record);

        for missing in references.iter().filter(|r| r.name.is_none()) {
            warn!(
                entity = %T::KIND,
                id,
                field = missing.key.field,
                target = %missing.key.target,
                target_id = %missing.key.id,
                "reference does not resolve"
            );
        }

        Ok(RecordDetail { record, references })
    }

    /// Open a user's detail. The first open clears the "new" marker, which
    /// is written back like any other mutation.
    pub fn open_user(&mut self, id: &str) -> Result<RecordDetail<User>> {
        if self.store.mark_user_seen(&UserId::new(id))? {
            debug!(id, "user marked as seen");
            self.persist()?;
        }
        self.get::<User>(id)
    }

    /// Draft pre-populated from an existing record, as the edit panel shows it.
    pub fn draft_for<T: Stored>(&self, id: &str) -> Result<T::Draft> {
        let mut surface = DetailSurface::<T>::new();
        surface.open_edit(&self.store, id)?;
        Ok(surface.draft().clone())
    }

    pub fn create<T: Stored>(&mut self, draft: T::Draft) -> Result<T> {
        let mut surface = DetailSurface::<T>::new();
        surface.open_create();
        surface.set_draft(draft);
        let id = surface.submit(&mut self.store, self.today)?;

        info!(entity = %T::KIND, id = id.as_str(), "created record");
        self.persist()?;
        Ok(self.store.get::<T>(id.as_str())?.clone())
    }

    pub fn update<T: Stored>(&mut self, id: &str, draft: T::Draft) -> Result<T> {
        let mut surface = DetailSurface::<T>::new();
        surface.open_edit(&self.store, id)?;
        surface.set_draft(draft);
        let id = surface.submit(&mut self.store, self.today)?;

        info!(entity = %T::KIND, id = id.as_str(), "updated record");
        self.persist()?;
        Ok(self.store.get::<T>(id.as_str())?.clone())
    }

    /// Delete by id. A missing id leaves the store untouched and returns `None`.
    pub fn delete<T: Stored>(&mut self, id: &str) -> Result<Option<T>> {
        let removed = self.store.delete::<T>(id);
        match &removed {
            Some(record) => {
                info!(entity = %T::KIND, id = record.id().as_str(), "deleted record");
                self.persist()?;
            }
            None => debug!(entity = %T::KIND, id, "nothing to delete"),
        }
        Ok(removed)
    }

    pub fn export(&self) -> Result<String> {
        Ok(self.store.to_snapshot_json()?)
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        self.store.save_snapshot(path)?;
        debug!(path = %path.display(), "wrote store snapshot");
        Ok(())
    }
}

/// Write the default config into `data_dir` unless one is already there.
/// Returns the config now in effect and whether a file was written.
pub fn init_config(data_dir: &Path) -> Result<(Config, bool)> {
    let path = Config::path_in(data_dir);
    if path.exists() {
        return Ok((Config::load_from(&path)?, false));
    }

    let config = Config::default();
    config.save_to(&path)?;
    info!(path = %path.display(), "wrote default config");
    Ok((config, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use fpadmin_types::{PlanStatus, SubscriptionPlan, SubscriptionPlanDraft};

    fn console() -> Console {
        Console::from_parts(
            Store::seeded(42).unwrap(),
            Config::default(),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        )
    }

    #[test]
    fn test_failed_create_leaves_store_unchanged() {
        let mut console = console();
        let before = console.store().records::<SubscriptionPlan>().len();

        let err = console
            .create::<SubscriptionPlan>(SubscriptionPlanDraft::default())
            .unwrap_err();

        assert!(err.validation_report().is_some());
        assert_eq!(console.store().records::<SubscriptionPlan>().len(), before);
    }

    #[test]
    fn test_update_returns_merged_record() {
        let mut console = console();
        let draft = SubscriptionPlanDraft {
            status: Some(PlanStatus::Inactive),
            ..Default::default()
        };

        let plan = console.update::<SubscriptionPlan>("SP001", draft).unwrap();
        assert_eq!(plan.status, PlanStatus::Inactive);
    }

    #[test]
    fn test_unknown_id_is_store_not_found() {
        let console = console();
        match console.get::<SubscriptionPlan>("SP999") {
            Err(Error::Store(err)) => assert!(err.is_not_found()),
            other => panic!("unexpected: {:?}", other.map(|d| d.record.id)),
        }
    }

    #[test]
    fn test_open_user_clears_new_marker() {
        let mut console = console();
        assert!(console.store().get::<User>("U010").unwrap().is_new);

        let detail = console.open_user("U010").unwrap();
        assert!(!detail.record.is_new);
        assert!(!console.store().get::<User>("U010").unwrap().is_new);
    }
}
