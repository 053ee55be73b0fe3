use std::num::NonZeroUsize;

use fpadmin_engine::{FieldKey, ListView, Queryable, Selection, SortDirection, SortState};

use crate::config::ListConfig;
use crate::{Error, Result};

/// Untyped list parameters as they arrive from the command line.
///
/// Field and flag names are resolved against the target entity when the
/// request is turned into a [`ListView`].
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub search: Option<String>,
    /// Value for the entity's status selector
    pub status: Option<String>,
    /// Names of derived flags that must hold
    pub only: Vec<String>,
    /// Extra exact-match selectors, `(field, value)`
    pub selectors: Vec<(String, String)>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn only(mut self, flag: impl Into<String>) -> Self {
        self.only.push(flag.into());
        self
    }

    pub fn select(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.selectors.push((field.into(), value.into()));
        self
    }

    pub fn since(mut self, date: impl Into<String>) -> Self {
        self.since = Some(date.into());
        self
    }

    pub fn until(mut self, date: impl Into<String>) -> Self {
        self.until = Some(date.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: Option<SortDirection>) -> Self {
        self.sort = Some(field.into());
        self.direction = direction;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Build the list view for `T`, rejecting names the entity does not have.
    pub fn to_view<T: Queryable>(&self, list: &ListConfig) -> Result<ListView<T>> {
        let size = self.page_size.unwrap_or(list.default_page_size);
        if !list.page_size_options.contains(&size) {
            return Err(Error::InvalidRequest(format!(
                "page size {} is not one of {:?}",
                size, list.page_size_options
            )));
        }
        let size = NonZeroUsize::new(size)
            .ok_or_else(|| Error::InvalidRequest("page size must not be 0".to_string()))?;

        let mut view = ListView::<T>::new(size, list.default_direction);

        if let Some(term) = &self.search {
            view.set_search(term.as_str());
        }

        if let Some(status) = &self.status {
            let field = T::STATUS_FIELD.ok_or_else(|| {
                Error::InvalidRequest(format!("{} has no status filter", T::KIND))
            })?;
            view.set_selection(field, Selection::parse(status));
        }

        for (name, value) in &self.selectors {
            let field = lookup::<T>(name, <T::Field as FieldKey>::ALL, "field")?;
            view.set_selection(field, Selection::parse(value));
        }

        for name in &self.only {
            let field = lookup::<T>(name, T::FLAG_FIELDS, "flag")?;
            view.set_flag(field, true);
        }

        if self.since.is_some() || self.until.is_some() {
            if T::DATE_FIELD.is_none() {
                return Err(Error::InvalidRequest(format!(
                    "{} has no date filter",
                    T::KIND
                )));
            }
            view.set_date_range(self.since.clone(), self.until.clone());
        }

        if let Some(name) = &self.sort {
            let key = lookup::<T>(name, T::SORTABLE, "sort key")?;
            let direction = self.direction.unwrap_or(list.default_direction);
            view.set_sort(SortState::new(key, direction));
        } else if let Some(direction) = self.direction {
            view.set_sort(SortState::new(T::DEFAULT_SORT, direction));
        }

        view.go_to(self.page.unwrap_or(1));
        Ok(view)
    }
}

fn lookup<T: Queryable>(name: &str, allowed: &[T::Field], what: &str) -> Result<T::Field> {
    <T::Field as FieldKey>::parse(name)
        .filter(|f| allowed.contains(f))
        .ok_or_else(|| {
            let names: Vec<&str> = allowed.iter().map(|f| f.name()).collect();
            Error::InvalidRequest(format!(
                "unknown {} '{}' for {} (available: {})",
                what,
                name,
                T::KIND,
                names.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpadmin_engine::{AllocationField, UserField};
    use fpadmin_types::{MatchingAllocation, User};

    #[test]
    fn test_defaults_come_from_config() {
        let view = ListRequest::new()
            .to_view::<User>(&ListConfig::default())
            .unwrap();
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_size().get(), 30);
        assert_eq!(view.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn test_page_size_outside_options_is_rejected() {
        let err = ListRequest::new()
            .page_size(7)
            .to_view::<User>(&ListConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("page size 7"));
    }

    #[test]
    fn test_flags_resolve_by_name() {
        let view = ListRequest::new()
            .only("in-progress")
            .to_view::<MatchingAllocation>(&ListConfig::default())
            .unwrap();
        assert_eq!(view.filters().flags, vec![AllocationField::InProgress]);

        let view = ListRequest::new()
            .only("referred")
            .only("new")
            .to_view::<User>(&ListConfig::default())
            .unwrap();
        assert_eq!(view.filters().flags, vec![UserField::Referred, UserField::New]);
    }

    #[test]
    fn test_unknown_flag_lists_alternatives() {
        let err = ListRequest::new()
            .only("overdue")
            .to_view::<MatchingAllocation>(&ListConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("available: in_progress"));
    }

    #[test]
    fn test_sort_must_be_sortable() {
        let err = ListRequest::new()
            .sort("email", None)
            .to_view::<User>(&ListConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
