use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use fpadmin_types::{InsertPosition, Record, RecordKey, format_id, id_sequence};

use crate::{Error, Result};

/// Ordered records of one entity plus the id sequence that feeds new records.
///
/// `next_seq` only moves forward: deleting the newest record never lets its
/// id be handed out again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    records: Vec<T>,
    next_seq: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_seq: 1,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed records, keeping their order.
    pub fn from_records(records: Vec<T>) -> Result<Self> {
        let mut collection = Self {
            records,
            next_seq: 1,
        };
        collection.verify()?;
        Ok(collection)
    }

    /// Reject duplicate ids and move the sequence past every generated id.
    pub fn verify(&mut self) -> Result<()> {
        let mut seen = HashSet::new();
        for record in &self.records {
            let id = record.id().as_str();
            if !seen.insert(id) {
                return Err(Error::DuplicateId {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
        }

        let highest = self
            .records
            .iter()
            .filter_map(|r| id_sequence(r.id().as_str(), T::PREFIX))
            .max()
            .unwrap_or(0);
        self.next_seq = self.next_seq.max(highest + 1);
        Ok(())
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn require(&self, id: &str) -> Result<&T> {
        self.get(id).ok_or_else(|| Error::not_found(T::KIND, id))
    }

    /// Id the next created record will receive
    pub fn peek_id(&self) -> T::Id {
        T::Id::from(format_id(T::PREFIX, self.next_seq))
    }

    /// Add a new record at the entity's insert position.
    pub fn insert(&mut self, record: T) -> Result<()> {
        let id = record.id().as_str();
        if self.contains(id) {
            return Err(Error::DuplicateId {
                kind: T::KIND,
                id: id.to_string(),
            });
        }

        if let Some(seq) = id_sequence(id, T::PREFIX) {
            self.next_seq = self.next_seq.max(seq + 1);
        }

        match T::INSERT_AT {
            InsertPosition::Front => self.records.insert(0, record),
            InsertPosition::Back => self.records.push(record),
        }
        Ok(())
    }

    /// Swap in a new version of an existing record, keeping its position.
    pub fn replace(&mut self, record: T) -> Result<()> {
        let id = record.id().as_str().to_string();
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id().as_str() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        *slot = record;
        Ok(())
    }

    /// Remove by id; a missing id leaves the collection untouched.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.records.iter().position(|r| r.id().as_str() == id)?;
        Some(self.records.remove(index))
    }
}
