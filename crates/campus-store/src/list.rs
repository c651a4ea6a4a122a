//! Generic CRUD over one in-memory collection.
//!
//! `EntityList<R>` exclusively owns its records. Every mutation either
//! succeeds completely or leaves the collection untouched: the replacement
//! record is fully built and validated before the swap. After each mutation
//! the collection is re-sorted by [`Record::canonical_cmp`].

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use campus_core::clock::Clock;
use campus_core::errors::CoreError;
use campus_core::ids::{generate_id, prefix_for};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::query::Query;
use crate::record::Record;

/// Produces a candidate id for a prefix.
pub type IdSource = fn(&str) -> Result<String, CoreError>;

/// Attempts before giving up on finding an unused id.
const MAX_ID_ATTEMPTS: usize = 16;

pub struct EntityList<R: Record> {
    records: Vec<R>,
    clock: Arc<dyn Clock>,
    next_id: IdSource,
}

impl<R: Record> fmt::Debug for EntityList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityList")
            .field("entity", &R::ENTITY)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl<R: Record> EntityList<R> {
    /// An empty list.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            clock,
            next_id: generate_id,
        }
    }

    /// A list seeded with existing records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if two records share an id.
    pub fn with_records(records: Vec<R>, clock: Arc<dyn Clock>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }
        let mut list = Self {
            records,
            clock,
            next_id: generate_id,
        };
        list.resort();
        Ok(list)
    }

    /// Replace the id generator.
    #[must_use]
    pub fn with_id_source(mut self, source: IdSource) -> Self {
        self.next_id = source;
        self
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Like [`Self::get`], but a missing record is an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has `id`.
    pub fn find(&self, id: &str) -> Result<&R, StoreError> {
        self.get(id).ok_or_else(|| not_found::<R>(id))
    }

    /// Records in canonical order.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    /// Start a read-only query over the current records.
    #[must_use]
    pub fn query(&self) -> Query<'_, R> {
        Query::new(&self.records)
    }

    /// Validate `draft`, assign a fresh id, and insert the new record.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` with every failed field; the collection is
    /// unchanged.
    pub fn create(&mut self, draft: &R::Draft) -> Result<R, StoreError> {
        let today = self.today();
        let id = self.fresh_id()?;
        let record = R::from_draft(id, draft, today).map_err(rejected::<R>)?;
        Ok(self.insert(record))
    }

    /// Insert a fully built record. Used for records whose fields are all
    /// computed by the caller.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if the id is already taken.
    pub fn insert_record(&mut self, record: R) -> Result<R, StoreError> {
        if self.get(record.id()).is_some() {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        Ok(self.insert(record))
    }

    /// Replace all mutable fields of record `id` from `draft`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if `id` is absent (checked first), otherwise
    /// `StoreError::Validation`. Either way nothing changes.
    pub fn update(&mut self, id: &str, draft: &R::Draft) -> Result<R, StoreError> {
        let today = self.today();
        self.modify(id, |current| {
            current
                .apply_draft(draft, today)
                .map_err(rejected::<R>)
        })
    }

    /// Swap record `id` for the record computed by `f` from the current one.
    ///
    /// This is the hook for domain operations that set computed fields:
    /// nothing is observable until `f` has produced the complete
    /// replacement.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if `id` is absent, any error returned by `f`,
    /// or `StoreError::InvalidState` if `f` changed the id.
    pub fn modify<F>(&mut self, id: &str, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&R) -> Result<R, StoreError>,
    {
        let idx = self.position(id)?;
        let next = f(&self.records[idx])?;
        if next.id() != id {
            return Err(StoreError::InvalidState(format!(
                "{} {id} cannot change its id to {}",
                R::ENTITY,
                next.id()
            )));
        }
        self.records[idx] = next.clone();
        self.resort();
        debug!(entity = %R::ENTITY, id, "record updated");
        Ok(next)
    }

    /// Remove record `id` permanently.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if `id` is absent.
    pub fn delete(&mut self, id: &str) -> Result<R, StoreError> {
        let idx = self.position(id)?;
        let removed = self.records.remove(idx);
        debug!(entity = %R::ENTITY, id, "record deleted");
        Ok(removed)
    }

    fn insert(&mut self, record: R) -> R {
        debug!(entity = %R::ENTITY, id = record.id(), "record created");
        self.records.push(record.clone());
        self.resort();
        record
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<R>(id))
    }

    fn fresh_id(&self) -> Result<String, StoreError> {
        let prefix = prefix_for(R::ENTITY);
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = (self.next_id)(prefix)?;
            if self.get(&candidate).is_none() {
                return Ok(candidate);
            }
        }
        Err(StoreError::InvalidState(format!(
            "no unused {prefix} id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    fn resort(&mut self) {
        self.records.sort_by(R::canonical_cmp);
    }
}

fn not_found<R: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        entity: R::ENTITY,
        id: id.to_string(),
    }
}

fn rejected<R: Record>(errors: campus_core::validation::FieldErrors) -> StoreError {
    warn!(entity = %R::ENTITY, %errors, "validation failed");
    StoreError::Validation(errors)
}
