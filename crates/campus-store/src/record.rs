//! The `Record` trait that parameterises [`crate::list::EntityList`].

use std::cmp::Ordering;
use std::fmt;

use campus_core::enums::EntityType;
use campus_core::validation::FieldErrors;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A uniquely identified entity with a declared draft (form) shape.
///
/// Drafts carry raw, user-submitted values. Building a record from a draft
/// runs every field rule for the entity and either yields the full record or
/// the complete set of field errors.
pub trait Record: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Entity kind, used for errors, capabilities, and id prefixes.
    const ENTITY: EntityType;

    /// Form input accepted by create and update.
    type Draft: Clone + fmt::Debug + DeserializeOwned + Send + Sync;

    fn id(&self) -> &str;

    /// Validate `draft` and build a new record with `id`.
    ///
    /// # Errors
    ///
    /// Every failed field rule, keyed by camelCase field name.
    fn from_draft(id: String, draft: &Self::Draft, today: NaiveDate) -> Result<Self, FieldErrors>;

    /// Validate `draft` and build the replacement for `self`, keeping its id.
    ///
    /// The default replaces every mutable field. Records with fields that
    /// are set once (issue dates, status) override this.
    ///
    /// # Errors
    ///
    /// Every failed field rule, keyed by camelCase field name.
    fn apply_draft(&self, draft: &Self::Draft, today: NaiveDate) -> Result<Self, FieldErrors> {
        Self::from_draft(self.id().to_string(), draft, today)
    }

    /// Canonical collection order, re-applied after every mutation. The sort
    /// is stable, so `Equal` keeps insertion order.
    fn canonical_cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}
