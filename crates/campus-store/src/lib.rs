//! # campus-store
//!
//! In-memory record management for Campus Hub.
//!
//! - [`EntityList`]: generic create/update/delete/query over one collection,
//!   parameterised by a [`Record`] type and its draft (form) shape
//! - [`drafts`]: per-entity form inputs, field rules, and record construction
//! - [`CampusService`]: every collection behind one capability check per
//!   operation, with the explicit session
//! - [`repos`]: domain operations (fee payments, promotion, leave decisions,
//!   notice partition, gallery view, timetable grid)
//! - [`dynamic`]: the same operations addressed by [`EntityType`] with JSON
//!   drafts, for the command line
//!
//! [`EntityType`]: campus_core::enums::EntityType

pub mod drafts;
pub mod dynamic;
pub mod error;
pub mod list;
pub mod query;
pub mod record;
pub mod repos;
pub mod seed;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::StoreError;
pub use list::EntityList;
pub use query::Query;
pub use record::Record;
pub use repos::gallery::GalleryOrder;
pub use repos::student::Promotion;
pub use service::{CampusService, Collection};
