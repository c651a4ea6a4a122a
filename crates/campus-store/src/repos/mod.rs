//! Domain operations on top of the generic CRUD in [`crate::service`].
//!
//! Each module adds methods to `CampusService` via `impl CampusService`
//! blocks. Operations that change a record go through
//! [`crate::list::EntityList::modify`], so computed fields land in the same
//! swap as the submitted ones.

pub mod fee;
pub mod gallery;
pub mod leave;
pub mod notice;
pub mod salary;
pub mod student;
pub mod timetable;
