pub mod dispatch;
pub mod enquiry;
pub mod fee;
pub mod gallery;
pub mod leave;
pub mod notice;
pub mod questions;
pub mod records;
pub mod schema;
pub mod shared;
pub mod student;
pub mod timetable;
