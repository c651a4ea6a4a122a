//! Record structs for every Campus Hub entity.
//!
//! Each record carries an immutable string `id` plus flat fields. Cross-record
//! references are denormalised copies (a salary record stores the teacher's
//! name, not a link). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`; fields serialise in camelCase.

mod book;
mod exam;
mod fee;
mod gallery;
mod leave;
mod notice;
mod salary;
mod student;
mod teacher;
mod timetable;

pub use book::Book;
pub use exam::ExamSchedule;
pub use fee::{FeeStructure, StudentFeeRecord};
pub use gallery::{GalleryItem, PLACEHOLDER_IMAGE_URL};
pub use leave::LeaveRequest;
pub use notice::Notice;
pub use salary::SalaryRecord;
pub use student::Student;
pub use teacher::Teacher;
pub use timetable::TimetableEntry;
