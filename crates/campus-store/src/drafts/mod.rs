//! Form inputs for each record kind.
//!
//! A draft carries raw, user-submitted values (dates as text, counts that
//! may be negative). Each file implements [`crate::record::Record`] for its
//! entity: `from_draft` runs every field rule and either returns the typed
//! record or all field errors at once.

pub mod book;
pub mod exam;
pub mod fee;
pub mod gallery;
pub mod leave;
pub mod notice;
pub mod salary;
pub mod student;
pub mod teacher;
pub mod timetable;

pub use book::BookDraft;
pub use exam::ExamDraft;
pub use fee::{FeeRecordDraft, FeeStructureDraft, Payment};
pub use gallery::GalleryDraft;
pub use leave::LeaveDraft;
pub use notice::NoticeDraft;
pub use salary::SalaryDraft;
pub use student::StudentDraft;
pub use teacher::TeacherDraft;
pub use timetable::TimetableDraft;

use campus_core::validation::FieldErrors;

/// Trimmed copy of an optional text field, `None` when blank.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    campus_core::validation::non_blank(value).map(String::from)
}

/// Non-negative whole number. Records `message` for negatives and values
/// above `u32::MAX`.
pub(crate) fn count(errors: &mut FieldErrors, field: &str, value: i64, message: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| {
        errors.add(field, message);
        0
    })
}

/// Strictly positive finite amount.
pub(crate) fn positive(errors: &mut FieldErrors, field: &str, value: f64, message: &str) {
    if !value.is_finite() || value <= 0.0 {
        errors.add(field, message);
    }
}

/// Zero or more, finite.
pub(crate) fn non_negative(errors: &mut FieldErrors, field: &str, value: f64, message: &str) {
    if !value.is_finite() || value < 0.0 {
        errors.add(field, message);
    }
}
