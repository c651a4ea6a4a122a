//! ID prefixes and fresh-ID generation.
//!
//! IDs look like `stu-a3f8b2c1`: a per-entity prefix, a dash, and eight hex
//! characters drawn from the system random source. Uniqueness within a
//! collection is enforced by the entity list, which retries on collision.

use crate::enums::EntityType;
use crate::errors::CoreError;

pub const PREFIX_STUDENT: &str = "stu";
pub const PREFIX_TEACHER: &str = "tch";
pub const PREFIX_FEE_STRUCTURE: &str = "fst";
pub const PREFIX_FEE_RECORD: &str = "fee";
pub const PREFIX_SALARY: &str = "sal";
pub const PREFIX_BOOK: &str = "bok";
pub const PREFIX_EXAM: &str = "exm";
pub const PREFIX_TIMETABLE: &str = "tt";
pub const PREFIX_NOTICE: &str = "ntc";
pub const PREFIX_GALLERY: &str = "gal";
pub const PREFIX_LEAVE_REQUEST: &str = "lvr";
pub const PREFIX_USER: &str = "usr";

/// ID prefix used for records of `entity`.
#[must_use]
pub const fn prefix_for(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Student => PREFIX_STUDENT,
        EntityType::Teacher => PREFIX_TEACHER,
        EntityType::FeeStructure => PREFIX_FEE_STRUCTURE,
        EntityType::FeeRecord => PREFIX_FEE_RECORD,
        EntityType::Salary => PREFIX_SALARY,
        EntityType::Book => PREFIX_BOOK,
        EntityType::Exam => PREFIX_EXAM,
        EntityType::Timetable => PREFIX_TIMETABLE,
        EntityType::Notice => PREFIX_NOTICE,
        EntityType::Gallery => PREFIX_GALLERY,
        EntityType::LeaveRequest => PREFIX_LEAVE_REQUEST,
    }
}

/// Generate a prefixed ID, e.g. `"stu-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::Random` if the system random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Random(e.to_string()))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{suffix}"))
}
