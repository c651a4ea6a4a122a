//! Roles, entity kinds, and per-record status enums for Campus Hub.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` returns the wire value, `label()` the text shown to people.
//! Status enums with a lifecycle provide `allowed_next_states()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of the signed-in user. Drives the capability table in [`crate::access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
    Accountant,
    Principal,
    Librarian,
}

impl Role {
    pub const ALL: [Self; 7] = [
        Self::Admin,
        Self::Teacher,
        Self::Student,
        Self::Parent,
        Self::Accountant,
        Self::Principal,
        Self::Librarian,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Accountant => "accountant",
            Self::Principal => "principal",
            Self::Librarian => "librarian",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Every record kind managed by an entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Student,
    Teacher,
    FeeStructure,
    FeeRecord,
    Salary,
    Book,
    Exam,
    Timetable,
    Notice,
    Gallery,
    LeaveRequest,
}

impl EntityType {
    pub const ALL: [Self; 11] = [
        Self::Student,
        Self::Teacher,
        Self::FeeStructure,
        Self::FeeRecord,
        Self::Salary,
        Self::Book,
        Self::Exam,
        Self::Timetable,
        Self::Notice,
        Self::Gallery,
        Self::LeaveRequest,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::FeeStructure => "fee_structure",
            Self::FeeRecord => "fee_record",
            Self::Salary => "salary",
            Self::Book => "book",
            Self::Exam => "exam",
            Self::Timetable => "timetable",
            Self::Notice => "notice",
            Self::Gallery => "gallery",
            Self::LeaveRequest => "leave_request",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Operation class checked against the capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeeFrequency
// ---------------------------------------------------------------------------

/// How often a fee structure is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeeFrequency {
    Monthly,
    Quarterly,
    Annually,
    OneTime,
}

impl FeeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::OneTime => "one_time",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
            Self::OneTime => "One-time",
        }
    }
}

impl fmt::Display for FeeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeeStatus
// ---------------------------------------------------------------------------

/// Payment state of a student fee record. Always derived, never submitted.
///
/// ```text
/// amount_paid >= amount_due           → paid
/// amount_paid > 0                     → partially_paid
/// nothing paid, due date has passed   → overdue
/// nothing paid, not yet due           → pending
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
    PartiallyPaid,
}

impl FeeStatus {
    /// Derive the status from the amounts and the due date as seen on `today`.
    #[must_use]
    pub fn compute(
        amount_due: f64,
        amount_paid: f64,
        due_date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    ) -> Self {
        if amount_paid >= amount_due {
            Self::Paid
        } else if amount_paid > 0.0 {
            Self::PartiallyPaid
        } else if due_date < today {
            Self::Overdue
        } else {
            Self::Pending
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::PartiallyPaid => "partially_paid",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
            Self::PartiallyPaid => "Partially Paid",
        }
    }
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SalaryStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SalaryStatus {
    Paid,
    Pending,
}

impl SalaryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExamStatus
// ---------------------------------------------------------------------------

/// Status of an exam schedule. Chosen freely by the admin on each edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Upcoming,
    Ongoing,
    Completed,
    ResultsDeclared,
}

impl ExamStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::ResultsDeclared => "results_declared",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::ResultsDeclared => "Results Declared",
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// School day of a timetable slot. Declaration order is the week order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NoticeType / Audience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeType {
    General,
    Academic,
    Event,
    Urgent,
    Administrative,
    Holiday,
}

impl NoticeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Academic => "academic",
            Self::Event => "event",
            Self::Urgent => "urgent",
            Self::Administrative => "administrative",
            Self::Holiday => "holiday",
        }
    }
}

impl fmt::Display for NoticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a notice is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    All,
    Teachers,
    Students,
    Parents,
}

impl Audience {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Teachers => "teachers",
            Self::Students => "students",
            Self::Parents => "parents",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LeaveType / LeaveStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Casual,
    Unpaid,
}

impl LeaveType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Casual => "casual",
            Self::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a staff leave request.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn wire_values_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&FeeStatus::PartiallyPaid).unwrap(),
            "\"partially_paid\""
        );
        assert_eq!(
            serde_json::to_string(&EntityType::LeaveRequest).unwrap(),
            "\"leave_request\""
        );
        let freq: FeeFrequency = serde_json::from_str("\"one_time\"").unwrap();
        assert_eq!(freq, FeeFrequency::OneTime);
    }

    #[test]
    fn as_str_matches_serde() {
        for entity in EntityType::ALL {
            let json = serde_json::to_string(&entity).unwrap();
            assert_eq!(json, format!("\"{}\"", entity.as_str()));
        }
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }

    #[test]
    fn labels_use_display_text() {
        assert_eq!(FeeStatus::PartiallyPaid.label(), "Partially Paid");
        assert_eq!(ExamStatus::ResultsDeclared.label(), "Results Declared");
        assert_eq!(FeeFrequency::OneTime.label(), "One-time");
    }

    #[test]
    fn fee_status_overdue_when_nothing_paid_after_due_date() {
        let status = FeeStatus::compute(5000.0, 0.0, date("2024-03-01"), date("2024-06-01"));
        assert_eq!(status, FeeStatus::Overdue);
    }

    #[test]
    fn fee_status_pending_on_due_date() {
        let status = FeeStatus::compute(5000.0, 0.0, date("2024-06-01"), date("2024-06-01"));
        assert_eq!(status, FeeStatus::Pending);
    }

    #[test]
    fn fee_status_partial_and_paid() {
        let due = date("2024-03-01");
        let today = date("2024-06-01");
        assert_eq!(
            FeeStatus::compute(5000.0, 3000.0, due, today),
            FeeStatus::PartiallyPaid
        );
        assert_eq!(FeeStatus::compute(5000.0, 5000.0, due, today), FeeStatus::Paid);
        assert_eq!(FeeStatus::compute(5000.0, 6000.0, due, today), FeeStatus::Paid);
    }

    #[test]
    fn leave_transitions() {
        assert!(LeaveStatus::Pending.can_transition_to(LeaveStatus::Approved));
        assert!(LeaveStatus::Pending.can_transition_to(LeaveStatus::Rejected));
        assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Rejected));
        assert!(!LeaveStatus::Rejected.can_transition_to(LeaveStatus::Pending));
    }

    #[test]
    fn weekdays_sort_in_week_order() {
        let mut days = vec![Weekday::Saturday, Weekday::Monday, Weekday::Wednesday];
        days.sort();
        assert_eq!(
            days,
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Saturday]
        );
    }
}
