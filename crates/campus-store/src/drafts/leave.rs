use std::cmp::Ordering;

use campus_core::entities::LeaveRequest;
use campus_core::enums::{EntityType, LeaveStatus, LeaveType};
use campus_core::validation::{FieldErrors, min_chars, required, required_date};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    pub employee_name: String,
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveDraft {
    fn build(
        &self,
        id: String,
        status: LeaveStatus,
        applied_date: NaiveDate,
    ) -> Result<LeaveRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "employeeName",
            &self.employee_name,
            2,
            "Employee name must be at least 2 characters.",
        );
        required(
            &mut errors,
            "employeeId",
            &self.employee_id,
            "Employee ID is required.",
        );
        min_chars(
            &mut errors,
            "reason",
            &self.reason,
            3,
            "Reason must be at least 3 characters.",
        );
        let start = required_date(
            &mut errors,
            "startDate",
            &self.start_date,
            "Invalid start date.",
        );
        let end = required_date(&mut errors, "endDate", &self.end_date, "Invalid end date.");
        if let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            errors.add("endDate", "End date cannot be before start date.");
        }
        errors.into_result()?;

        Ok(LeaveRequest {
            id,
            employee_name: self.employee_name.trim().to_string(),
            employee_id: self.employee_id.trim().to_string(),
            leave_type: self.leave_type,
            start_date: start.unwrap_or(applied_date),
            end_date: end.unwrap_or(applied_date),
            reason: self.reason.trim().to_string(),
            status,
            applied_date,
        })
    }
}

impl Record for LeaveRequest {
    const ENTITY: EntityType = EntityType::LeaveRequest;
    type Draft = LeaveDraft;

    fn id(&self) -> &str {
        &self.id
    }

    /// New requests are pending and applied today.
    fn from_draft(id: String, draft: &LeaveDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(id, LeaveStatus::Pending, today)
    }

    /// Status only moves through approve/reject; edits keep it.
    fn apply_draft(&self, draft: &LeaveDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(self.id.clone(), self.status, self.applied_date)
    }

    /// Most recently applied first.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        other.applied_date.cmp(&self.applied_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::today;
    use pretty_assertions::assert_eq;

    fn draft() -> LeaveDraft {
        LeaveDraft {
            employee_name: "Mr. Samuel Green".into(),
            employee_id: "T2002".into(),
            leave_type: LeaveType::Annual,
            start_date: "2024-08-05".into(),
            end_date: "2024-08-07".into(),
            reason: "Family vacation".into(),
        }
    }

    #[test]
    fn new_request_is_pending_and_applied_today() {
        let leave = LeaveRequest::from_draft("LR".into(), &draft(), today()).unwrap();
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert_eq!(leave.applied_date, today());
    }

    #[test]
    fn edit_keeps_decided_status() {
        let mut leave = LeaveRequest::from_draft("LR".into(), &draft(), today()).unwrap();
        leave.status = LeaveStatus::Approved;
        let edited = leave.apply_draft(&draft(), today()).unwrap();
        assert_eq!(edited.status, LeaveStatus::Approved);
    }

    #[test]
    fn end_before_start() {
        let d = LeaveDraft {
            end_date: "2024-08-01".into(),
            ..draft()
        };
        let errors = LeaveRequest::from_draft("LR".into(), &d, today()).unwrap_err();
        assert_eq!(
            errors.messages("endDate"),
            ["End date cannot be before start date."]
        );
    }
}
