//! Leave request decisions.

use campus_core::entities::LeaveRequest;
use campus_core::enums::{Action, EntityType, LeaveStatus};
use tracing::info;

use crate::error::StoreError;
use crate::service::CampusService;

impl CampusService {
    /// # Errors
    ///
    /// See [`Self::decide_leave`].
    pub fn approve_leave(&mut self, id: &str) -> Result<LeaveRequest, StoreError> {
        self.decide_leave(id, LeaveStatus::Approved)
    }

    /// # Errors
    ///
    /// See [`Self::decide_leave`].
    pub fn reject_leave(&mut self, id: &str) -> Result<LeaveRequest, StoreError> {
        self.decide_leave(id, LeaveStatus::Rejected)
    }

    /// Move leave request `id` to `next`.
    ///
    /// # Errors
    ///
    /// Authorization errors, `StoreError::NotFound`, or
    /// `StoreError::InvalidTransition` when the request was already decided.
    pub fn decide_leave(
        &mut self,
        id: &str,
        next: LeaveStatus,
    ) -> Result<LeaveRequest, StoreError> {
        self.authorize(Action::Update, EntityType::LeaveRequest)?;
        let updated = self.leave_requests.modify(id, |current| {
            if !current.status.can_transition_to(next) {
                return Err(StoreError::InvalidTransition {
                    entity: EntityType::LeaveRequest,
                    id: id.to_string(),
                    from: current.status.to_string(),
                    to: next.to_string(),
                });
            }
            Ok(LeaveRequest {
                status: next,
                ..current.clone()
            })
        })?;
        info!(id, status = %next, "leave request decided");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::test_support::admin_service;
    use campus_core::entities::LeaveRequest;
    use campus_core::enums::LeaveStatus;

    #[test]
    fn pending_request_can_be_approved() {
        let mut svc = admin_service();
        let approved = svc.approve_leave("LR001").unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
    }

    #[test]
    fn decided_request_cannot_change() {
        let mut svc = admin_service();
        let err = svc.reject_leave("LR002").unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidTransition { ref from, ref to, .. }
                if from == "approved" && to == "rejected"
        ));
        assert_eq!(
            svc.get::<LeaveRequest>("LR002").unwrap().status,
            LeaveStatus::Approved
        );
    }

    #[test]
    fn unknown_request_is_not_found() {
        let mut svc = admin_service();
        assert!(matches!(
            svc.approve_leave("LR999"),
            Err(StoreError::NotFound { .. })
        ));
    }
}
