//! Fee payments.

use campus_core::entities::StudentFeeRecord;
use campus_core::enums::{Action, EntityType};
use tracing::info;

use crate::drafts::Payment;
use crate::error::StoreError;
use crate::service::CampusService;

impl CampusService {
    /// Add `payment` to fee record `id` and recompute its status.
    ///
    /// # Errors
    ///
    /// Authorization errors, `StoreError::NotFound`,
    /// `StoreError::InvalidState` when the record is already paid, or
    /// `StoreError::Validation` for a bad amount or date.
    pub fn record_fee_payment(
        &mut self,
        id: &str,
        payment: &Payment,
    ) -> Result<StudentFeeRecord, StoreError> {
        self.authorize(Action::Update, EntityType::FeeRecord)?;
        let today = self.today();
        let updated = self.fee_records.modify(id, |current| {
            if !current.accepts_payment() {
                return Err(StoreError::InvalidState(format!(
                    "fee record {id} is already paid"
                )));
            }
            Ok(payment.apply_to(current, today)?)
        })?;
        info!(
            id,
            amount = payment.amount,
            status = %updated.status,
            "fee payment recorded"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use crate::drafts::{FeeRecordDraft, Payment};
    use crate::error::StoreError;
    use crate::test_support::{admin_service, date, service_as};
    use campus_core::entities::StudentFeeRecord;
    use campus_core::enums::{FeeStatus, Role};
    use pretty_assertions::assert_eq;

    fn payment(amount: f64) -> Payment {
        Payment {
            amount,
            date: "2024-07-21".into(),
            notes: None,
        }
    }

    #[test]
    fn overdue_to_partial_to_paid() {
        let mut svc = admin_service();
        let record = svc
            .create::<StudentFeeRecord>(&FeeRecordDraft {
                student_name: "Diana Miller".into(),
                class_name: "NC".into(),
                fee_type_description: "Admission Fee".into(),
                amount_due: 5000.0,
                amount_paid: 0.0,
                due_date: "2024-07-01".into(),
                last_payment_date: None,
                notes: None,
            })
            .unwrap();
        assert_eq!(record.status, FeeStatus::Overdue);

        let partial = svc.record_fee_payment(&record.id, &payment(3000.0)).unwrap();
        assert_eq!(partial.amount_paid, 3000.0);
        assert_eq!(partial.status, FeeStatus::PartiallyPaid);

        let paid = svc.record_fee_payment(&record.id, &payment(2000.0)).unwrap();
        assert_eq!(paid.amount_paid, 5000.0);
        assert_eq!(paid.status, FeeStatus::Paid);
        assert_eq!(paid.last_payment_date, Some(date("2024-07-21")));
        assert!(!paid.accepts_payment());

        let err = svc.record_fee_payment(&record.id, &payment(1.0)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidState(_)));
        assert_eq!(
            svc.get::<StudentFeeRecord>(&record.id).unwrap().amount_paid,
            5000.0
        );
    }

    #[test]
    fn invalid_payment_changes_nothing() {
        let mut svc = admin_service();
        let before = svc.get::<StudentFeeRecord>("SFR003").unwrap().clone();
        let err = svc.record_fee_payment("SFR003", &payment(0.0)).unwrap_err();
        assert!(err.field_errors().unwrap().contains("paymentAmount"));
        assert_eq!(svc.get::<StudentFeeRecord>("SFR003").unwrap(), &before);
    }

    #[test]
    fn missing_record_is_not_found() {
        let mut svc = admin_service();
        assert!(matches!(
            svc.record_fee_payment("SFR999", &payment(10.0)),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn accountant_may_view_but_not_record_payments() {
        let mut svc = service_as(Role::Accountant);
        assert!(svc.get::<StudentFeeRecord>("SFR002").is_ok());
        assert!(matches!(
            svc.record_fee_payment("SFR002", &payment(100.0)),
            Err(StoreError::Forbidden { .. })
        ));
    }
}
