//! Fee structures, per-student fee records, and payments against them.

use campus_core::entities::{FeeStructure, StudentFeeRecord};
use campus_core::enums::{EntityType, FeeFrequency, FeeStatus};
use campus_core::validation::{
    FieldErrors, Validate, min_chars, optional_date, parse_date, required, required_date,
};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{non_negative, optional_text, positive};
use crate::record::Record;

// ---------------------------------------------------------------------------
// Fee structure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructureDraft {
    pub class_name: String,
    pub fee_type: String,
    pub amount: f64,
    pub frequency: FeeFrequency,
}

impl Record for FeeStructure {
    const ENTITY: EntityType = EntityType::FeeStructure;
    type Draft = FeeStructureDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(
        id: String,
        draft: &FeeStructureDraft,
        _today: NaiveDate,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        required(&mut errors, "className", &draft.class_name, "Class is required.");
        min_chars(
            &mut errors,
            "feeType",
            &draft.fee_type,
            3,
            "Fee type must be at least 3 characters.",
        );
        positive(
            &mut errors,
            "amount",
            draft.amount,
            "Amount must be a positive number.",
        );
        errors.into_result()?;

        Ok(Self {
            id,
            class_name: draft.class_name.trim().to_string(),
            fee_type: draft.fee_type.trim().to_string(),
            amount: draft.amount,
            frequency: draft.frequency,
        })
    }
}

// ---------------------------------------------------------------------------
// Student fee record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecordDraft {
    pub student_name: String,
    pub class_name: String,
    pub fee_type_description: String,
    pub amount_due: f64,
    #[serde(default)]
    pub amount_paid: f64,
    pub due_date: String,
    #[serde(default)]
    pub last_payment_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for StudentFeeRecord {
    const ENTITY: EntityType = EntityType::FeeRecord;
    type Draft = FeeRecordDraft;

    fn id(&self) -> &str {
        &self.id
    }

    /// Status is never submitted; it is derived from the amounts and due date.
    fn from_draft(id: String, draft: &FeeRecordDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "studentName",
            &draft.student_name,
            2,
            "Student name must be at least 2 characters.",
        );
        required(&mut errors, "className", &draft.class_name, "Class is required.");
        required(
            &mut errors,
            "feeTypeDescription",
            &draft.fee_type_description,
            "Fee description is required.",
        );
        positive(
            &mut errors,
            "amountDue",
            draft.amount_due,
            "Amount due must be positive.",
        );
        non_negative(
            &mut errors,
            "amountPaid",
            draft.amount_paid,
            "Amount paid cannot be negative.",
        );
        let due_date = required_date(&mut errors, "dueDate", &draft.due_date, "Invalid due date.");
        let last_payment_date = optional_date(
            &mut errors,
            "lastPaymentDate",
            draft.last_payment_date.as_deref(),
            "Invalid payment date.",
        );
        errors.into_result()?;

        let due_date = due_date.unwrap_or(today);
        Ok(Self {
            id,
            student_name: draft.student_name.trim().to_string(),
            class_name: draft.class_name.trim().to_string(),
            fee_type_description: draft.fee_type_description.trim().to_string(),
            amount_due: draft.amount_due,
            amount_paid: draft.amount_paid,
            due_date,
            status: FeeStatus::compute(draft.amount_due, draft.amount_paid, due_date, today),
            last_payment_date,
            notes: optional_text(draft.notes.as_deref()),
        })
    }
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

/// A payment recorded against a student fee record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: f64,
    /// `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for Payment {
    fn validate(&self, _today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        positive(
            &mut errors,
            "paymentAmount",
            self.amount,
            "Payment amount must be positive.",
        );
        if parse_date(&self.date).is_none() {
            errors.add("paymentDate", "Invalid payment date.");
        }
        errors.into_result()
    }
}

impl Payment {
    /// Apply this payment to `record`, recomputing its status.
    ///
    /// # Errors
    ///
    /// Every failed payment rule, keyed by field.
    pub fn apply_to(
        &self,
        record: &StudentFeeRecord,
        today: NaiveDate,
    ) -> Result<StudentFeeRecord, FieldErrors> {
        self.validate(today)?;
        let amount_paid = record.amount_paid + self.amount;
        Ok(StudentFeeRecord {
            amount_paid,
            status: FeeStatus::compute(record.amount_due, amount_paid, record.due_date, today),
            last_payment_date: parse_date(&self.date),
            notes: optional_text(self.notes.as_deref()).or_else(|| record.notes.clone()),
            ..record.clone()
        })
    }
}
