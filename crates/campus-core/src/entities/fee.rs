use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{FeeFrequency, FeeStatus};

/// A fee charged to a class at a fixed frequency.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructure {
    pub id: String,
    pub class_name: String,
    pub fee_type: String,
    pub amount: f64,
    pub frequency: FeeFrequency,
}

/// What one student owes for one fee, and how much has been paid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentFeeRecord {
    pub id: String,
    pub student_name: String,
    pub class_name: String,
    /// e.g. "Annual Fee - Class 5".
    pub fee_type_description: String,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
    pub last_payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl StudentFeeRecord {
    /// Amount still owed, never negative.
    #[must_use]
    pub fn balance(&self) -> f64 {
        (self.amount_due - self.amount_paid).max(0.0)
    }

    /// Payments are accepted until the record is fully paid.
    #[must_use]
    pub fn accepts_payment(&self) -> bool {
        self.status != FeeStatus::Paid
    }
}
