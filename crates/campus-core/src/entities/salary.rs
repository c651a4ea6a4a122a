use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SalaryStatus;

/// Monthly salary slip for one teacher.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub id: String,
    pub teacher_id: String,
    /// Copy of the teacher's name at the time of the last edit.
    pub teacher_name: String,
    /// 1..=12
    pub month: u32,
    pub year: i32,
    pub basic_salary: f64,
    pub total_allowances: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
    pub payment_status: SalaryStatus,
    pub payment_date: Option<NaiveDate>,
}

impl SalaryRecord {
    #[must_use]
    pub fn net(basic_salary: f64, total_allowances: f64, total_deductions: f64) -> f64 {
        basic_salary + total_allowances - total_deductions
    }
}
