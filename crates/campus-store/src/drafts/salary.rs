use std::cmp::Ordering;

use campus_core::entities::SalaryRecord;
use campus_core::enums::{EntityType, SalaryStatus};
use campus_core::validation::FieldErrors;
use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{non_negative, positive};
use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDraft {
    pub teacher_id: String,
    pub month: i64,
    pub year: i64,
    pub basic_salary: f64,
    #[serde(default)]
    pub total_allowances: f64,
    #[serde(default)]
    pub total_deductions: f64,
    pub payment_status: SalaryStatus,
    /// Name of the teacher `teacher_id` refers to. Filled in from the
    /// teacher list before the draft is applied; never read from input.
    #[serde(skip)]
    pub teacher_name: Option<String>,
}

impl SalaryDraft {
    fn build(&self, id: String, today: NaiveDate) -> Result<SalaryRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.teacher_id.trim().is_empty() {
            errors.add("teacherId", "Teacher is required.");
        } else if self.teacher_name.is_none() {
            errors.add("teacherId", "Teacher not found.");
        }

        let month = u32::try_from(self.month)
            .ok()
            .filter(|m| (1..=12).contains(m));
        if month.is_none() {
            errors.add("month", "Month must be between 1 and 12.");
        }

        let current = i64::from(today.year());
        let (min_year, max_year) = (current - 5, current + 1);
        let year = i32::try_from(self.year)
            .ok()
            .filter(|_| (min_year..=max_year).contains(&self.year));
        if year.is_none() {
            errors.add(
                "year",
                format!("Year must be between {min_year} and {max_year}."),
            );
        }

        positive(
            &mut errors,
            "basicSalary",
            self.basic_salary,
            "Basic salary must be positive.",
        );
        non_negative(
            &mut errors,
            "totalAllowances",
            self.total_allowances,
            "Allowances cannot be negative.",
        );
        non_negative(
            &mut errors,
            "totalDeductions",
            self.total_deductions,
            "Deductions cannot be negative.",
        );
        errors.into_result()?;

        Ok(SalaryRecord {
            id,
            teacher_id: self.teacher_id.trim().to_string(),
            teacher_name: self.teacher_name.clone().unwrap_or_default(),
            month: month.unwrap_or(1),
            year: year.unwrap_or_else(|| today.year()),
            basic_salary: self.basic_salary,
            total_allowances: self.total_allowances,
            total_deductions: self.total_deductions,
            net_salary: SalaryRecord::net(
                self.basic_salary,
                self.total_allowances,
                self.total_deductions,
            ),
            payment_status: self.payment_status,
            payment_date: match self.payment_status {
                SalaryStatus::Paid => Some(today),
                SalaryStatus::Pending => None,
            },
        })
    }
}

impl Record for SalaryRecord {
    const ENTITY: EntityType = EntityType::Salary;
    type Draft = SalaryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &SalaryDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(id, today)
    }

    /// A record that stays paid keeps its original payment date.
    fn apply_draft(&self, draft: &SalaryDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut next = draft.build(self.id.clone(), today)?;
        if next.payment_status == SalaryStatus::Paid && self.payment_date.is_some() {
            next.payment_date = self.payment_date;
        }
        Ok(next)
    }

    /// Newest period first, then by teacher.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        other
            .year
            .cmp(&self.year)
            .then_with(|| other.month.cmp(&self.month))
            .then_with(|| self.teacher_name.cmp(&other.teacher_name))
    }
}
