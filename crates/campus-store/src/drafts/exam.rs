use std::cmp::Ordering;

use campus_core::entities::ExamSchedule;
use campus_core::enums::{EntityType, ExamStatus};
use campus_core::grades::is_class_option;
use campus_core::validation::{FieldErrors, min_chars, required_date};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamDraft {
    pub exam_name: String,
    pub applicable_classes: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: ExamStatus,
}

impl Record for ExamSchedule {
    const ENTITY: EntityType = EntityType::Exam;
    type Draft = ExamDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &ExamDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "examName",
            &draft.exam_name,
            3,
            "Exam name must be at least 3 characters.",
        );

        let classes: Vec<String> = draft
            .applicable_classes
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        if classes.is_empty() {
            errors.add("applicableClasses", "At least one class must be selected.");
        }
        for class in classes.iter().filter(|c| !is_class_option(c)) {
            errors.add("applicableClasses", format!("Unknown class '{class}'."));
        }

        let start = required_date(
            &mut errors,
            "startDate",
            &draft.start_date,
            "Invalid start date.",
        );
        let end = required_date(&mut errors, "endDate", &draft.end_date, "Invalid end date.");
        if let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            errors.add("endDate", "End date cannot be before start date.");
        }
        errors.into_result()?;

        Ok(Self {
            id,
            exam_name: draft.exam_name.trim().to_string(),
            applicable_classes: classes,
            start_date: start.unwrap_or_default(),
            end_date: end.unwrap_or_default(),
            status: draft.status,
        })
    }

    /// Latest start first.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        other.start_date.cmp(&self.start_date)
    }
}
