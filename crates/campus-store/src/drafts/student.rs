use std::cmp::Ordering;

use campus_core::entities::Student;
use campus_core::enums::{EntityType, Gender};
use campus_core::grades::{GRADUATED, is_class_option};
use campus_core::validation::{
    FieldErrors, is_phone, min_chars, non_blank, optional_date, required_date,
};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::optional_text;
use crate::record::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub class_name: String,
    pub section: String,
    pub admission_date: String,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl StudentDraft {
    fn build(&self, id: String, keep_graduated: bool) -> Result<Student, FieldErrors> {
        let mut errors = FieldErrors::new();

        min_chars(
            &mut errors,
            "name",
            &self.name,
            2,
            "Name must be at least 2 characters.",
        );

        let class_name = self.class_name.trim();
        if class_name.is_empty() {
            errors.add("className", "Class is required.");
        } else if !is_class_option(class_name) && !(keep_graduated && class_name == GRADUATED) {
            errors.add("className", "Class must be NC or 1 to 12.");
        }

        let section = self.section.trim();
        if section.is_empty() {
            errors.add("section", "Section is required.");
        } else if section.chars().count() > 2 {
            errors.add(
                "section",
                "Section should be a single character like A, B.",
            );
        }

        let admission_date = required_date(
            &mut errors,
            "admissionDate",
            &self.admission_date,
            "Invalid admission date.",
        );
        let date_of_birth = optional_date(
            &mut errors,
            "dateOfBirth",
            self.date_of_birth.as_deref(),
            "Invalid date of birth.",
        );

        if let Some(phone) = non_blank(self.guardian_phone.as_deref())
            && !is_phone(phone)
            && phone.chars().count() < 7
        {
            errors.add("guardianPhone", "Invalid phone number format (min 7 digits)");
        }

        errors.into_result()?;
        Ok(Student {
            id,
            name: self.name.trim().to_string(),
            class_name: class_name.to_string(),
            section: section.to_uppercase(),
            admission_date: admission_date.unwrap_or_default(),
            roll_number: optional_text(self.roll_number.as_deref()),
            date_of_birth,
            gender: self.gender,
            guardian_name: optional_text(self.guardian_name.as_deref()),
            guardian_phone: optional_text(self.guardian_phone.as_deref()),
            address: optional_text(self.address.as_deref()),
        })
    }
}

impl Record for Student {
    const ENTITY: EntityType = EntityType::Student;
    type Draft = StudentDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &StudentDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(id, false)
    }

    /// A graduated student may be edited without choosing a new class.
    fn apply_draft(&self, draft: &StudentDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(self.id.clone(), self.class_name == GRADUATED)
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}
