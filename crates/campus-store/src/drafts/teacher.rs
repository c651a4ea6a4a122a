use std::cmp::Ordering;

use campus_core::entities::Teacher;
use campus_core::enums::EntityType;
use campus_core::validation::{FieldErrors, is_email, is_phone, min_chars, non_blank};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::optional_text;
use crate::record::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDraft {
    pub name: String,
    pub subject: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Record for Teacher {
    const ENTITY: EntityType = EntityType::Teacher;
    type Draft = TeacherDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &TeacherDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "name",
            &draft.name,
            2,
            "Name must be at least 2 characters.",
        );
        min_chars(
            &mut errors,
            "subject",
            &draft.subject,
            2,
            "Subject must be at least 2 characters.",
        );
        if !is_email(&draft.email) {
            errors.add("email", "Invalid email address.");
        }
        if let Some(phone) = non_blank(draft.phone.as_deref())
            && !is_phone(phone)
        {
            errors.add("phone", "Invalid phone number format");
        }
        errors.into_result()?;

        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: optional_text(draft.phone.as_deref()),
        })
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}
