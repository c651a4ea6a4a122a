use campus_core::entities::TimetableEntry;
use campus_core::enums::{EntityType, Weekday};
use campus_core::validation::{FieldErrors, required};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDraft {
    pub class_id: String,
    pub day: Weekday,
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl Record for TimetableEntry {
    const ENTITY: EntityType = EntityType::Timetable;
    type Draft = TimetableDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &TimetableDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        required(
            &mut errors,
            "classId",
            &draft.class_id,
            "Class & Section is required",
        );
        required(
            &mut errors,
            "time",
            &draft.time,
            "Period / Time Slot is required",
        );
        required(&mut errors, "subject", &draft.subject, "Subject is required");
        required(&mut errors, "teacher", &draft.teacher, "Teacher is required");
        required(&mut errors, "room", &draft.room, "Room is required");
        errors.into_result()?;

        Ok(Self {
            id,
            class_id: draft.class_id.trim().to_uppercase(),
            day: draft.day,
            time: draft.time.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            teacher: draft.teacher.trim().to_string(),
            room: draft.room.trim().to_string(),
        })
    }
}
