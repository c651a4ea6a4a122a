use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Weekday;

/// One period of a class timetable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: String,
    /// Class and section, e.g. `10C`.
    pub class_id: String,
    pub day: Weekday,
    /// Period label, e.g. `09:00 - 10:00`.
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}
