use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Audience, NoticeType};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub issued_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub author: String,
    pub notice_type: Option<NoticeType>,
    pub target_audience: Vec<Audience>,
}

impl Notice {
    /// A notice expires once its expiry date is in the past.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < today)
    }
}
