use std::cmp::Ordering;

use campus_core::entities::Notice;
use campus_core::enums::{Audience, EntityType, NoticeType};
use campus_core::validation::{FieldErrors, min_chars, optional_date};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub notice_type: Option<NoticeType>,
    /// Defaults to everyone when empty.
    #[serde(default)]
    pub target_audience: Vec<Audience>,
}

impl NoticeDraft {
    fn build(&self, id: String, issued_date: NaiveDate) -> Result<Notice, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "title",
            &self.title,
            5,
            "Title must be at least 5 characters.",
        );
        min_chars(
            &mut errors,
            "content",
            &self.content,
            10,
            "Content must be at least 10 characters.",
        );
        min_chars(
            &mut errors,
            "author",
            &self.author,
            2,
            "Author name must be at least 2 characters.",
        );
        let expiry_date = optional_date(
            &mut errors,
            "expiryDate",
            self.expiry_date.as_deref(),
            "Invalid date format for expiry date.",
        );
        errors.into_result()?;

        let target_audience = if self.target_audience.is_empty() {
            vec![Audience::All]
        } else {
            self.target_audience.clone()
        };
        Ok(Notice {
            id,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            issued_date,
            expiry_date,
            author: self.author.trim().to_string(),
            notice_type: self.notice_type,
            target_audience,
        })
    }
}

impl Record for Notice {
    const ENTITY: EntityType = EntityType::Notice;
    type Draft = NoticeDraft;

    fn id(&self) -> &str {
        &self.id
    }

    /// Issued today.
    fn from_draft(id: String, draft: &NoticeDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(id, today)
    }

    fn apply_draft(&self, draft: &NoticeDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(self.id.clone(), self.issued_date)
    }

    /// Most recently issued first.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        other.issued_date.cmp(&self.issued_date)
    }
}
