use std::cmp::Ordering;

use campus_core::entities::Book;
use campus_core::enums::EntityType;
use campus_core::validation::{FieldErrors, is_isbn, min_chars, non_blank};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::count;
use crate::record::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    pub total_copies: i64,
    pub available_copies: i64,
}

impl Record for Book {
    const ENTITY: EntityType = EntityType::Book;
    type Draft = BookDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &BookDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "title",
            &draft.title,
            3,
            "Title must be at least 3 characters.",
        );
        min_chars(
            &mut errors,
            "author",
            &draft.author,
            2,
            "Author name must be at least 2 characters.",
        );

        let isbn = non_blank(draft.isbn.as_deref());
        if let Some(isbn) = isbn
            && !is_isbn(isbn)
        {
            errors.add(
                "isbn",
                "Invalid ISBN format (10 or 13 digits, can include hyphens).",
            );
        }

        if draft.total_copies <= 0 {
            errors.add("totalCopies", "Total copies must be a positive number.");
        }
        let total_copies = count(
            &mut errors,
            "totalCopies",
            draft.total_copies.max(0),
            "Total copies must be a positive number.",
        );
        let available_copies = count(
            &mut errors,
            "availableCopies",
            draft.available_copies,
            "Available copies cannot be negative.",
        );
        if draft.available_copies > draft.total_copies {
            errors.add(
                "availableCopies",
                "Available copies cannot exceed total copies.",
            );
        }
        errors.into_result()?;

        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            isbn: isbn.map(String::from),
            total_copies,
            available_copies,
        })
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.title.to_lowercase().cmp(&other.title.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::today;
    use pretty_assertions::assert_eq;

    fn draft(total: i64, available: i64) -> BookDraft {
        BookDraft {
            title: "The Great Gatsby".into(),
            author: "F. Scott Fitzgerald".into(),
            isbn: Some("978-0743273565".into()),
            total_copies: total,
            available_copies: available,
        }
    }

    #[test]
    fn available_equal_to_total_is_fine() {
        let book = Book::from_draft("BK1".into(), &draft(10, 10), today()).unwrap();
        assert_eq!(book.available_copies, 10);
    }

    #[test]
    fn available_above_total_is_reported_on_available_copies() {
        let errors = Book::from_draft("BK1".into(), &draft(5, 6), today()).unwrap_err();
        assert_eq!(
            errors.messages("availableCopies"),
            ["Available copies cannot exceed total copies."]
        );
        assert!(!errors.contains("totalCopies"));
    }

    #[test]
    fn negative_and_zero_counts() {
        let errors = Book::from_draft("BK1".into(), &draft(0, -1), today()).unwrap_err();
        assert_eq!(
            errors.messages("totalCopies"),
            ["Total copies must be a positive number."]
        );
        assert_eq!(
            errors.messages("availableCopies"),
            ["Available copies cannot be negative."]
        );
    }

    #[test]
    fn bad_isbn() {
        let d = BookDraft {
            isbn: Some("12-34".into()),
            ..draft(3, 1)
        };
        let errors = Book::from_draft("BK1".into(), &d, today()).unwrap_err();
        assert!(errors.contains("isbn"));
    }
}
