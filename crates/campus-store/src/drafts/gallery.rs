use std::cmp::Ordering;

use campus_core::entities::{GalleryItem, PLACEHOLDER_IMAGE_URL};
use campus_core::enums::EntityType;
use campus_core::validation::{FieldErrors, is_url, min_chars, non_blank, word_count};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::optional_text;
use crate::record::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDraft {
    pub title: String,
    /// Blank selects the placeholder image.
    #[serde(default)]
    pub image_url: Option<String>,
    pub image_hint: String,
    #[serde(default)]
    pub event_tag: Option<String>,
}

impl GalleryDraft {
    fn build(&self, id: String, date: NaiveDate) -> Result<GalleryItem, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(
            &mut errors,
            "title",
            &self.title,
            3,
            "Title must be at least 3 characters.",
        );

        let image_url = non_blank(self.image_url.as_deref());
        if let Some(url) = image_url
            && !is_url(url)
        {
            errors.add("imageUrl", "Please enter a valid URL.");
        }

        match word_count(&self.image_hint) {
            0 => errors.add("imageHint", "Image hint is required."),
            1 | 2 => {}
            _ => errors.add(
                "imageHint",
                "Hint must be one or two words (e.g., 'sports children', 'science fair').",
            ),
        }
        errors.into_result()?;

        Ok(GalleryItem {
            id,
            title: self.title.trim().to_string(),
            image_url: image_url.unwrap_or(PLACEHOLDER_IMAGE_URL).to_string(),
            image_hint: self.image_hint.split_whitespace().collect::<Vec<_>>().join(" "),
            date,
            event_tag: optional_text(self.event_tag.as_deref()),
        })
    }
}

impl Record for GalleryItem {
    const ENTITY: EntityType = EntityType::Gallery;
    type Draft = GalleryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    /// Dated today.
    fn from_draft(id: String, draft: &GalleryDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(id, today)
    }

    fn apply_draft(&self, draft: &GalleryDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        draft.build(self.id.clone(), self.date)
    }

    /// Newest first.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        other.date.cmp(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, today};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn draft(hint: &str) -> GalleryDraft {
        GalleryDraft {
            title: "Annual Sports Day".into(),
            image_url: None,
            image_hint: hint.into(),
            event_tag: Some("Sports".into()),
        }
    }

    #[test]
    fn blank_url_uses_placeholder() {
        let item = GalleryItem::from_draft("G".into(), &draft("sports children"), today()).unwrap();
        assert_eq!(item.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(item.date, today());
    }

    #[test]
    fn edit_keeps_original_date() {
        let item = GalleryItem::from_draft("G".into(), &draft("sports"), date("2024-03-15")).unwrap();
        let mut d = draft("sports day");
        d.image_url = Some("https://example.com/sports.png".into());
        let edited = item.apply_draft(&d, today()).unwrap();
        assert_eq!(edited.date, date("2024-03-15"));
        assert_eq!(edited.image_url, "https://example.com/sports.png");
    }

    #[rstest]
    #[case("", false)]
    #[case("sports", true)]
    #[case("science  fair", true)]
    #[case("three word hint", false)]
    fn hint_is_one_or_two_words(#[case] hint: &str, #[case] ok: bool) {
        assert_eq!(
            GalleryItem::from_draft("G".into(), &draft(hint), today()).is_ok(),
            ok
        );
    }

    #[test]
    fn invalid_url_is_rejected() {
        let mut d = draft("sports");
        d.image_url = Some("not a url".into());
        let errors = GalleryItem::from_draft("G".into(), &d, today()).unwrap_err();
        assert_eq!(errors.messages("imageUrl"), ["Please enter a valid URL."]);
    }
}
