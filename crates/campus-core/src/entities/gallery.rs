use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image shown when an item is saved without a URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400.png";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    /// One or two words describing the image.
    pub image_hint: String,
    pub date: NaiveDate,
    pub event_tag: Option<String>,
}
