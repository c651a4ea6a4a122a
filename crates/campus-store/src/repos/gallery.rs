//! Gallery browsing: tag filter and date order.

use std::collections::BTreeSet;

use campus_core::entities::GalleryItem;
use campus_core::enums::{Action, EntityType};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::service::CampusService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl CampusService {
    /// Gallery items tagged `tag` (any tag when `None`), in `order`.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn gallery_view(
        &self,
        tag: Option<&str>,
        order: GalleryOrder,
    ) -> Result<Vec<GalleryItem>, StoreError> {
        let mut query = self.query::<GalleryItem>()?;
        if let Some(tag) = tag {
            query = query.filter(move |item| {
                item.event_tag
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(tag))
            });
        }
        if order == GalleryOrder::OldestFirst {
            query = query.sort_by(|a, b| a.date.cmp(&b.date));
        }
        Ok(query.to_vec())
    }

    /// Distinct event tags, sorted.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn gallery_tags(&self) -> Result<Vec<String>, StoreError> {
        self.authorize(Action::View, EntityType::Gallery)?;
        let tags: BTreeSet<&str> = self
            .gallery
            .iter()
            .filter_map(|item| item.event_tag.as_deref())
            .collect();
        Ok(tags.into_iter().map(String::from).collect())
    }
}
