//! Shared helpers for campus-store unit tests.

use std::cmp::Ordering;
use std::sync::Arc;

use campus_core::clock::{Clock, FixedClock};
use campus_core::enums::{EntityType, Role};
use campus_core::identity::User;
use campus_core::validation::{FieldErrors, required};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::service::CampusService;

/// The date every unit test runs on.
pub fn today() -> NaiveDate {
    date("2024-07-21")
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(today()))
}

/// Seeded service with a signed-in user of `role`.
pub fn service_as(role: Role) -> CampusService {
    let mut svc = CampusService::seeded(fixed_clock()).unwrap();
    svc.login(User::mock(&format!("{role}@school.test"), role).unwrap());
    svc
}

pub fn admin_service() -> CampusService {
    service_as(Role::Admin)
}

/// Minimal record used to exercise the generic list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Memo {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoDraft {
    pub title: String,
}

impl Record for Memo {
    const ENTITY: EntityType = EntityType::Notice;
    type Draft = MemoDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &MemoDraft, _today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        required(&mut errors, "title", &draft.title, "Title is required.");
        errors.into_result()?;
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
        })
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}
