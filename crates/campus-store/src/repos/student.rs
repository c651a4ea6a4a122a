//! Student promotion and class roll.

use campus_core::entities::Student;
use campus_core::enums::{Action, EntityType};
use campus_core::grades::next_class;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::service::CampusService;

/// Outcome of a promotion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub student: Student,
    pub from: String,
    pub to: String,
    /// `false` when the student was already graduated (or had an unknown
    /// class label) and nothing changed.
    pub promoted: bool,
}

impl CampusService {
    /// Move student `id` to the next class level.
    ///
    /// Promoting a graduated student is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Authorization errors or `StoreError::NotFound`.
    pub fn promote_student(&mut self, id: &str) -> Result<Promotion, StoreError> {
        self.authorize(Action::Update, EntityType::Student)?;
        let current = self.students.find(id)?.clone();
        let Some(next) = next_class(&current.class_name) else {
            debug!(id, class = %current.class_name, "promotion skipped");
            return Ok(Promotion {
                from: current.class_name.clone(),
                to: current.class_name.clone(),
                student: current,
                promoted: false,
            });
        };

        let student = self.students.modify(id, |s| {
            Ok(Student {
                class_name: next.to_string(),
                ..s.clone()
            })
        })?;
        info!(id, from = %current.class_name, to = next, "student promoted");
        Ok(Promotion {
            student,
            from: current.class_name,
            to: next.to_string(),
            promoted: true,
        })
    }

    /// Students whose class label is `class_name`, in name order.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn students_in_class(&self, class_name: &str) -> Result<Vec<Student>, StoreError> {
        Ok(self
            .query::<Student>()?
            .filter(|s| s.class_name.eq_ignore_ascii_case(class_name))
            .to_vec())
    }
}
