//! Weekly timetable grid for one class.

use campus_core::entities::TimetableEntry;

use crate::error::StoreError;
use crate::service::CampusService;

impl CampusService {
    /// Periods of `class_id` ordered by weekday, then time slot.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn timetable_for_class(&self, class_id: &str) -> Result<Vec<TimetableEntry>, StoreError> {
        Ok(self
            .query::<TimetableEntry>()?
            .filter(|e| e.class_id.eq_ignore_ascii_case(class_id))
            .sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.time.cmp(&b.time)))
            .to_vec())
    }
}
