//! Active and expired notices.

use campus_core::entities::Notice;
use campus_core::enums::{Action, EntityType};

use crate::error::StoreError;
use crate::service::CampusService;

impl CampusService {
    /// Notices with no expiry date or one that has not passed, newest first.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn notices_active(&self) -> Result<Vec<Notice>, StoreError> {
        self.notices_where(false)
    }

    /// Notices whose expiry date is before today, newest first.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn notices_expired(&self) -> Result<Vec<Notice>, StoreError> {
        self.notices_where(true)
    }

    fn notices_where(&self, expired: bool) -> Result<Vec<Notice>, StoreError> {
        self.authorize(Action::View, EntityType::Notice)?;
        let today = self.today();
        Ok(self
            .notices
            .query()
            .filter(|n| n.is_expired(today) == expired)
            .to_vec())
    }
}
