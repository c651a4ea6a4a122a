//! Demo school loaded by [`crate::service::CampusService::seeded`].
//!
//! Records keep their literal ids and statuses. The one notice dated "today"
//! is built against the service clock.

use campus_core::entities::{
    Book, ExamSchedule, FeeStructure, GalleryItem, LeaveRequest, Notice, SalaryRecord, Student,
    StudentFeeRecord, Teacher, TimetableEntry,
};
use campus_core::enums::{Audience, NoticeType};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::StoreError;

const DEMO: &str = include_str!("seed/demo.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub fee_structures: Vec<FeeStructure>,
    pub fee_records: Vec<StudentFeeRecord>,
    pub salaries: Vec<SalaryRecord>,
    pub books: Vec<Book>,
    pub exams: Vec<ExamSchedule>,
    pub timetable: Vec<TimetableEntry>,
    pub notices: Vec<Notice>,
    pub gallery: Vec<GalleryItem>,
    pub leave_requests: Vec<LeaveRequest>,
}

/// Parse the bundled demo data.
///
/// # Errors
///
/// Returns `StoreError::Json` if the bundled file does not match the record
/// shapes.
pub fn load(today: NaiveDate) -> Result<SeedData, StoreError> {
    let mut data: SeedData = serde_json::from_str(DEMO)?;
    data.notices.push(Notice {
        id: "6".into(),
        title: "Urgent: Water Supply Disruption Tomorrow".into(),
        content: "Due to maintenance work, water supply will be disrupted tomorrow from 10 AM to 2 PM."
            .into(),
        issued_date: today,
        expiry_date: None,
        author: "Admin Office".into(),
        notice_type: Some(NoticeType::Urgent),
        target_audience: vec![Audience::All],
    });
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::today;
    use campus_core::enums::FeeStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_data_parses() {
        let data = load(today()).unwrap();
        assert_eq!(data.students.len(), 6);
        assert_eq!(data.teachers.len(), 4);
        assert_eq!(data.fee_structures.len(), 4);
        assert_eq!(data.fee_records.len(), 5);
        assert_eq!(data.salaries.len(), 3);
        assert_eq!(data.books.len(), 4);
        assert_eq!(data.exams.len(), 3);
        assert_eq!(data.timetable.len(), 5);
        assert_eq!(data.notices.len(), 6);
        assert_eq!(data.gallery.len(), 6);
        assert_eq!(data.leave_requests.len(), 4);
    }

    #[test]
    fn statuses_are_kept_literally() {
        let data = load(today()).unwrap();
        let bob = data.fee_records.iter().find(|r| r.id == "SFR002").unwrap();
        assert_eq!(bob.status, FeeStatus::Pending);
    }

    #[test]
    fn todays_notice_uses_the_clock() {
        let data = load(today()).unwrap();
        let urgent = data.notices.iter().find(|n| n.id == "6").unwrap();
        assert_eq!(urgent.issued_date, today());
    }
}
