//! Behavioural properties of the generic entity list, exercised through the
//! public service API against the demo school.

use std::collections::HashSet;
use std::sync::Arc;

use campus_core::clock::FixedClock;
use campus_core::entities::{Book, ExamSchedule, Student, StudentFeeRecord};
use campus_core::enums::{ExamStatus, FeeStatus, Role};
use campus_core::identity::User;
use campus_store::drafts::{BookDraft, ExamDraft, Payment, StudentDraft};
use campus_store::{CampusService, StoreError};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn service() -> CampusService {
    let today = NaiveDate::from_ymd_opt(2024, 7, 21).unwrap();
    let mut svc = CampusService::seeded(Arc::new(FixedClock(today))).unwrap();
    svc.login(User::mock("admin@school.test", Role::Admin).unwrap());
    svc
}

fn student(name: &str) -> StudentDraft {
    StudentDraft {
        name: name.into(),
        class_name: "7".into(),
        section: "b".into(),
        admission_date: "2024-06-01".into(),
        roll_number: None,
        date_of_birth: None,
        gender: None,
        guardian_name: None,
        guardian_phone: None,
        address: None,
    }
}

#[test]
fn created_records_never_share_an_id() {
    let mut svc = service();
    for i in 0..100 {
        svc.create::<Student>(&student(&format!("Student {i:03}")))
            .unwrap();
    }
    let students = svc.list::<Student>().unwrap();
    let ids: HashSet<&str> = students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), students.len());
    assert_eq!(students.len(), 106);
}

#[test]
fn update_is_reflected_and_others_are_untouched() {
    let mut svc = service();
    let others: Vec<Student> = svc
        .list::<Student>()
        .unwrap()
        .iter()
        .filter(|s| s.id != "S1002")
        .cloned()
        .collect();

    let mut draft = student("Zara Williams");
    draft.class_name = "9".into();
    svc.update::<Student>("S1002", &draft).unwrap();

    let updated = svc.get::<Student>("S1002").unwrap();
    assert_eq!(updated.name, "Zara Williams");
    assert_eq!(updated.section, "B");

    // Renaming moved the record to the end of the name order.
    let all = svc.list::<Student>().unwrap();
    assert_eq!(all.last().map(|s| s.id.as_str()), Some("S1002"));
    let rest: Vec<Student> = all.iter().filter(|s| s.id != "S1002").cloned().collect();
    assert_eq!(rest, others);
}

#[test]
fn delete_removes_one_and_repeat_fails() {
    let mut svc = service();
    svc.delete::<Book>("BK003").unwrap();
    assert_eq!(svc.list::<Book>().unwrap().len(), 3);

    let err = svc.delete::<Book>("BK003").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(svc.list::<Book>().unwrap().len(), 3);
}

#[test]
fn available_copies_above_total_is_rejected_without_change() {
    let mut svc = service();
    let before = svc.list::<Book>().unwrap().to_vec();
    let err = svc
        .create::<Book>(&BookDraft {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            isbn: None,
            total_copies: 2,
            available_copies: 5,
        })
        .unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["availableCopies"]);
    assert_eq!(svc.list::<Book>().unwrap(), before.as_slice());
}

#[test]
fn exam_ending_before_it_starts_is_rejected() {
    let mut svc = service();
    let before = svc.list::<ExamSchedule>().unwrap().to_vec();
    let err = svc
        .create::<ExamSchedule>(&ExamDraft {
            exam_name: "Unit Test 2".into(),
            applicable_classes: vec!["9".into()],
            start_date: "2024-10-10".into(),
            end_date: "2024-10-01".into(),
            status: ExamStatus::Upcoming,
        })
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains("endDate"));
    assert_eq!(svc.list::<ExamSchedule>().unwrap(), before.as_slice());
}

#[test]
fn partial_payments_settle_an_overdue_fee() {
    let mut svc = service();
    let record = svc.get::<StudentFeeRecord>("SFR004").unwrap();
    assert_eq!(record.status, FeeStatus::Overdue);

    let pay = |amount: f64| Payment {
        amount,
        date: "2024-07-21".into(),
        notes: Some("Cash".into()),
    };
    let partial = svc.record_fee_payment("SFR004", &pay(3000.0)).unwrap();
    assert_eq!(partial.status, FeeStatus::PartiallyPaid);
    let paid = svc.record_fee_payment("SFR004", &pay(2000.0)).unwrap();
    assert_eq!(paid.status, FeeStatus::Paid);
    assert!(!paid.accepts_payment());
}

#[test]
fn promoting_a_graduate_is_a_no_op() {
    let mut svc = service();
    let before = svc.get::<Student>("S1006").unwrap().clone();
    let outcome = svc.promote_student("S1006").unwrap();
    assert!(!outcome.promoted);
    assert_eq!(svc.get::<Student>("S1006").unwrap(), &before);
}

#[test]
fn query_is_recomputed_after_mutation() {
    let mut svc = service();
    assert_eq!(svc.students_in_class("7").unwrap().len(), 0);
    svc.create::<Student>(&student("Greta Hall")).unwrap();
    assert_eq!(svc.students_in_class("7").unwrap().len(), 1);
}
