//! Salary records: teacher name is copied from the teacher list.

use campus_core::entities::SalaryRecord;

use crate::drafts::SalaryDraft;
use crate::list::EntityList;
use crate::service::{CampusService, Collection};

impl Collection for SalaryRecord {
    fn list(service: &CampusService) -> &EntityList<Self> {
        &service.salaries
    }

    fn list_mut(service: &mut CampusService) -> &mut EntityList<Self> {
        &mut service.salaries
    }

    /// Look up the teacher named by `teacher_id`. An unknown id leaves the
    /// name empty and fails validation on `teacherId`.
    fn resolve(service: &CampusService, draft: &SalaryDraft) -> SalaryDraft {
        let teacher_name = service
            .teachers
            .get(draft.teacher_id.trim())
            .map(|t| t.name.clone());
        SalaryDraft {
            teacher_name,
            ..draft.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::drafts::{SalaryDraft, TeacherDraft};
    use crate::test_support::{admin_service, today};
    use campus_core::entities::{SalaryRecord, Teacher};
    use campus_core::enums::SalaryStatus;
    use pretty_assertions::assert_eq;

    fn draft(teacher_id: &str) -> SalaryDraft {
        SalaryDraft {
            teacher_id: teacher_id.into(),
            month: 7,
            year: 2024,
            basic_salary: 48000.0,
            total_allowances: 4000.0,
            total_deductions: 1500.0,
            payment_status: SalaryStatus::Paid,
            teacher_name: None,
        }
    }

    #[test]
    fn create_copies_teacher_name_and_sorts_newest_first() {
        let mut svc = admin_service();
        let record = svc.create::<SalaryRecord>(&draft("T2003")).unwrap();
        assert_eq!(record.teacher_name, "Ms. Olivia Chen");
        assert_eq!(record.net_salary, 50500.0);
        assert_eq!(record.payment_date, Some(today()));

        let ids: Vec<&str> = svc
            .list::<SalaryRecord>()
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec![record.id.as_str(), "SR1", "SR2", "SR3"]);
    }

    #[test]
    fn unknown_teacher_is_a_field_error() {
        let mut svc = admin_service();
        let err = svc.create::<SalaryRecord>(&draft("T9999")).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().messages("teacherId"),
            ["Teacher not found."]
        );
    }

    #[test]
    fn renamed_teacher_is_a_stale_copy_until_edited() {
        let mut svc = admin_service();
        svc.update::<Teacher>(
            "T2002",
            &TeacherDraft {
                name: "Mr. Sam Green".into(),
                subject: "Mathematics".into(),
                email: "samuel.green@example.com".into(),
                phone: Some("555-010-2000".into()),
            },
        )
        .unwrap();
        assert_eq!(
            svc.get::<SalaryRecord>("SR2").unwrap().teacher_name,
            "Mr. Samuel Green"
        );

        let mut edit = draft("T2002");
        edit.month = 6;
        let edited = svc.update::<SalaryRecord>("SR2", &edit).unwrap();
        assert_eq!(edited.teacher_name, "Mr. Sam Green");
    }
}
