//! Capability table: which role may perform which action on which record kind.
//!
//! Checked once per operation by the service layer. Viewing follows the school
//! navigation (who can open which screen); every mutation is admin-only.

use crate::enums::{Action, EntityType, Role};

/// Roles allowed to open the screen backing `entity`.
#[must_use]
pub const fn viewers(entity: EntityType) -> &'static [Role] {
    use Role::{Accountant, Admin, Librarian, Parent, Principal, Student, Teacher};
    match entity {
        EntityType::Student | EntityType::LeaveRequest => &[Admin, Principal, Teacher],
        EntityType::Teacher => &[Admin, Principal],
        EntityType::Timetable | EntityType::Exam => &[Admin, Teacher, Student, Parent, Principal],
        EntityType::Book => &[Admin, Librarian, Teacher, Student, Principal],
        EntityType::Gallery | EntityType::Notice => &[
            Admin, Teacher, Student, Parent, Principal, Librarian, Accountant,
        ],
        EntityType::FeeStructure | EntityType::FeeRecord | EntityType::Salary => {
            &[Admin, Accountant, Principal]
        }
    }
}

/// Whether `role` may perform `action` on records of `entity`.
#[must_use]
pub fn can(role: Role, action: Action, entity: EntityType) -> bool {
    match action {
        Action::View => viewers(entity).contains(&role),
        Action::Create | Action::Update | Action::Delete => role == Role::Admin,
    }
}

#[must_use]
pub fn can_view(role: Role, entity: EntityType) -> bool {
    can(role, Action::View, entity)
}

#[must_use]
pub fn can_create(role: Role, entity: EntityType) -> bool {
    can(role, Action::Create, entity)
}

#[must_use]
pub fn can_update(role: Role, entity: EntityType) -> bool {
    can(role, Action::Update, entity)
}

#[must_use]
pub fn can_delete(role: Role, entity: EntityType) -> bool {
    can(role, Action::Delete, entity)
}

/// Whether `role` may use the study-question generator.
#[must_use]
pub fn can_generate_questions(role: Role) -> bool {
    matches!(
        role,
        Role::Admin | Role::Teacher | Role::Student | Role::Principal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_do_everything() {
        for entity in EntityType::ALL {
            for action in [Action::View, Action::Create, Action::Update, Action::Delete] {
                assert!(can(Role::Admin, action, entity), "{action} {entity}");
            }
        }
    }

    #[test]
    fn only_admin_mutates() {
        for role in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
            for entity in EntityType::ALL {
                assert!(!can_create(role, entity));
                assert!(!can_update(role, entity));
                assert!(!can_delete(role, entity));
            }
        }
    }

    #[test]
    fn finance_screens_are_restricted() {
        assert!(can_view(Role::Accountant, EntityType::FeeRecord));
        assert!(can_view(Role::Principal, EntityType::Salary));
        assert!(!can_view(Role::Teacher, EntityType::Salary));
        assert!(!can_view(Role::Parent, EntityType::FeeStructure));
    }

    #[test]
    fn notices_are_public_to_signed_in_users() {
        for role in Role::ALL {
            assert!(can_view(role, EntityType::Notice));
        }
    }

    #[test]
    fn question_generator_roles() {
        assert!(can_generate_questions(Role::Student));
        assert!(!can_generate_questions(Role::Parent));
        assert!(!can_generate_questions(Role::Librarian));
    }
}
