//! Generic operations addressed by [`EntityType`] at runtime.
//!
//! Drafts arrive and records leave as JSON values, so a caller that only
//! knows the entity name (the command line) can drive any collection.

use campus_core::entities::{
    Book, ExamSchedule, FeeStructure, GalleryItem, LeaveRequest, Notice, SalaryRecord, Student,
    StudentFeeRecord, Teacher, TimetableEntry,
};
use campus_core::enums::{Action, EntityType};
use campus_core::validation::FieldErrors;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::service::{CampusService, Collection};

/// Filter, sort, and limit for [`CampusService::list_values`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// `(field, value)` pairs, all of which must match.
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
    pub descending: bool,
    pub limit: Option<usize>,
}

/// Bind `$record` to the concrete type for `$entity` and evaluate `$body`.
macro_rules! with_record {
    ($entity:expr, $record:ident => $body:expr) => {
        match $entity {
            EntityType::Student => {
                type $record = Student;
                $body
            }
            EntityType::Teacher => {
                type $record = Teacher;
                $body
            }
            EntityType::FeeStructure => {
                type $record = FeeStructure;
                $body
            }
            EntityType::FeeRecord => {
                type $record = StudentFeeRecord;
                $body
            }
            EntityType::Salary => {
                type $record = SalaryRecord;
                $body
            }
            EntityType::Book => {
                type $record = Book;
                $body
            }
            EntityType::Exam => {
                type $record = ExamSchedule;
                $body
            }
            EntityType::Timetable => {
                type $record = TimetableEntry;
                $body
            }
            EntityType::Notice => {
                type $record = Notice;
                $body
            }
            EntityType::Gallery => {
                type $record = GalleryItem;
                $body
            }
            EntityType::LeaveRequest => {
                type $record = LeaveRequest;
                $body
            }
        }
    };
}

impl CampusService {
    /// # Errors
    ///
    /// Authorization errors.
    pub fn list_values(
        &self,
        entity: EntityType,
        options: &ListOptions,
    ) -> Result<Vec<Value>, StoreError> {
        with_record!(entity, R => self.list_as::<R>(options))
    }

    /// # Errors
    ///
    /// Authorization errors or `StoreError::NotFound`.
    pub fn get_value(&self, entity: EntityType, id: &str) -> Result<Value, StoreError> {
        with_record!(entity, R => to_value(self.get::<R>(id)?))
    }

    /// # Errors
    ///
    /// Authorization errors first, then `StoreError::Validation` keyed by the
    /// offending field if `draft` does not have the draft shape, otherwise as
    /// [`CampusService::create`].
    pub fn create_value(&mut self, entity: EntityType, draft: &Value) -> Result<Value, StoreError> {
        self.authorize(Action::Create, entity)?;
        with_record!(entity, R => {
            let draft = decode_draft::<<R as crate::record::Record>::Draft>(draft)?;
            to_value(&self.create::<R>(&draft)?)
        })
    }

    /// # Errors
    ///
    /// Authorization errors, then `StoreError::NotFound` for an unknown `id`,
    /// then field-keyed `StoreError::Validation` for a misshapen `draft`,
    /// otherwise as [`CampusService::update`].
    pub fn update_value(
        &mut self,
        entity: EntityType,
        id: &str,
        draft: &Value,
    ) -> Result<Value, StoreError> {
        self.authorize(Action::Update, entity)?;
        with_record!(entity, R => {
            R::list(self).find(id)?;
            let draft = decode_draft::<<R as crate::record::Record>::Draft>(draft)?;
            to_value(&self.update::<R>(id, &draft)?)
        })
    }

    /// # Errors
    ///
    /// As [`CampusService::delete`].
    pub fn delete_value(&mut self, entity: EntityType, id: &str) -> Result<Value, StoreError> {
        with_record!(entity, R => to_value(&self.delete::<R>(id)?))
    }

    fn list_as<R: Collection>(&self, options: &ListOptions) -> Result<Vec<Value>, StoreError> {
        let mut query = self.query::<R>()?;
        for (field, value) in &options.filters {
            query = query.where_field(field, value);
        }
        if let Some(field) = &options.sort {
            query = query.order_by_field(field, options.descending);
        }
        if let Some(limit) = options.limit {
            query = query.limit(limit);
        }
        query.run().into_iter().map(to_value).collect()
    }
}

fn to_value<T: Serialize>(record: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(record)?)
}

/// Deserialize a draft, reporting shape failures per camelCase field.
///
/// On failure each property of the draft's JSON schema is checked on its own
/// so the error names the field instead of carrying serde's byte offset.
fn decode_draft<D: DeserializeOwned + JsonSchema>(value: &Value) -> Result<D, StoreError> {
    let Value::Object(fields) = value else {
        return Err(StoreError::Validation(FieldErrors::single(
            "draft",
            "Expected a JSON object.",
        )));
    };
    let serde_error = match D::deserialize(value) {
        Ok(draft) => return Ok(draft),
        Err(err) => err,
    };

    let schema = serde_json::to_value(schemars::schema_for!(D))?;
    let mut errors = shape_errors(&schema, fields);
    if errors.is_empty() {
        errors.add("draft", serde_error.to_string());
    }
    Err(StoreError::Validation(errors))
}

fn shape_errors(schema: &Value, fields: &Map<String, Value>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let Some(properties) = schema["properties"].as_object() else {
        return errors;
    };

    for (name, property) in properties {
        match fields.get(name) {
            None | Some(Value::Null) if required.contains(&name.as_str()) => {
                errors.add(name, "This field is required.");
            }
            None => {}
            Some(found) => {
                if !matches_property(schema, property, found) {
                    errors.add(name, "Invalid value.");
                }
            }
        }
    }
    errors
}

/// Check `found` against one property subschema, carrying the root `$defs`
/// so enum references still resolve.
fn matches_property(root: &Value, property: &Value, found: &Value) -> bool {
    let mut sub = property.clone();
    if let (Value::Object(sub), Some(defs)) = (&mut sub, root.get("$defs")) {
        sub.insert("$defs".into(), defs.clone());
    }
    jsonschema::validator_for(&sub).is_ok_and(|validator| validator.is_valid(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin_service, service_as};
    use campus_core::enums::Role;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ids(values: &[Value]) -> Vec<&str> {
        values.iter().filter_map(|v| v["id"].as_str()).collect()
    }

    #[test]
    fn list_with_filter_sort_and_limit() {
        let svc = admin_service();
        let options = ListOptions {
            filters: vec![("status".into(), "paid".into())],
            sort: Some("amountDue".into()),
            descending: true,
            limit: None,
        };
        let paid = svc.list_values(EntityType::FeeRecord, &options).unwrap();
        assert_eq!(ids(&paid), vec!["SFR001", "SFR005"]);

        let first = ListOptions {
            limit: Some(2),
            ..ListOptions::default()
        };
        let books = svc.list_values(EntityType::Book, &first).unwrap();
        assert_eq!(books.len(), 2);
    }

    #[test]
    fn array_fields_match_any_element() {
        let svc = admin_service();
        let options = ListOptions {
            filters: vec![("applicableClasses".into(), "10".into())],
            ..ListOptions::default()
        };
        let exams = svc.list_values(EntityType::Exam, &options).unwrap();
        assert_eq!(ids(&exams), vec!["EXM001", "EXM003"]);
    }

    #[test]
    fn create_update_delete_from_json() {
        let mut svc = admin_service();
        let created = svc
            .create_value(
                EntityType::Book,
                &json!({
                    "title": "Brave New World",
                    "author": "Aldous Huxley",
                    "totalCopies": 3,
                    "availableCopies": 3
                }),
            )
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let updated = svc
            .update_value(
                EntityType::Book,
                &id,
                &json!({
                    "title": "Brave New World",
                    "author": "Aldous Huxley",
                    "totalCopies": 3,
                    "availableCopies": 1
                }),
            )
            .unwrap();
        assert_eq!(updated["availableCopies"], 1);
        assert_eq!(svc.get_value(EntityType::Book, &id).unwrap(), updated);

        svc.delete_value(EntityType::Book, &id).unwrap();
        assert!(svc.get_value(EntityType::Book, &id).is_err());
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut svc = admin_service();
        let before = svc.list_values(EntityType::Book, &ListOptions::default()).unwrap().len();
        let err = svc
            .create_value(
                EntityType::Book,
                &json!({ "title": "Dune", "author": "Frank Herbert", "totalCopies": 2 }),
            )
            .unwrap_err();
        let fields = err.field_errors().expect("validation error");
        assert_eq!(fields.fields().collect::<Vec<_>>(), vec!["availableCopies"]);
        assert_eq!(
            svc.list_values(EntityType::Book, &ListOptions::default()).unwrap().len(),
            before
        );
    }

    #[test]
    fn wrong_type_is_reported_by_name() {
        let mut svc = admin_service();
        let err = svc
            .create_value(
                EntityType::Book,
                &json!({
                    "title": "Dune",
                    "author": "Frank Herbert",
                    "totalCopies": "two",
                    "availableCopies": 2
                }),
            )
            .unwrap_err();
        assert!(err.field_errors().expect("validation error").contains("totalCopies"));

        let err = svc
            .create_value(EntityType::Teacher, &json!({ "name": 42 }))
            .unwrap_err();
        assert!(err.field_errors().expect("validation error").contains("name"));
    }

    #[test]
    fn unknown_enum_value_is_reported_by_name() {
        let mut svc = admin_service();
        let err = svc
            .create_value(
                EntityType::Timetable,
                &json!({
                    "classId": "10-A",
                    "day": "Funday",
                    "time": "09:00 - 10:00",
                    "subject": "Maths",
                    "teacher": "Ms. Rao",
                    "room": "101"
                }),
            )
            .unwrap_err();
        assert!(err.field_errors().expect("validation error").contains("day"));
    }

    #[test]
    fn non_object_draft_is_a_validation_error() {
        let mut svc = admin_service();
        let err = svc.create_value(EntityType::Book, &json!([1, 2])).unwrap_err();
        assert!(err.field_errors().expect("validation error").contains("draft"));
    }

    #[test]
    fn update_of_unknown_id_is_not_found_before_shape() {
        let mut svc = admin_service();
        let err = svc
            .update_value(EntityType::Book, "BK-nope", &json!({ "title": "x" }))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }), "{err:?}");
    }

    #[test]
    fn forbidden_before_shape() {
        let mut svc = service_as(Role::Teacher);
        let err = svc
            .create_value(EntityType::Book, &json!({ "title": 7 }))
            .unwrap_err();
        assert!(matches!(err, StoreError::Forbidden { .. }), "{err:?}");

        let err = svc
            .update_value(EntityType::Book, "BK-nope", &json!({}))
            .unwrap_err();
        assert!(matches!(err, StoreError::Forbidden { .. }), "{err:?}");
    }
}
