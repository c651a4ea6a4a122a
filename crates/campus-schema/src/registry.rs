//! Central schema registry for all Campus Hub types.
//!
//! The `SchemaRegistry` builds JSON Schemas from campus-core types at
//! construction time using [`schemars::schema_for!`] and validates with
//! `jsonschema`.

use std::collections::HashMap;

use campus_core::entities;
use campus_core::enums::EntityType;
use campus_core::flows;
use schemars::schema_for;

use crate::error::SchemaError;

/// Schema name of the study-question request.
pub const STUDY_QUESTIONS_INPUT: &str = "study_questions_input";
/// Schema name of the study-question result.
pub const STUDY_QUESTIONS_OUTPUT: &str = "study_questions_output";
pub const ENQUIRY_INPUT: &str = "enquiry_input";
pub const ENQUIRY_OUTPUT: &str = "enquiry_output";

/// Named JSON Schemas for every record and flow type.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry holding one schema per entity kind (named by
    /// [`EntityType::as_str`]) plus the four flow contracts.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which does not happen for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Records (11) ---
        register!(schemas, EntityType::Student.as_str(), entities::Student);
        register!(schemas, EntityType::Teacher.as_str(), entities::Teacher);
        register!(
            schemas,
            EntityType::FeeStructure.as_str(),
            entities::FeeStructure
        );
        register!(
            schemas,
            EntityType::FeeRecord.as_str(),
            entities::StudentFeeRecord
        );
        register!(schemas, EntityType::Salary.as_str(), entities::SalaryRecord);
        register!(schemas, EntityType::Book.as_str(), entities::Book);
        register!(schemas, EntityType::Exam.as_str(), entities::ExamSchedule);
        register!(
            schemas,
            EntityType::Timetable.as_str(),
            entities::TimetableEntry
        );
        register!(schemas, EntityType::Notice.as_str(), entities::Notice);
        register!(schemas, EntityType::Gallery.as_str(), entities::GalleryItem);
        register!(
            schemas,
            EntityType::LeaveRequest.as_str(),
            entities::LeaveRequest
        );

        // --- Flow contracts (4) ---
        register!(schemas, STUDY_QUESTIONS_INPUT, flows::StudyQuestionsInput);
        register!(schemas, STUDY_QUESTIONS_OUTPUT, flows::StudyQuestionsOutput);
        register!(schemas, ENQUIRY_INPUT, flows::EnquiryInput);
        register!(schemas, ENQUIRY_OUTPUT, flows::EnquiryOutput);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
