//! Request and response shapes for the generation and enquiry flows.
//!
//! These are the collaborator contracts: each type has a registered JSON
//! Schema (see `campus-schema`) and both boundaries are checked against it.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldErrors, Validate, is_email, non_blank, required};

/// Document text to derive study questions from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyQuestionsInput {
    /// The document content.
    #[schemars(length(min = 1))]
    pub content: String,
}

/// Questions returned by the model, in presentation order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyQuestionsOutput {
    /// A list of generated study questions.
    #[schemars(length(min = 1))]
    pub questions: Vec<String>,
}

/// An admission enquiry submitted from the public site.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryInput {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub class_interested: String,
    pub message: String,
}

impl Validate for EnquiryInput {
    fn validate(&self, _today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required(&mut errors, "fullName", &self.full_name, "Full name is required.");
        if !is_email(&self.email) {
            errors.add("email", "Invalid email format.");
        }
        required(
            &mut errors,
            "classInterested",
            &self.class_interested,
            "Class interested in is required.",
        );
        required(&mut errors, "message", &self.message, "Message is required.");
        errors.into_result()
    }
}

impl EnquiryInput {
    /// Phone number with blanks treated as absent.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnquiryOutput {
    pub success: bool,
    pub message: String,
}
