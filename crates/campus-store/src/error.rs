//! Error types for entity list and service operations.

use campus_core::enums::{Action, EntityType, Role};
use campus_core::errors::CoreError;
use campus_core::validation::FieldErrors;
use thiserror::Error;

/// Errors from entity list and service operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id exists in the collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityType, id: String },

    /// Submitted fields failed validation. Nothing was changed.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// A status transition was attempted that is not allowed.
    #[error("Cannot transition {entity} {id} from {from} to {to}")]
    InvalidTransition {
        entity: EntityType,
        id: String,
        from: String,
        to: String,
    },

    /// The record is not in a state that permits the operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The signed-in role lacks the capability.
    #[error("Role '{role}' may not {action} {entity}")]
    Forbidden {
        role: Role,
        action: Action,
        entity: EntityType,
    },

    /// No user is signed in.
    #[error("Not signed in")]
    NotAuthenticated,

    /// Two records in one collection share an id.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// A JSON draft or bundled data file did not match the record shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<FieldErrors> for StoreError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl StoreError {
    /// Field errors carried by a validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
