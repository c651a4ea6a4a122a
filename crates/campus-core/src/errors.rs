//! Cross-cutting error types for Campus Hub.
//!
//! Errors that can originate from any crate. Domain errors (`StoreError`,
//! `GenerationError`, ...) live in their own crates and wrap this one where needed.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors that can be raised by any Campus Hub crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A status transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Submitted fields failed validation.
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// An operation needed a signed-in user and the session is empty.
    #[error("Not signed in")]
    NotAuthenticated,

    /// The system random source failed while generating an ID.
    #[error("Random source unavailable: {0}")]
    Random(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
