//! Error types for the generation and enquiry flows.

use campus_config::ConfigError;
use campus_core::validation::FieldErrors;
use campus_schema::SchemaError;
use thiserror::Error;

/// Errors from a study-question generation request.
///
/// Every variant means no questions were produced; partial results are
/// never returned.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The document content was empty. No request was sent.
    #[error("Document content is required.")]
    EmptyContent,

    /// The same content is already being processed.
    #[error("A request for this content is already in progress")]
    AlreadyInFlight,

    /// The request or the model's reply did not match its declared schema.
    #[error("Non-conforming payload: {0}")]
    Schema(#[from] SchemaError),

    /// The reply could not be read as the expected JSON.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The model API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model API returned 429 Too Many Requests.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from an enquiry submission.
#[derive(Debug, Error)]
pub enum EnquiryError {
    /// The enquiry form failed validation. Nothing was delivered.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Non-conforming payload: {0}")]
    Schema(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FieldErrors> for EnquiryError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Failure reported by an enquiry sink.
#[derive(Debug, Error)]
#[error("enquiry delivery failed: {0}")]
pub struct SinkError(pub String);
