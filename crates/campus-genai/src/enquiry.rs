//! Admission enquiry acknowledgement.

use std::sync::Arc;

use async_trait::async_trait;
use campus_core::clock::{Clock, SystemClock};
use campus_core::flows::{EnquiryInput, EnquiryOutput};
use campus_core::validation::Validate;
use campus_schema::SchemaRegistry;
use campus_schema::registry::{ENQUIRY_INPUT, ENQUIRY_OUTPUT};
use tracing::{info, warn};

use crate::error::{EnquiryError, SinkError};

/// Shown when the enquiry was valid but could not be handed on.
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Sorry, we could not submit your enquiry right now. Please try again later.";

/// Where accepted enquiries go (a datastore, a mailer, ...).
#[async_trait]
pub trait EnquirySink: Send + Sync {
    async fn deliver(&self, enquiry: &EnquiryInput) -> Result<(), SinkError>;
}

/// Records each enquiry as a structured log event and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl EnquirySink for LogSink {
    async fn deliver(&self, enquiry: &EnquiryInput) -> Result<(), SinkError> {
        info!(
            full_name = %enquiry.full_name,
            email = %enquiry.email,
            phone = enquiry.phone().unwrap_or("-"),
            class_interested = %enquiry.class_interested,
            message = %enquiry.message,
            "new enquiry received"
        );
        Ok(())
    }
}

#[must_use]
pub fn acknowledgement(enquiry: &EnquiryInput) -> String {
    format!(
        "Thank you for your enquiry, {}. We have received your message regarding class {} \
         and will get back to you shortly.",
        enquiry.full_name.trim(),
        enquiry.class_interested.trim()
    )
}

pub struct EnquiryFlow {
    sink: Arc<dyn EnquirySink>,
    schemas: SchemaRegistry,
    clock: Arc<dyn Clock>,
}

impl Default for EnquiryFlow {
    fn default() -> Self {
        Self::new(Arc::new(LogSink))
    }
}

impl EnquiryFlow {
    #[must_use]
    pub fn new(sink: Arc<dyn EnquirySink>) -> Self {
        Self {
            sink,
            schemas: SchemaRegistry::new(),
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Validate `enquiry`, hand it to the sink, and acknowledge it.
    ///
    /// A sink failure is not an error: the reply has `success == false`.
    ///
    /// # Errors
    ///
    /// `EnquiryError::Validation` when a field is invalid; the sink is not
    /// called.
    pub async fn submit(&self, enquiry: &EnquiryInput) -> Result<EnquiryOutput, EnquiryError> {
        if let Err(errors) = enquiry.validate(self.clock.today()) {
            warn!(%errors, "enquiry rejected");
            return Err(errors.into());
        }
        self.schemas
            .validate(ENQUIRY_INPUT, &serde_json::to_value(enquiry)?)?;

        let output = match self.sink.deliver(enquiry).await {
            Ok(()) => EnquiryOutput {
                success: true,
                message: acknowledgement(enquiry),
            },
            Err(e) => {
                warn!(error = %e, "enquiry delivery failed");
                EnquiryOutput {
                    success: false,
                    message: DELIVERY_FAILED_MESSAGE.to_string(),
                }
            }
        };
        self.schemas
            .validate(ENQUIRY_OUTPUT, &serde_json::to_value(&output)?)?;
        Ok(output)
    }
}
