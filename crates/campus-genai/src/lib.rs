//! # campus-genai
//!
//! The two request/response flows of Campus Hub:
//!
//! - [`StudyQuestionFlow`]: document text in, schema-checked study questions
//!   out, through a [`TextGenerator`] collaborator (a hosted model via
//!   [`GeminiGenerator`], or any stand-in)
//! - [`EnquiryFlow`]: validated admission enquiries handed to an
//!   [`EnquirySink`] and acknowledged
//!
//! Neither flow retries or imposes a timeout; one call is one attempt.

pub mod enquiry;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod study_questions;

mod http;

pub use enquiry::{EnquiryFlow, EnquirySink, LogSink};
pub use error::{EnquiryError, GenerationError, SinkError};
pub use gemini::GeminiGenerator;
pub use generator::{PromptRequest, TextGenerator};
pub use study_questions::StudyQuestionFlow;
