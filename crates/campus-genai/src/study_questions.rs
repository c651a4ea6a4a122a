//! Study questions from document text.
//!
//! One call makes one model request. The input is checked before anything
//! is sent, and the reply is accepted only if it matches the registered
//! output schema in full; otherwise the caller gets an error and no
//! questions.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use campus_core::flows::{StudyQuestionsInput, StudyQuestionsOutput};
use campus_schema::SchemaRegistry;
use campus_schema::registry::{STUDY_QUESTIONS_INPUT, STUDY_QUESTIONS_OUTPUT};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::GenerationError;
use crate::generator::{PromptRequest, TextGenerator};

/// Fixed instruction wrapped around the document.
#[must_use]
pub fn build_prompt(content: &str) -> String {
    format!(
        "You are an expert educator. Generate study questions based on the following \
         document content:\n\n{content}\n\n\
         Ensure the questions are comprehensive and cover the key concepts in the document.\n\
         Return the questions as a JSON array of strings, wrapped in an object of the form \
         {{\"questions\": [\"...\"]}}."
    )
}

pub struct StudyQuestionFlow {
    generator: Arc<dyn TextGenerator>,
    schemas: SchemaRegistry,
    temperature: Option<f32>,
    in_flight: Mutex<HashSet<String>>,
}

impl StudyQuestionFlow {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            schemas: SchemaRegistry::new(),
            temperature: None,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Whether a request for `content` is currently awaiting the model.
    #[must_use]
    pub fn is_in_flight(&self, content: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(content)
    }

    /// Generate questions for `content`.
    ///
    /// # Errors
    ///
    /// `EmptyContent` before any request is made, `AlreadyInFlight` while
    /// the same content is pending, otherwise whatever the model call or
    /// the reply check reports.
    pub async fn generate(&self, content: &str) -> Result<StudyQuestionsOutput, GenerationError> {
        if content.trim().is_empty() {
            return Err(GenerationError::EmptyContent);
        }
        let input = StudyQuestionsInput {
            content: content.to_string(),
        };
        self.schemas
            .validate(STUDY_QUESTIONS_INPUT, &serde_json::to_value(&input)?)?;

        let _guard = InFlight::acquire(&self.in_flight, content)?;
        let request = PromptRequest {
            temperature: self.temperature,
            ..PromptRequest::json(build_prompt(content))
        };
        info!(
            generator = self.generator.name(),
            chars = content.chars().count(),
            "generating study questions"
        );

        let raw = self.generator.generate(&request).await.inspect_err(|e| {
            warn!(error = %e, "study question generation failed");
        })?;
        let output = parse_reply(&self.schemas, &raw)?;
        info!(count = output.questions.len(), "study questions generated");
        Ok(output)
    }
}

/// Check a raw model reply against the output schema.
///
/// # Errors
///
/// `Malformed` when the reply is not JSON, `Schema` when it does not have
/// the declared shape (including an empty question list).
pub fn parse_reply(
    schemas: &SchemaRegistry,
    raw: &str,
) -> Result<StudyQuestionsOutput, GenerationError> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| GenerationError::Malformed(format!("reply is not JSON: {e}")))?;
    schemas.validate(STUDY_QUESTIONS_OUTPUT, &value)?;
    Ok(serde_json::from_value(value)?)
}

/// Drop a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    let body = match rest.split_once('\n') {
        Some((_tag, body)) => body,
        None => rest.strip_prefix("json").unwrap_or(rest),
    };
    body.trim()
}

/// Marks `content` as pending until dropped.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> InFlight<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, content: &str) -> Result<Self, GenerationError> {
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(content.to_string());
        if !inserted {
            return Err(GenerationError::AlreadyInFlight);
        }
        Ok(Self {
            set,
            key: content.to_string(),
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_embeds_content() {
        let prompt = build_prompt("Mitochondria produce ATP.");
        assert!(prompt.starts_with("You are an expert educator."));
        assert!(prompt.contains("\n\nMitochondria produce ATP.\n\n"));
        assert!(prompt.contains("{\"questions\""));
    }

    #[test]
    fn fences_are_stripped() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[1]\n```\n"), "[1]");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn single_line_fence_keeps_its_body() {
        assert_eq!(
            strip_code_fence("```json {\"questions\":[\"a\"]}```"),
            "{\"questions\":[\"a\"]}"
        );
        assert_eq!(strip_code_fence("```[1, 2]```"), "[1, 2]");

        let schemas = SchemaRegistry::new();
        let parsed = parse_reply(&schemas, "```json {\"questions\":[\"a\"]}```").unwrap();
        assert_eq!(parsed.questions, vec!["a"]);
    }

    #[test]
    fn reply_must_match_schema() {
        let schemas = SchemaRegistry::new();
        let ok = parse_reply(&schemas, r#"{"questions": ["What is ATP?", "Where is it made?"]}"#)
            .unwrap();
        assert_eq!(ok.questions, vec!["What is ATP?", "Where is it made?"]);

        assert!(matches!(
            parse_reply(&schemas, r#"{"questions": []}"#),
            Err(GenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_reply(&schemas, r#"["What is ATP?"]"#),
            Err(GenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_reply(&schemas, r#"{"questions": [1, 2]}"#),
            Err(GenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_reply(&schemas, "Here are your questions:"),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn guard_releases_on_drop() {
        let set = Mutex::new(HashSet::new());
        {
            let _guard = InFlight::acquire(&set, "x").unwrap();
            assert!(matches!(
                InFlight::acquire(&set, "x"),
                Err(GenerationError::AlreadyInFlight)
            ));
            assert!(InFlight::acquire(&set, "y").is_ok());
        }
        assert!(set.lock().unwrap().is_empty());
    }
}
