//! The text-generation collaborator seam.

use async_trait::async_trait;

use crate::error::GenerationError;

/// One prompt sent to a model.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub prompt: String,
    /// Ask the model to reply with JSON only.
    pub json_output: bool,
    pub temperature: Option<f32>,
}

impl PromptRequest {
    #[must_use]
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_output: true,
            temperature: None,
        }
    }
}

/// A model that turns a prompt into raw reply text.
///
/// One call is one attempt: implementations do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, request: &PromptRequest) -> Result<String, GenerationError>;
}
