use std::sync::Arc;

use anyhow::Context;
use campus_core::access::can_generate_questions;
use campus_genai::{GeminiGenerator, GenerationError, StudyQuestionFlow};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuestionsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus questions`.
pub async fn handle(
    args: &QuestionsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.service.session().require_user()?;
    anyhow::ensure!(
        can_generate_questions(user.role),
        "role '{}' may not generate study questions",
        user.role
    );

    let content = read_content(args).await?;
    if content.trim().is_empty() {
        return Err(GenerationError::EmptyContent.into());
    }

    let generator = GeminiGenerator::from_config(&ctx.config.generation)
        .context("study question generation is not configured")?;
    let mut flow = StudyQuestionFlow::new(Arc::new(generator));
    if let Some(temperature) = ctx.config.generation.temperature {
        flow = flow.with_temperature(temperature);
    }

    let questions = flow.generate(&content).await?;
    output(&questions, flags.format)
}

/// Document text from `--text` or the file named by `--file`.
async fn read_content(args: &QuestionsArgs) -> anyhow::Result<String> {
    match (&args.text, &args.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => anyhow::bail!("either --text or --file is required"),
    }
}
