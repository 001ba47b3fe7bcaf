//! Summary and insight generation for a day's journal snippets.
//!
//! Each operation joins the snippets into one prompt body, renders the template
//! for the requested view, makes exactly one upstream call and segments the reply.

use crate::ai::prompts::render_prompt;
use crate::ai::segment::{segment, RequestedView, StructuredResult};
use crate::ai::TextCompletion;
use crate::errors::AppResult;
use crate::journal_core::SnippetBatch;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// Generates the structured result for `view` from raw snippet strings.
///
/// # Flow
///
/// 1. Validate that at least one snippet was given
/// 2. Join snippets with blank lines
/// 3. Render the view's prompt template
/// 4. Send the prompt to the completion backend
/// 5. Segment the reply into the view's fields
///
/// # Errors
///
/// Returns an error if:
/// - `snippets` is empty (`AppError::EmptyBatch`, no upstream call is made)
/// - The completion backend has no credential
/// - The upstream call fails or returns an unparseable envelope
///
/// A reply that ignores the requested format is not an error; missing fields
/// come back as empty strings.
pub fn generate(
    client: &dyn TextCompletion,
    snippets: Vec<String>,
    view: RequestedView,
) -> AppResult<StructuredResult> {
    let batch = SnippetBatch::try_from(snippets)?;
    generate_for_batch(client, &batch, view)
}

/// Same as [`generate`], for an already validated batch.
pub fn generate_for_batch(
    client: &dyn TextCompletion,
    batch: &SnippetBatch,
    view: RequestedView,
) -> AppResult<StructuredResult> {
    let span = info_span!("generate", request_id = %Uuid::new_v4(), view = ?view);
    let _guard = span.enter();

    info!("Generating {:?} result for {} snippets", view, batch.len());

    let prompt = render_prompt(view, &batch.prompt_body());
    debug!("Rendered prompt ({} chars)", prompt.len());

    let raw = client.complete(&prompt)?;
    debug!("Received completion ({} chars)", raw.len());

    let result = segment(&raw, view);
    if let Some(insights) = result.insights() {
        if insights.is_empty() {
            debug!("No insight lines found in completion");
        }
    }

    info!("Generated {:?} result", view);
    Ok(result)
}

/// Summary, analysis and insights for a day.
pub fn summarize_day(
    client: &dyn TextCompletion,
    snippets: Vec<String>,
) -> AppResult<StructuredResult> {
    generate(client, snippets, RequestedView::Full)
}

/// First-person summary only.
pub fn summary_only(
    client: &dyn TextCompletion,
    snippets: Vec<String>,
) -> AppResult<StructuredResult> {
    generate(client, snippets, RequestedView::SummaryOnly)
}

/// Analysis and insights only.
pub fn insights_only(
    client: &dyn TextCompletion,
    snippets: Vec<String>,
) -> AppResult<StructuredResult> {
    generate(client, snippets, RequestedView::InsightsOnly)
}
