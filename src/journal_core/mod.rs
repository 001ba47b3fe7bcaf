//! Core journal functionality without I/O operations.
//!
//! This module contains the pure logic for turning a day's journal snippets into
//! the prompt body sent upstream. It provides the `SnippetBatch` type, which
//! enforces the one invariant the rest of the pipeline relies on: a batch is
//! never empty.

use crate::constants::SNIPPET_SEPARATOR;
use crate::errors::{AppError, AppResult};

/// An ordered, non-empty collection of journal snippets recorded over one day.
///
/// Snippets are opaque strings. They are never re-ordered, trimmed or filtered;
/// the batch only guarantees that at least one snippet is present.
///
/// # Examples
///
/// ```
/// use journal_genai::journal_core::SnippetBatch;
///
/// let batch = SnippetBatch::new(vec![
///     "Woke up energetic".to_string(),
///     "Finished a big project".to_string(),
/// ])?;
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.prompt_body(), "Woke up energetic\n\nFinished a big project");
///
/// assert!(SnippetBatch::new(Vec::new()).is_err());
/// # Ok::<(), journal_genai::AppError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetBatch {
    snippets: Vec<String>,
}

impl SnippetBatch {
    /// Creates a batch from the given snippets.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyBatch` if `snippets` is empty.
    pub fn new(snippets: Vec<String>) -> AppResult<Self> {
        if snippets.is_empty() {
            return Err(AppError::EmptyBatch);
        }
        Ok(Self { snippets })
    }

    /// Number of snippets in the batch.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// The snippets in their original order.
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    /// Joins the snippets with a blank line between each, forming the prompt body.
    pub fn prompt_body(&self) -> String {
        self.snippets.join(SNIPPET_SEPARATOR)
    }
}

impl TryFrom<Vec<String>> for SnippetBatch {
    type Error = AppError;

    fn try_from(snippets: Vec<String>) -> AppResult<Self> {
        SnippetBatch::new(snippets)
    }
}
