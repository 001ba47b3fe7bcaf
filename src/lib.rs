/*!
# journal-genai

A small service library that turns a day's free-text journal snippets into a
first-person reflective summary, a second-person analysis and four structured
insight fields (mood pattern, suggestion, achievement, wellness tip).

Language understanding is delegated to a remote chat-completion API. The
library's job is the contract around that call: rendering a fixed prompt per
requested view, making exactly one upstream request with well-defined failure
modes, and deterministically segmenting the free-text reply into typed fields.

## Architecture

- `ai`: Chat-completions client, prompt templates and reply segmentation
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `constants`: Upstream contract values and environment variable names
- `errors`: Error handling infrastructure
- `journal_core`: The non-empty snippet batch
- `ops`: Generation and health operations

## Usage Example

```rust,no_run
use journal_genai::ai::ChatCompletionClient;
use journal_genai::{ops, Config};

fn main() -> journal_genai::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let client = ChatCompletionClient::from_config(&config);
    let result = ops::summarize_day(
        &client,
        vec!["Woke up energetic".to_string(), "Finished a big project".to_string()],
    )?;

    println!("{}", result.summary().unwrap_or_default());
    Ok(())
}
```
*/

/// Chat-completions client, prompts and reply segmentation
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the service
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Snippet batch handling without I/O
pub mod journal_core;
/// High-level generation and health operations
pub mod ops;

// Re-export important types for convenience
pub use ai::{RequestedView, StructuredResult};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::SnippetBatch;
