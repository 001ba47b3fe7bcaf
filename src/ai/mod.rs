//! AI operations for journal summaries and insights.
//!
//! This module wraps a remote chat-completion API and turns its free-text
//! replies into typed results.
//!
//! # Module Structure
//!
//! - `client`: HTTP client for the chat-completions API and the `TextCompletion` seam
//! - `health`: Upstream availability states for the health probe
//! - `prompts`: The fixed prompt templates, one per view
//! - `segment`: Marker-based parsing of model replies
//!
//! # Example
//!
//! ```no_run
//! use journal_genai::ai::{ChatCompletionClient, TextCompletion};
//!
//! let client = ChatCompletionClient::new(
//!     "https://gpu.aet.cit.tum.de/api/chat/completions",
//!     Some("sk-...".to_string()),
//! );
//! let reply = client.complete("Say hello")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod health;
pub mod prompts;
pub mod segment;

// Re-export commonly used types
pub use client::{ChatCompletionClient, Message, TextCompletion};
pub use health::UpstreamStatus;
pub use prompts::render_prompt;
pub use segment::{segment, InsightRecord, RequestedView, StructuredResult};
