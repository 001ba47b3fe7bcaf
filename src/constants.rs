//! Constants used throughout the service.
//!
//! This module contains the fixed values of the summarization service, organized
//! into logical groups. Keeping them in one place makes the upstream contract easy
//! to audit: endpoint, model, timeouts and credential sentinel all live here.

use std::time::Duration;

// Service Metadata
/// The name of the service, reported in health documents and tracing spans.
pub const SERVICE_NAME: &str = "genai-microservice";
/// The version reported in health documents.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "LLM summarization service for journal snippets";

// Upstream Contract
/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://gpu.aet.cit.tum.de/api/chat/completions";
/// Model identifier sent with every upstream request.
pub const DEFAULT_CHAT_MODEL: &str = "llama3.3:latest";
/// Hard cap on a single completion call.
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);
/// Hard cap on a single health probe.
pub const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
/// Prompt sent by the health probe.
pub const HEALTH_PROBE_PROMPT: &str = "test";
/// Token budget requested by the health probe.
pub const HEALTH_PROBE_MAX_TOKENS: u32 = 1;
/// Placeholder credential that deployments use to switch the upstream off.
pub const DISABLED_API_KEY_SENTINEL: &str = "dummy";
/// Number of credential characters shown in debug output.
pub const API_KEY_PREFIX_LEN: usize = 10;

// Configuration Keys & Environment Variables
/// Environment variable holding the upstream endpoint URL.
pub const ENV_VAR_API_URL: &str = "GENAI_API_URL";
/// Environment variable holding the bearer credential.
pub const ENV_VAR_API_KEY: &str = "GENAI_API_KEY";
/// Environment variable holding the port reported in health documents.
pub const ENV_VAR_PORT: &str = "PORT";
/// Environment variable selecting the log format.
pub const ENV_VAR_LOG_FORMAT: &str = "LOG_FORMAT";
/// Environment variable selecting the default log level.
pub const ENV_VAR_LOG_LEVEL: &str = "LOG_LEVEL";
/// Default port reported in health documents.
pub const DEFAULT_PORT: u16 = 8082;

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Snippet Handling
/// Separator placed between snippets when they are joined into one prompt body.
pub const SNIPPET_SEPARATOR: &str = "\n\n";
