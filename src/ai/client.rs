//! Chat-completions HTTP client.
//!
//! This module adapts an OpenAI-style chat-completions endpoint into a single
//! prompt-in, text-out call. Callers depend on the [`TextCompletion`] trait so
//! that tests can substitute a canned reply for the network.

use super::health::{usable_credential, UpstreamStatus};
use crate::config::Config;
use crate::constants::{
    COMPLETION_TIMEOUT, DEFAULT_CHAT_MODEL, HEALTH_PROBE_MAX_TOKENS, HEALTH_PROBE_PROMPT,
    HEALTH_PROBE_TIMEOUT,
};
use crate::errors::{AIError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a message with an arbitrary role.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Something that turns a prompt into generated text.
///
/// One implementation exists per upstream protocol; tests provide their own.
pub trait TextCompletion {
    /// Sends `prompt` as a single user message and returns the reply text.
    ///
    /// # Errors
    ///
    /// Returns `AIError::CredentialMissing`, `AIError::UpstreamUnreachable` or
    /// `AIError::UpstreamProtocol` wrapped in `AppError::AI`.
    fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Response envelope from chat completion. Only `choices[0].message.content` is read.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatCompletionClient {
    api_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl ChatCompletionClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_url` - Full chat-completions URL (e.g., "https://host/api/chat/completions")
    /// * `api_key` - Bearer credential; `None` or an empty string means no credential
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            model: DEFAULT_CHAT_MODEL.to_string(),
            client: Client::new(),
        }
    }

    /// Creates a client from the loaded service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a chat completion request and returns the first choice's content, trimmed.
    ///
    /// Exactly one HTTP request is made, capped at 30 seconds. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential is configured (checked before any network access)
    /// - The endpoint is unreachable or the request times out
    /// - The endpoint answers with a non-success status
    /// - The response envelope lacks `choices[0].message.content`
    pub fn chat(&self, messages: &[Message]) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AIError::CredentialMissing)?;

        debug!("Sending chat request with model: {}", self.model);

        let request = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: None,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .timeout(COMPLETION_TIMEOUT)
            .json(&request)
            .send()
            .map_err(AIError::UpstreamUnreachable)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            return Err(
                AIError::UpstreamProtocol(format!("HTTP {}: {}", status, error_text)).into(),
            );
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                AIError::UpstreamUnreachable(e)
            } else {
                AIError::UpstreamProtocol(format!("Failed to parse chat response: {}", e))
            }
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AIError::UpstreamProtocol("Chat response contained no choices".to_string())
            })?;

        debug!("Received chat response ({} chars)", content.len());
        Ok(content.trim().to_string())
    }

    /// Issues a minimal one-token request and reports whether the upstream is usable.
    ///
    /// Never fails: every outcome, including transport errors, maps to a state.
    /// Without a usable credential no request is sent and the state is `Disabled`.
    pub fn health_probe(&self) -> UpstreamStatus {
        let Some(api_key) = usable_credential(self.api_key.as_deref()) else {
            debug!("Skipping upstream probe: no usable credential");
            return UpstreamStatus::Disabled;
        };

        let messages = [Message::user(HEALTH_PROBE_PROMPT)];
        let request = ChatRequest {
            model: &self.model,
            messages: &messages,
            max_tokens: Some(HEALTH_PROBE_MAX_TOKENS),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .timeout(HEALTH_PROBE_TIMEOUT)
            .json(&request)
            .send();

        match response {
            Ok(response) => {
                let code = response.status();
                let status = UpstreamStatus::from_status_code(code.as_u16());
                match status {
                    UpstreamStatus::Degraded => {
                        let body = response.text().unwrap_or_default();
                        warn!("Upstream probe returned {}: {}", code, body);
                    }
                    UpstreamStatus::Down => {
                        warn!("Upstream probe failed with status {}", code);
                    }
                    _ => debug!("Upstream probe returned {}", code),
                }
                status
            }
            Err(e) if e.is_timeout() => {
                warn!("Upstream probe timed out");
                UpstreamStatus::Down
            }
            Err(e) => {
                warn!("Upstream probe error: {}", e);
                UpstreamStatus::Down
            }
        }
    }
}

impl TextCompletion for ChatCompletionClient {
    fn complete(&self, prompt: &str) -> AppResult<String> {
        self.chat(&[Message::user(prompt)])
    }
}
