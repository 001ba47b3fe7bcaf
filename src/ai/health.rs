//! Upstream availability states reported by the health probe.

use crate::constants::DISABLED_API_KEY_SENTINEL;
use serde::Serialize;
use std::fmt;

/// Outcome of probing the chat-completions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UpstreamStatus {
    /// The endpoint answered a minimal request with HTTP 200.
    Up,
    /// The endpoint is reachable but rejected the credential or model.
    Degraded,
    /// Timeout, connection failure, or any other status.
    Down,
    /// No usable credential is configured; the endpoint was not contacted.
    Disabled,
}

impl UpstreamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamStatus::Up => "UP",
            UpstreamStatus::Degraded => "DEGRADED",
            UpstreamStatus::Down => "DOWN",
            UpstreamStatus::Disabled => "DISABLED",
        }
    }

    /// Maps an HTTP status code from the probe request to a state.
    pub fn from_status_code(code: u16) -> Self {
        match code {
            200 => UpstreamStatus::Up,
            400 | 401 | 403 => UpstreamStatus::Degraded,
            _ => UpstreamStatus::Down,
        }
    }

    /// True when the service as a whole can be considered healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(self, UpstreamStatus::Up | UpstreamStatus::Disabled)
    }
}

impl fmt::Display for UpstreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the credential if it is usable for a probe.
///
/// Empty keys and the `"dummy"` placeholder disable probing.
pub fn usable_credential(api_key: Option<&str>) -> Option<&str> {
    api_key.filter(|key| !key.is_empty() && *key != DISABLED_API_KEY_SENTINEL)
}
