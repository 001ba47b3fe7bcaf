//! Service health and diagnostics reports.

use crate::ai::{ChatCompletionClient, UpstreamStatus};
use crate::config::Config;
use crate::constants::{DEFAULT_CHAT_MODEL, SERVICE_NAME, SERVICE_VERSION};
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Liveness report. Always `UP` when the process can answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub port: u16,
    pub timestamp: String,
    pub version: String,
}

/// Health report including the upstream probe result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedHealthReport {
    pub status: String,
    pub service: String,
    pub port: u16,
    pub timestamp: String,
    pub version: String,
    pub dependencies: BTreeMap<String, String>,
    pub configuration: BTreeMap<String, String>,
}

/// Configuration snapshot for troubleshooting. The credential is reduced to a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugInfo {
    pub genai_api_url: String,
    pub has_api_key: bool,
    pub api_key_prefix: String,
    pub model_name: String,
    pub service_version: String,
}

/// Plain status answer.
pub const STATUS_OK: &str = "OK";

fn timestamp() -> String {
    Local::now().to_rfc3339()
}

pub fn basic_health(config: &Config) -> HealthReport {
    HealthReport {
        status: UpstreamStatus::Up.to_string(),
        service: SERVICE_NAME.to_string(),
        port: config.port,
        timestamp: timestamp(),
        version: SERVICE_VERSION.to_string(),
    }
}

/// Probes the upstream and builds the detailed report.
///
/// The overall status is `UP` while the upstream is `UP` or `DISABLED`, and
/// `DEGRADED` otherwise. This function never fails.
pub fn detailed_health(config: &Config, client: &ChatCompletionClient) -> DetailedHealthReport {
    let upstream = client.health_probe();
    info!("Upstream probe status: {}", upstream);
    detailed_health_for(config, upstream)
}

fn detailed_health_for(config: &Config, upstream: UpstreamStatus) -> DetailedHealthReport {
    let status = if upstream.is_healthy() {
        UpstreamStatus::Up
    } else {
        UpstreamStatus::Degraded
    };

    let mut dependencies = BTreeMap::new();
    dependencies.insert("genai-api".to_string(), upstream.to_string());
    dependencies.insert("model".to_string(), DEFAULT_CHAT_MODEL.to_string());
    dependencies.insert("http-client".to_string(), "reqwest".to_string());

    let key_state = if config.has_api_key() {
        "enabled"
    } else {
        "disabled"
    };
    let mut configuration = BTreeMap::new();
    configuration.insert("genai-api-key".to_string(), key_state.to_string());
    configuration.insert("log-format".to_string(), config.log_format.clone());

    DetailedHealthReport {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        port: config.port,
        timestamp: timestamp(),
        version: SERVICE_VERSION.to_string(),
        dependencies,
        configuration,
    }
}

pub fn debug_info(config: &Config) -> DebugInfo {
    DebugInfo {
        genai_api_url: config.api_url.clone(),
        has_api_key: config.has_api_key(),
        api_key_prefix: config.api_key_prefix(),
        model_name: DEFAULT_CHAT_MODEL.to_string(),
        service_version: SERVICE_VERSION.to_string(),
    }
}
