//! Configuration management for the summarization service.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. The loaded `Config` is passed explicitly to the
//! completion client at construction time; nothing here is process-global.
//!
//! # Environment Variables
//!
//! - `GENAI_API_URL`: Chat-completions endpoint (defaults to the TUM GPU endpoint)
//! - `GENAI_API_KEY`: Bearer credential (unset or empty means no credential)
//! - `PORT`: Port reported in health documents (defaults to 8082)
//! - `LOG_FORMAT`: `json` or `text` (defaults to `json`)
//! - `LOG_LEVEL`: Default tracing filter (defaults to `info`)

use crate::ai::health::usable_credential;
use crate::constants::{
    API_KEY_PREFIX_LEN, DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_PORT, ENV_VAR_API_KEY,
    ENV_VAR_API_URL, ENV_VAR_LOG_FORMAT, ENV_VAR_LOG_LEVEL, ENV_VAR_PORT, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// Configuration for the summarization service.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use journal_genai::Config;
///
/// let config = Config {
///     api_url: "http://localhost:8080/api/chat/completions".to_string(),
///     api_key: Some("secret".to_string()),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Upstream chat-completions endpoint.
    pub api_url: String,

    /// Bearer credential forwarded to the upstream. `None` when unset or empty.
    pub api_key: Option<String>,

    /// Port reported in health documents.
    pub port: u16,

    /// Log output format, `json` or `text`.
    pub log_format: String,

    /// Default log level used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("port", &self.port)
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and no credential.
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            port: DEFAULT_PORT,
            log_format: LOG_FORMAT_JSON.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is set but is not a valid port number.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use journal_genai::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Upstream: {}", config.api_url),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let api_url = env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_key = env::var(ENV_VAR_API_KEY)
            .ok()
            .filter(|key| !key.is_empty());

        let port = match env::var(ENV_VAR_PORT) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!(
                    "{} must be a port number, got '{}': {}",
                    ENV_VAR_PORT, raw, e
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let log_format =
            env::var(ENV_VAR_LOG_FORMAT).unwrap_or_else(|_| LOG_FORMAT_JSON.to_string());
        let log_level =
            env::var(ENV_VAR_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            api_url,
            api_key,
            port,
            log_format,
            log_level,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// A missing credential is not a validation failure: the service still answers
    /// health requests, and completion calls report `CredentialMissing` themselves.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when:
    /// - The endpoint URL is empty or not an http(s) URL
    /// - The log format is neither `json` nor `text`
    /// - The port is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use journal_genai::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.api_url = "ftp://example.com".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(AppError::Config(format!("{} is empty", ENV_VAR_API_URL)));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_VAR_API_URL, url
            )));
        }

        if self.log_format != LOG_FORMAT_JSON && self.log_format != LOG_FORMAT_TEXT {
            return Err(AppError::Config(format!(
                "{} must be '{}' or '{}', got '{}'",
                ENV_VAR_LOG_FORMAT, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, self.log_format
            )));
        }

        if self.port == 0 {
            return Err(AppError::Config(format!("{} must not be 0", ENV_VAR_PORT)));
        }

        Ok(())
    }

    /// Returns true when a real credential is configured.
    ///
    /// The sentinel `"dummy"` counts as no credential.
    pub fn has_api_key(&self) -> bool {
        usable_credential(self.api_key.as_deref()).is_some()
    }

    /// Returns the first characters of the credential for diagnostics, or `"None"`.
    pub fn api_key_prefix(&self) -> String {
        match self.api_key.as_deref() {
            Some(key) => {
                let prefix: String = key.chars().take(API_KEY_PREFIX_LEN).collect();
                format!("{}...", prefix)
            }
            None => "None".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.port, 8082);
        assert_eq!(config.log_format, "json");
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            api_url: "".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config {
            api_url: "localhost:8080".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config {
            log_format: "yaml".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: Some("sk-very-secret-value".to_string()),
            ..Config::default()
        };
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("sk-very-secret-value"));
        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
    }

    #[test]
    fn test_has_api_key() {
        let mut config = Config::default();
        assert!(!config.has_api_key());

        config.api_key = Some("dummy".to_string());
        assert!(!config.has_api_key());

        config.api_key = Some("".to_string());
        assert!(!config.has_api_key());

        config.api_key = Some("sk-123".to_string());
        assert!(config.has_api_key());
    }

    #[test]
    fn test_api_key_prefix() {
        let mut config = Config::default();
        assert_eq!(config.api_key_prefix(), "None");

        config.api_key = Some("sk-1234567890abcdef".to_string());
        assert_eq!(config.api_key_prefix(), "sk-1234567...");

        config.api_key = Some("short".to_string());
        assert_eq!(config.api_key_prefix(), "short...");
    }
}
