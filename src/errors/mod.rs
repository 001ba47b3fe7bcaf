//! Error handling utilities for the summarization service.
//!
//! This module provides the central error type `AppError` which represents all
//! hard failures a caller can observe, as well as the convenience type alias
//! `AppResult` for functions that can return these errors.
//!
//! Malformed model output is deliberately absent from this module: text inside a
//! successful upstream reply that does not follow the expected markers degrades to
//! empty fields in the segmenter and never becomes an error.

use thiserror::Error;

/// Represents specific error cases that can occur when calling the upstream
/// chat-completion API.
///
/// # Examples
///
/// ```
/// use journal_genai::errors::AIError;
///
/// let error = AIError::CredentialMissing;
/// assert!(format!("{}", error).contains("GENAI_API_KEY"));
///
/// let error = AIError::UpstreamProtocol("HTTP 502 Bad Gateway: ".to_string());
/// assert!(format!("{}", error).contains("502"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// No bearer credential is configured, so no request was attempted.
    #[error("No API credential configured. Set GENAI_API_KEY to enable the upstream model.")]
    CredentialMissing,

    /// The upstream endpoint could not be reached or did not answer in time.
    #[error("Upstream API unreachable: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// The upstream answered, but with a failure status or an unexpected envelope.
    #[error("Upstream API protocol error: {0}")]
    UpstreamProtocol(String),
}

/// Represents all possible errors that can occur in the service.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` and `reqwest::Error` values.
///
/// # Examples
///
/// ```
/// use journal_genai::errors::AppError;
///
/// let error = AppError::Config("GENAI_API_URL is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: GENAI_API_URL is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors, e.g. while reading snippets from a file or stdin.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller supplied no snippets.
    #[error("snippetContents list cannot be empty.")]
    EmptyBatch,

    /// Failure to serialize a result document.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors related to the upstream chat-completion API.
    ///
    /// This variant uses a dedicated AIError type to provide detailed
    /// information about what went wrong with the upstream call.
    #[error("AI error: {0}")]
    AI(#[from] AIError),
}

impl AppError {
    /// Returns true when the failure was caused by the caller's input rather
    /// than by configuration or the upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::EmptyBatch)
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use journal_genai::errors::{AppResult, AppError};
///
/// fn needs_snippets(snippets: &[String]) -> AppResult<usize> {
///     if snippets.is_empty() {
///         return Err(AppError::EmptyBatch);
///     }
///     Ok(snippets.len())
/// }
///
/// assert!(needs_snippets(&[]).is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_from_ai_error() {
        let app_error: AppError = AIError::CredentialMissing.into();

        assert!(matches!(app_error, AppError::AI(AIError::CredentialMissing)));
        assert!(format!("{}", app_error).starts_with("AI error:"));
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        assert_eq!(
            format!("{}", AppError::EmptyBatch),
            "snippetContents list cannot be empty."
        );

        let protocol = AppError::from(AIError::UpstreamProtocol("missing choices".to_string()));
        assert_eq!(
            format!("{}", protocol),
            "AI error: Upstream API protocol error: missing choices"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::EmptyBatch.is_client_error());
        assert!(!AppError::Config("x".to_string()).is_client_error());
        assert!(!AppError::from(AIError::CredentialMissing).is_client_error());
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::Serialization(_)));
    }
}
