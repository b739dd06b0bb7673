//! Core error types for the govuk-frontend crates.
//!
//! [`GovUkError`] covers the fatal error categories: bad input at the HTTP
//! layer, misconfiguration, and serialization failures. User-input
//! validation problems are described by [`ValidationError`] and are normally
//! recorded in model state rather than returned as an `Err`.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A validation error message with a machine-readable code.
///
/// # Examples
///
/// ```
/// use govuk_frontend_core::error::ValidationError;
///
/// let err = ValidationError::new("Date of birth must be a real date", "date_input")
///     .with_param("parse_errors", "InvalidDay");
/// assert_eq!(err.to_string(), "Date of birth must be a real date");
/// assert_eq!(err.params["parse_errors"], "InvalidDay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The human-readable error message.
    pub message: String,
    /// A short code identifying the type of validation failure (e.g. "date_input").
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for the govuk-frontend crates.
///
/// Each variant maps to an HTTP status code via [`GovUkError::status_code`], so
/// a host framework can turn a failed bind into a response directly.
#[derive(Error, Debug)]
pub enum GovUkError {
    // ── Request errors ───────────────────────────────────────────────

    /// HTTP 400 Bad Request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The library is wired up incorrectly, e.g. no converter is registered
    /// for a bound model type.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GovUkError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `BadRequest` -> 400
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::ConfigurationError(_)
            | Self::ImproperlyConfigured(_)
            | Self::SerializationError(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, GovUkError>`.
pub type GovUkResult<T> = Result<T, GovUkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Date of birth must include a day", "date_input");
        assert_eq!(err.to_string(), "Date of birth must include a day");
        assert_eq!(err.code, "date_input");
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("x", "date_input").with_param("parse_errors", "MissingDay");
        assert_eq!(err.params.get("parse_errors").unwrap(), "MissingDay");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GovUkError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(GovUkError::ConfigurationError("x".into()).status_code(), 500);
        assert_eq!(GovUkError::ImproperlyConfigured("x".into()).status_code(), 500);
        assert_eq!(GovUkError::SerializationError("x".into()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = GovUkError::ImproperlyConfigured("no converter".into());
        assert_eq!(err.to_string(), "Improperly configured: no converter");
        let err = GovUkError::ConfigurationError("bad TOML".into());
        assert_eq!(err.to_string(), "Configuration error: bad TOML");
    }
}
