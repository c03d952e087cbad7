//! Error handling for the stack tooling
//!
//! This module defines the error types shared by every crate in the workspace:
//! - `StackError` marker trait for consistent error handling
//! - `ConfigurationError` for resolution, validation and loading failures
//!
//! # Design Principles
//! - All errors implement Send + Sync
//! - Use thiserror for library errors, anyhow for application errors
//! - Messages name the offending key or field and what was expected

use thiserror::Error;

/// Base trait for all stack-tooling errors
///
/// When creating new error types:
/// 1. Derive from thiserror::Error
/// 2. Implement StackError
/// 3. Provide clear, user-facing error messages
pub trait StackError: std::error::Error + Send + Sync + 'static {}

/// Configuration-related errors
///
/// These errors occur while resolving deployment parameters from the
/// environment, validating them, or loading tool configuration files.
/// Every variant is fatal: nothing downstream runs on a bad configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A required environment key was absent (or empty)
    #[error("Required environment variable {key} is not set. Please check your .env file.")]
    MissingConfiguration { key: String },

    /// A present value failed its format constraint
    #[error("Invalid {field} format: {value}. Expected format: {expected}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: String,
    },

    /// Several format checks failed at once
    #[error("Configuration validation failed: {}", join_errors(.errors))]
    ValidationFailed { errors: Vec<ConfigurationError> },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Environment file exists but could not be read or parsed
    #[error("Cannot read environment file {path}: {details}")]
    EnvFile { path: String, details: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },
}

impl StackError for ConfigurationError {}

fn join_errors(errors: &[ConfigurationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigurationError {
    /// Create a missing configuration error for an environment key
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Create an invalid format error
    pub fn invalid_format(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Field name for `InvalidFormat`, key name for `MissingConfiguration`
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::MissingConfiguration { key } => Some(key),
            Self::InvalidFormat { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Collapse a list of failures into a single error
    ///
    /// A single failure is returned as-is so callers still see the
    /// concrete variant.
    pub fn from_failures(mut errors: Vec<ConfigurationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::ValidationFailed { errors }),
        }
    }
}
