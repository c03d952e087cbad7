//! # Configuration Traits
//!
//! Core traits for validating loaded configuration.

use crate::error::StackError;

/// Common configuration validation trait
pub trait ConfigValidation {
    type Error: StackError;

    /// Validate the configuration, stopping at the first failure
    fn validate(&self) -> Result<(), Self::Error>;

    /// Get configuration warnings (non-fatal issues)
    fn warnings(&self) -> Vec<String> {
        Vec::new()
    }
}
