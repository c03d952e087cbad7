//! # Common
//!
//! Shared building blocks for the Strands demo stack tooling.
//!
//! ## Key Features
//! - `ConfigurationError` with the `StackError` marker trait
//! - Figment-based layered loading of TOML configuration files
//! - `ConfigValidation` trait for validated configuration types
//! - Tracing subscriber setup for binaries

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::init_logging;

/// Version of the common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(VERSION.chars().any(|c| c.is_ascii_digit()));
    }
}
