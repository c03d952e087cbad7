//! # Configuration Abstractions
//!
//! Layered configuration loading and the validation trait shared across
//! the workspace.

pub mod loader;
pub mod traits;

// Re-export commonly used types
pub use loader::*;
pub use traits::*;
