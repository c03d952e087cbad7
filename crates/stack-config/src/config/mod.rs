//! Deployment configuration for the demo stack
//!
//! - `env`: environment sources and the variable names consumed
//! - `resolver`: environment mapping to `StackConfig`
//! - `validation`: format checks on a resolved record
//! - `derived`: ARNs, URIs and tags built from a record

pub mod constants;
pub mod derived;
pub mod env;
pub mod resolver;
pub mod types;
pub mod validation;

pub use derived::*;
pub use env::*;
pub use resolver::*;
pub use types::*;
