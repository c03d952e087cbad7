//! # stack-config
//!
//! Deployment configuration for the CloudTrail MCP server / Strands Agents
//! demo stack. Parameters come from the environment (optionally seeded from a
//! `.env` file), optional settings fall back to project defaults, and the
//! result is format-checked before any stack is defined.
//!
//! ```no_run
//! use common::config::ConfigValidation;
//! use stack_config::config::{ConfigResolver, ProcessEnv};
//!
//! let config = ConfigResolver::default().resolve(&ProcessEnv)?;
//! config.validate()?;
//! println!("deploying to {}", config.region());
//! # Ok::<(), common::error::ConfigurationError>(())
//! ```

pub mod cli;
pub mod config;

pub use config::{ConfigDefaults, ConfigResolver, StackConfig};
