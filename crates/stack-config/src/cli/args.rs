//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve and validate deployment configuration for the CloudTrail MCP / Strands Agents demo stack
#[derive(Parser, Debug)]
#[command(name = "stack-config", author, version, about, long_about = None)]
pub struct StackConfigArgs {
    /// Environment file layered underneath the process environment
    #[arg(long, default_value = ".env", global = true)]
    pub env_file: PathBuf,

    /// Ignore the environment file and read only the process environment
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// TOML file overriding the compiled defaults for optional settings
    #[arg(long, global = true)]
    pub defaults: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl StackConfigArgs {
    /// Parse arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Environment file to load, if any
    pub fn env_file(&self) -> Option<&PathBuf> {
        (!self.no_env_file).then_some(&self.env_file)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve configuration and report every validation failure
    Validate,
    /// Print the resolved configuration and derived values
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },
    /// Write a sample .env file listing every supported variable
    GenEnv {
        /// Output path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}
