//! CLI interface for stack-config

use anyhow::Result;
use std::io::Write;

pub mod args;
pub mod handlers;

pub use args::{Commands, OutputFormat, StackConfigArgs};

use crate::config::{ConfigDefaults, ConfigResolver, DotenvEnv, EnvSource, ProcessEnv};

pub trait CliCommand {
    fn execute(&self, context: &CliContext, out: &mut dyn Write) -> Result<()>;
}

/// Inputs shared by every command
pub struct CliContext {
    pub defaults: ConfigDefaults,
    pub env: Box<dyn EnvSource>,
}

impl CliContext {
    pub fn new(defaults: ConfigDefaults, env: impl EnvSource + 'static) -> Self {
        Self {
            defaults,
            env: Box::new(env),
        }
    }

    /// Load defaults and the environment as the flags describe
    pub fn from_args(args: &StackConfigArgs) -> Result<Self> {
        let defaults = ConfigDefaults::load(args.defaults.as_deref())?;

        let context = match args.env_file() {
            Some(path) => Self::new(defaults, DotenvEnv::load(path, ProcessEnv)?),
            None => Self::new(defaults, ProcessEnv),
        };

        Ok(context)
    }

    pub fn resolver(&self) -> ConfigResolver {
        ConfigResolver::new(self.defaults.clone())
    }
}

pub fn execute_command(
    command: &Commands,
    context: &CliContext,
    out: &mut dyn Write,
) -> Result<()> {
    command.execute(context, out)
}

impl CliCommand for Commands {
    fn execute(&self, context: &CliContext, out: &mut dyn Write) -> Result<()> {
        match self {
            Commands::Validate => handlers::handle_validate(context, out),
            Commands::Show { format } => handlers::handle_show(context, *format, out),
            Commands::GenEnv { output } => {
                handlers::handle_gen_env(context, output.as_deref(), out)
            }
        }
    }
}
