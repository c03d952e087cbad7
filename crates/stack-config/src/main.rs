//! # stack-config
//!
//! Checks deployment configuration before the demo stack is synthesized.

use anyhow::Result;

use common::init_logging;
use stack_config::cli::{execute_command, CliContext, StackConfigArgs};

fn main() -> Result<()> {
    let args = StackConfigArgs::parse_args();

    init_logging(&args.log_level)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let context = CliContext::from_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(&args.command, &context, &mut out)
}
