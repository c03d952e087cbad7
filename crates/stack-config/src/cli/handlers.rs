//! Command handlers

use anyhow::{bail, Context, Result};
use common::config::ConfigValidation;
use common::error::ConfigurationError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use super::{CliContext, OutputFormat};
use crate::config::{sample_env, DerivedValues, StackConfig};

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    config: &'a StackConfig,
    derived: DerivedValues,
}

pub fn handle_validate(context: &CliContext, out: &mut dyn Write) -> Result<()> {
    let config = context.resolver().resolve(context.env.as_ref())?;

    for warning in config.warnings() {
        writeln!(out, "warning: {warning}")?;
    }

    let failures = config.validation_failures();
    for failure in &failures {
        writeln!(out, "error: {failure}")?;
    }

    if let Some(err) = ConfigurationError::from_failures(failures) {
        return Err(err.into());
    }

    info!("Configuration validation passed");
    writeln!(
        out,
        "Configuration valid for account {} in {} ({})",
        config.account_id(),
        config.region(),
        config.environment()
    )?;
    Ok(())
}

pub fn handle_show(context: &CliContext, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let config = context.resolver().resolve(context.env.as_ref())?;
    config.validate_all()?;

    let warnings = config.warnings();
    for warning in &warnings {
        warn!("{}", warning);
    }

    let output = ShowOutput {
        warnings,
        config: &config,
        derived: config.derived(),
    };

    let rendered = match format {
        OutputFormat::Toml => toml::to_string_pretty(&output)?,
        OutputFormat::Json => serde_json::to_string_pretty(&output)?,
    };

    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

pub fn handle_gen_env(
    context: &CliContext,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let sample = sample_env(&context.defaults);

    match output {
        Some(path) => {
            if path.exists() {
                bail!("Refusing to overwrite existing file: {}", path.display());
            }
            std::fs::write(path, &sample)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated environment file: {}", path.display());
            writeln!(out, "Generated environment file: {}", path.display())?;
        }
        None => write!(out, "{sample}")?,
    }

    Ok(())
}
