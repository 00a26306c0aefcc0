//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }
    println!();
    println!("{}", ctx.config.to_toml()?);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = check(&ctx.config);
    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    bail!("Configuration has {} error(s)", errors.len())
}

fn check(config: &crate::config::CliConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.card.new_release_window_days < 0 {
        errors.push("card.new_release_window_days must not be negative".to_string());
    } else if config.card.window().is_none() {
        errors.push(format!(
            "card.new_release_window_days is too large: {}",
            config.card.new_release_window_days
        ));
    }
    if let Err(e) = config.log.min_level() {
        errors.push(format!("{:#}", e));
    }

    let colors = &config.theme.colors;
    for (key, value) in [
        ("theme.colors.white", &colors.white),
        ("theme.colors.primary", &colors.primary),
        ("theme.colors.secondary", &colors.secondary),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("{} must not be empty", key));
        }
    }
    if colors.primary == colors.secondary {
        errors.push("theme.colors.primary and theme.colors.secondary must differ".to_string());
    }

    errors
}
