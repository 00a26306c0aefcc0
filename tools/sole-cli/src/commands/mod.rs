//! CLI command implementations.

pub mod config;
pub mod inspect;
pub mod render;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use sole_card::release::{parse_release_date, Clock, FixedClock, SystemClock};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog file (.toml or .json).
    pub catalog: String,

    /// Write HTML here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Wrap the cards in a complete HTML page.
    #[arg(long)]
    pub page: bool,

    /// Evaluate release dates as of this instant (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Catalog file (.toml or .json).
    pub catalog: String,

    /// Evaluate release dates as of this instant (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a starter sole.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration.
    Validate,
}

/// The clock to render with: pinned by `--now`, otherwise wall time.
pub fn clock_from_arg(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(s) => parse_release_date(s)
            .map(|dt| Box::new(FixedClock(dt)) as Box<dyn Clock>)
            .ok_or_else(|| anyhow!("Invalid --now value: {}", s)),
        None => Ok(Box::new(SystemClock)),
    }
}
