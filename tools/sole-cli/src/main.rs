//! Sole CLI - render and inspect shoe listing cards.
//!
//! Commands:
//! - `sole render` - Render a catalog to HTML
//! - `sole inspect` - Show how each listing classifies
//! - `sole config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, InspectArgs, RenderArgs};

/// Sole CLI - Render shoe listing cards
#[derive(Parser)]
#[command(name = "sole")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every card in a catalog to HTML
    Render(RenderArgs),

    /// Show the variant, badge and prices of each listing
    Inspect(InspectArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Render(_) => "render",
            Commands::Inspect(_) => "inspect",
            Commands::Config(_) => "config",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone(), cli.command.name()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.logger
            .error_builder("Command failed")
            .field("error", format!("{:#}", e))
            .emit();
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
