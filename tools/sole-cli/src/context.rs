//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use sole_observability::{LogFormat, LogLevel, RequestId, StructuredLogger};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["sole.toml", ".sole.toml", "sole.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub logger: StructuredLogger,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, command: &str) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let min_level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.log.min_level()?
        };
        let format = if output.is_json() {
            LogFormat::Json
        } else {
            config.log.log_format()
        };
        let logger = StructuredLogger::new(RequestId::generate())
            .with_component("sole-cli")
            .with_command(command)
            .with_min_level(min_level)
            .with_format(format);

        if let Some(path) = &config_path {
            logger
                .debug_builder("Loaded config")
                .field("path", path.display().to_string())
                .emit();
        }

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
