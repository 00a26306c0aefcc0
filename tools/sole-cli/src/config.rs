//! CLI configuration.

use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use sole_card::release::NEW_RELEASE_WINDOW_DAYS;
use sole_card::{CardOptions, Currency, SalePriceDisplay, Theme};
use sole_observability::{LogFormat, LogLevel};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Card rendering options.
    #[serde(default)]
    pub card: CardConfig,

    /// Theme overrides.
    #[serde(default)]
    pub theme: Theme,

    /// Logging options.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Serialize for display or saving.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// `[card]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Days a release counts as new.
    #[serde(default = "default_window_days")]
    pub new_release_window_days: i64,

    /// "raw" or "formatted".
    #[serde(default)]
    pub sale_price: SalePriceDisplay,

    #[serde(default)]
    pub currency: Currency,
}

fn default_window_days() -> i64 {
    NEW_RELEASE_WINDOW_DAYS
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            new_release_window_days: default_window_days(),
            sale_price: SalePriceDisplay::default(),
            currency: Currency::default(),
        }
    }
}

impl CardConfig {
    /// The recency window, or `None` if the day count is out of range.
    pub fn window(&self) -> Option<Duration> {
        Duration::try_days(self.new_release_window_days)
    }

    pub fn options(&self) -> Result<CardOptions> {
        let new_release_window = self.window().with_context(|| {
            format!(
                "card.new_release_window_days is out of range: {}",
                self.new_release_window_days
            )
        })?;

        Ok(CardOptions {
            new_release_window,
            sale_price: self.sale_price,
            currency: self.currency,
        })
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LogConfig {
    pub fn min_level(&self) -> Result<LogLevel> {
        self.level
            .parse::<LogLevel>()
            .map_err(anyhow::Error::msg)
            .context("Invalid log.level")
    }

    pub fn log_format(&self) -> LogFormat {
        if self.format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Human
        }
    }
}

/// Starter config written by `sole config init`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Sole card configuration

[card]
new_release_window_days = {window}
# "raw" shows the sale price exactly as listed, "formatted" adds the currency
sale_price = "raw"
currency = "USD"

[theme.colors]
white = "hsl(0deg 0% 100%)"
primary = "hsl(340deg 65% 47%)"
secondary = "hsl(240deg 60% 63%)"

[theme.colors.gray]
700 = "hsl(220deg 5% 40%)"
900 = "hsl(220deg 3% 20%)"

[theme.weights]
normal = 500
medium = 600
bold = 800

[log]
level = "warn"
format = "human"
"#,
        window = NEW_RELEASE_WINDOW_DAYS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.card.new_release_window_days, 30);
        assert_eq!(config.card.sale_price, SalePriceDisplay::Raw);
        assert_eq!(config.theme, Theme::default());
        assert_eq!(config.log.min_level().unwrap(), LogLevel::Warn);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        let options = config.card.options().unwrap();
        assert_eq!(options.new_release_window, Duration::days(30));
        assert_eq!(options.currency, Currency::USD);
    }

    #[test]
    fn test_formatted_sale_price() {
        let config: CliConfig = toml::from_str(
            r#"
[card]
sale_price = "formatted"
new_release_window_days = 14
currency = "EUR"
"#,
        )
        .unwrap();
        let options = config.card.options().unwrap();
        assert_eq!(options.sale_price, SalePriceDisplay::Formatted);
        assert_eq!(options.new_release_window, Duration::days(14));
        assert_eq!(options.currency, Currency::EUR);
    }

    #[test]
    fn test_huge_window_is_an_error() {
        let config: CliConfig =
            toml::from_str("[card]\nnew_release_window_days = 9223372036854775807").unwrap();
        let err = config.card.options().unwrap_err();
        assert!(format!("{:#}", err).contains("new_release_window_days is out of range"));
    }

    #[test]
    fn test_invalid_log_level() {
        let config: CliConfig = toml::from_str("[log]\nlevel = \"chatty\"").unwrap();
        assert!(config.log.min_level().is_err());
    }
}
