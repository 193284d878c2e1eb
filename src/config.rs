//! Settings for the `fare` command line front end
//!
//! Only presentation and logging are configurable; the fare formulas are
//! fixed in [`crate::pricing::tariff`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable prefix, e.g. `FARE__DISPLAY__FORMAT=json`
pub const ENV_PREFIX: &str = "FARE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    pub currency_symbol: String,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            currency_symbol: "₹".to_string(),
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// How quotes are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Plain,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Load configuration from `path` (optional) and `FARE__*` environment variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    load_config_with_env_prefix(path, ENV_PREFIX)
}

/// Same as [`load_config`] with a custom environment prefix
///
/// Variables are named `<PREFIX>__<SECTION>__<KEY>` and override the file.
pub fn load_config_with_env_prefix(path: &Path, env_prefix: &str) -> anyhow::Result<Config> {
    let settings = config::Config::builder()
        .add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.display.currency_symbol.trim().is_empty() {
        anyhow::bail!("Currency symbol cannot be empty");
    }

    if let Err(e) = EnvFilter::try_new(&cfg.logging.level) {
        anyhow::bail!("Invalid log level '{}': {}", cfg.logging.level, e);
    }

    Ok(())
}
