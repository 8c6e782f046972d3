//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::types::{Currency, PreviousNetIncome};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Accounting service configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Accounting service (trial balance source) configuration.
///
/// Only commands that talk to the service need `base_url`; report and log
/// settings load without it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the accounting service, e.g. `https://coop.example/api`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// How the previous period's net income is derived.
    #[serde(default)]
    pub previous_net_income: PreviousNetIncome,
    /// Currency used when rendering amounts.
    #[serde(default)]
    pub currency: Currency,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit log events as JSON lines.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "coopbooks=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `COOPBOOKS__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Same as [`Self::load`], with an extra required file layered on top
    /// of the default files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or `path` is missing.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("COOPBOOKS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
