//! Configuration loaded from `promptdeck.toml`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "promptdeck.toml";

/// Default catalog location.
pub const DEFAULT_SOURCE: &str = "prompts.json";

/// Upper bound for `catalog.timeout_secs`.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Copy button behavior.
    #[serde(default)]
    pub copy: CopyConfig,
    /// Output rendering.
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.catalog.validate()?;
        self.copy.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// File path, `file://` URL or `http(s)://` URL.
    #[serde(default = "default_source")]
    pub source: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { source: default_source(), timeout_secs: default_timeout() }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source.trim().is_empty() {
            return Err(AppError::InvalidConfig("catalog.source must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "catalog.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AppError::InvalidConfig(format!(
                "catalog.timeout_secs must be at most {}",
                MAX_TIMEOUT_SECS
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyConfig {
    /// How long the confirmation or failure label stays before reverting.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self { reset_delay_ms: default_reset_delay_ms() }
    }
}

impl CopyConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.reset_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "copy.reset_delay_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub body: BodyMode,
}

/// How record bodies are placed into HTML output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    /// Escape markup like any other text.
    #[default]
    Escape,
    /// Insert the body as raw markup. Only for author-controlled catalogs.
    Trusted,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_reset_delay_ms() -> u64 {
    1200
}
