//! JSON config file loading and validation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Whole config file.
///
/// Producer-specific sections (keyed by producer id) are kept opaque and
/// handed to the producer registry untouched, so each producer can define its
/// own settings.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Scrape/filter settings
    pub bogo: BogoConfig,
    /// Process-wide logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Producer-specific sections, keyed by producer id
    #[serde(flatten)]
    sections: HashMap<String, Value>,
}

/// The `bogo` section: what to scrape, how to filter, where to publish.
#[derive(Debug, Deserialize)]
pub struct BogoConfig {
    /// Comma-separated keywords to filter item names against (required)
    #[serde(default)]
    pub keywords: String,
    /// Sales page URL (required)
    #[serde(default)]
    pub url: String,
    /// Text prepended to each published line
    #[serde(default)]
    pub prefix_text: String,
    /// Text appended to each published line
    #[serde(default)]
    pub postfix_text: String,
    /// Fallback line published when nothing survives filtering
    #[serde(default = "default_no_bogo_text")]
    pub no_bogo_text: String,
    /// Comma-separated producer ids to publish through
    #[serde(default)]
    pub producers: String,
}

fn default_no_bogo_text() -> String {
    "No BOGOs".to_string()
}

/// The `logging` section.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level directive (trace/debug/info/warn/error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Read and validate a config file. A missing or empty `keywords` or
    /// `url` aborts the run before any network access.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Config::from_json(&contents)
    }

    /// Parse and validate config from a JSON string.
    pub fn from_json(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bogo.keywords.trim().is_empty() {
            return Err(ConfigError::MissingKey("keywords"));
        }
        if self.bogo.url.trim().is_empty() {
            return Err(ConfigError::MissingKey("url"));
        }
        Ok(())
    }

    /// The comma-separated keyword list, split and trimmed.
    pub fn keywords(&self) -> Vec<String> {
        split_csv(&self.bogo.keywords)
    }

    /// The comma-separated producer id list, split and trimmed.
    pub fn producers(&self) -> Vec<String> {
        split_csv(&self.bogo.producers)
    }

    /// Producer-specific config section, if one was provided.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
