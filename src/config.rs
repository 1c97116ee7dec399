//! Configuration
//!
//! Optional JSON file. Every key has a default, so `{}` is a valid config.
//! Command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::DEFAULT_WHY_LIMIT;

/// Upper bound on `why_limit`.
pub const MAX_WHY_LIMIT: usize = 64;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid config value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Unreadable { .. } => "BUMP_CONFIG_UNREADABLE",
            ConfigError::InvalidJson(_) => "BUMP_CONFIG_INVALID_JSON",
            ConfigError::InvalidValue { .. } => "BUMP_CONFIG_INVALID_VALUE",
        }
    }
}

/// How command output is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// War Room report text
    #[default]
    Text,
    /// `{"status":"ok","data":...}` envelope
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Trigger lines in the "why" trace
    #[serde(default = "default_why_limit")]
    pub why_limit: usize,

    /// Structured log lines on stderr
    #[serde(default = "default_logging")]
    pub logging: bool,
}

fn default_why_limit() -> usize {
    DEFAULT_WHY_LIMIT
}

fn default_logging() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            why_limit: default_why_limit(),
            logging: default_logging(),
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Load from an optional path; defaults when absent.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        Self::check_why_limit(self.why_limit)
    }

    /// Apply command-line overrides, then revalidate.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        why_limit: Option<usize>,
    ) -> ConfigResult<Self> {
        if let Some(format) = format {
            self.output_format = format;
        }
        if let Some(limit) = why_limit {
            self.why_limit = limit;
        }
        self.validate()?;
        Ok(self)
    }

    fn check_why_limit(limit: usize) -> ConfigResult<()> {
        if limit == 0 || limit > MAX_WHY_LIMIT {
            return Err(ConfigError::InvalidValue {
                key: "why_limit",
                reason: format!("{} is outside 1..={}", limit, MAX_WHY_LIMIT),
            });
        }
        Ok(())
    }
}
