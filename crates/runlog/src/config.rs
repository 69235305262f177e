use std::fs;
use std::path::Path;
use std::sync::Arc;

use runlog_error::ConfigError;
use serde::{Deserialize, Serialize};

use crate::policy::{EmissionPolicy, NoopPolicy, TracingPolicy};

/// Ledger settings, usually read from a `runlog.toml` next to the application.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunlogConfig {
    /// Shown as a banner above the concise and fatal views.
    pub application: Option<String>,
    pub emission: EmissionMode,
    pub log: LogOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionMode {
    #[default]
    Tracing,
    Silent,
}

impl EmissionMode {
    pub fn policy(self) -> Arc<dyn EmissionPolicy> {
        match self {
            EmissionMode::Tracing => Arc::new(TracingPolicy),
            EmissionMode::Silent => Arc::new(NoopPolicy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    pub format: LogFormat,
    pub include_header: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            include_header: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Tsv,
    JsonLines,
}

impl RunlogConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::Parse(format!("TOML parse error: {e}")))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Application name with surrounding whitespace removed; blank names count as absent.
    pub fn application_name(&self) -> Option<&str> {
        self.application
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
