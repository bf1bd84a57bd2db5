//! Daemon configuration -- optional TOML file with CLI-flag overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_FILE: &str = "data/race_log.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Socket address the web server binds to.
    pub bind: String,
    /// Path of the flat runner-history log.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. The file must exist and parse;
    /// unset keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Apply CLI overrides on top of file/default values.
    pub fn with_overrides(mut self, bind: Option<String>, data_file: Option<PathBuf>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        self
    }
}
