//! Configuration module

use crate::error::CliError;
use crate::output::ReportFormat;
use anyhow::{Context, Result};
use fsplit_core::config::{DEFAULT_LINES_PER_CHUNK, DEFAULT_SUFFIX_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output naming configuration
    #[serde(default)]
    pub naming: NamingConfig,

    /// Strategy defaults
    #[serde(default)]
    pub split: SplitConfig,

    /// Reporting configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output naming configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Prefix for output names
    pub prefix: Option<String>,

    /// Number of suffix characters
    pub suffix_length: usize,

    /// Use decimal digits instead of letters
    pub numeric_suffixes: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            numeric_suffixes: false,
        }
    }
}

/// Strategy defaults
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// Lines per chunk when no strategy flag is given
    pub default_lines: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            default_lines: DEFAULT_LINES_PER_CHUNK,
        }
    }
}

/// Reporting configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Show a progress spinner on stderr
    pub progress: bool,

    /// Print a per-chunk summary after the split
    pub report: Option<ReportFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            progress: true,
            report: None,
        }
    }
}

impl CliConfig {
    /// Load and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.split.default_lines == 0 {
            return Err(
                CliError::ConfigError("default_lines must be greater than 0".to_string()).into(),
            );
        }
        Ok(())
    }
}
