//! Configuration module

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::commands::analyze::OutputFormat;
use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest window in UTF-16 code units
    pub max_window: usize,

    /// Maximum chunk size fed to the analyzer (0 = whole input)
    pub chunk_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_window: runbreak_engine::DEFAULT_MAX_WINDOW,
            chunk_size: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        if config.analysis.max_window == 0 {
            return Err(CliError::ConfigError("max_window must be greater than 0".into()).into());
        }
        if OutputFormat::from_str(&config.output.default_format, true).is_err() {
            return Err(CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into());
        }
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.analysis.chunk_size, 0);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::parse("[analysis]\nchunk_size = 64\n").unwrap();
        assert_eq!(config.analysis.chunk_size, 64);
        assert_eq!(
            config.analysis.max_window,
            runbreak_engine::DEFAULT_MAX_WINDOW
        );
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::parse(
            r#"
[analysis]
max_window = 1024
chunk_size = 16

[output]
default_format = "json"
pretty_json = false
"#,
        )
        .unwrap();
        assert_eq!(config.analysis.max_window, 1024);
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = CliConfig::parse("[analysis]\nmax_window = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_window"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = CliConfig::parse("[output]\ndefault_format = \"yaml\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown output format: yaml"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = CliConfig::parse("[analysis\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_to_toml_round_trips_defaults() {
        let rendered = CliConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[analysis]"));
        assert_eq!(CliConfig::parse(&rendered).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("runbreak.toml");
        fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.output.default_format, "json");

        let missing = CliConfig::load(&temp_dir.path().join("missing.toml"));
        assert!(missing
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
