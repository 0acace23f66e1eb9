//! Configuration types for the analyzer

use crate::error::{EngineError, Result};

/// Default maximum window: 16 Mi code units
pub const DEFAULT_MAX_WINDOW: usize = 16 * 1024 * 1024;

/// Analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Largest window, in UTF-16 code units, a single call may analyze
    pub max_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_window: DEFAULT_MAX_WINDOW,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_window == 0 {
            return Err(EngineError::InvalidConfig(
                "max_window must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`AnalyzerConfig`]
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfigBuilder {
    max_window: Option<usize>,
}

impl AnalyzerConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum window length in code units
    pub fn max_window(mut self, units: usize) -> Self {
        self.max_window = Some(units);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        let config = AnalyzerConfig {
            max_window: self.max_window.unwrap_or(DEFAULT_MAX_WINDOW),
        };
        config.validate()?;
        Ok(config)
    }
}
