//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Text prepared for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Name shown in the output (file path or `<text>`)
    pub name: String,
    /// UTF-16 code units
    pub units: Vec<u16>,
}

impl InputText {
    /// Convert a string to UTF-16
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            units: text.encode_utf16().collect(),
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and convert it to UTF-16
    pub fn read_units(path: &Path) -> Result<InputText> {
        let content = Self::read_text(path)?;
        Ok(InputText::from_text(path.display().to_string(), &content))
    }
}
