//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("Configuration written to {}", path.display());
                println!("Use it with: runbreak breaks -c {} -i <FILE>", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!("# runbreak configuration\n\n{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let args = GenerateConfigArgs { output: None };
        let template = args.generate_template().unwrap();
        assert!(template.starts_with("# runbreak configuration"));
        assert_eq!(CliConfig::parse(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("runbreak.toml");
        let args = GenerateConfigArgs {
            output: Some(path.clone()),
        };
        args.execute().unwrap();
        assert!(CliConfig::load(&path).is_ok());
    }
}
