//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use runbreak_core::{LineBreakClass, Script};

pub mod analyze;
pub mod generate_config;
pub mod validate;

use analyze::{AnalysisKind, AnalyzeArgs};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the script runs of each input
    Scripts(AnalyzeArgs),

    /// Print the line-break opportunities of each input, one record per code unit
    Breaks(AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List known scripts with their numeric ids
    Scripts,

    /// List line-break classes with their codes
    Classes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scripts(args) => args.execute(AnalysisKind::Scripts),
            Commands::Breaks(args) => args.execute(AnalysisKind::Breaks),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(self) -> Vec<String> {
        match self {
            ListCommands::Scripts => Script::ALL
                .iter()
                .map(|script| format!("{:>5}  {:?} ({})", script.id(), script, script.name()))
                .collect(),
            ListCommands::Classes => LineBreakClass::ALL
                .iter()
                .map(|class| format!("{:>2}  {}  {:?}", class.raw(), class.code(), class))
                .collect(),
            ListCommands::Formats => vec![
                "text  One line per script run or code unit".to_string(),
                "json  JSON array with one object per input".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_scripts() {
        let lines = ListCommands::Scripts.lines();
        assert_eq!(lines.len(), Script::ALL.len());
        assert!(lines.iter().any(|line| line.contains("38  Latin (Latin)")));
        assert!(lines.iter().any(|line| line.contains("12  Controls")));
    }

    #[test]
    fn test_list_classes() {
        let lines = ListCommands::Classes.lines();
        assert_eq!(lines.len(), 40);
        assert_eq!(lines[0], " 1  BK  MandatoryBreak");
        assert_eq!(lines[39], "40  RI  RegionalIndicator");
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert!(lines[0].starts_with("text"));
        assert!(lines[1].starts_with("json"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Classes,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Classes"));
    }
}
