//! runbreak command-line entry point

use anyhow::Result;
use clap::Parser;
use runbreak_cli::commands::Commands;

/// Script-run and line-break analysis of UTF-16 text
#[derive(Debug, Parser)]
#[command(name = "runbreak", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
