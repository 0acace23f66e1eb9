//! Analysis commands: `scripts` and `breaks`

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use runbreak_engine::{AnalyzerConfig, CollectingSink, SliceSource, TextAnalyzer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputText};
use crate::output::{AnalysisReport, JsonFormatter, OutputFormatter, ReportBody, TextFormatter};
use crate::progress::ProgressReporter;

/// Name used for `--text` input
pub const TEXT_INPUT_NAME: &str = "<text>";

/// Which analysis a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Script-run segmentation
    Scripts,
    /// Line-break opportunities
    Breaks,
}

/// Arguments shared by the analysis commands
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Analyze this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Feed the analyzer at most this many code units per source request
    #[arg(long, value_name = "UNITS")]
    pub chunk_size: Option<usize>,

    /// Largest window in code units a single analysis may cover
    #[arg(long, value_name = "UNITS")]
    pub max_window: Option<usize>,

    /// Analyze input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel analysis (default: all cores)
    #[arg(long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per script run or code unit
    Text,
    /// JSON array with one object per input
    Json,
}

/// Effective settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Maximum chunk size, `None` for whole-input chunks
    pub chunk_size: Option<usize>,
    /// Analyzer window limit
    pub max_window: usize,
}

impl AnalyzeArgs {
    /// Execute the analysis command
    pub fn execute(&self, kind: AnalysisKind) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting {kind:?} analysis");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        log::debug!("Settings: {settings:?}");

        let analyzer_config = AnalyzerConfig::builder()
            .max_window(settings.max_window)
            .build()
            .context("Invalid analyzer configuration")?;
        let analyzer = TextAnalyzer::with_config(analyzer_config)?;

        let inputs = self.collect_inputs()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let chunk_size = settings.chunk_size;
        let progress_ref = &progress;
        let analyze = |input: &InputText| -> Result<AnalysisReport> {
            let report = analyze_input(&analyzer, input, kind, chunk_size)?;
            progress_ref.file_completed(&input.name);
            Ok(report)
        };

        let reports: Vec<AnalysisReport> = if self.parallel {
            self.thread_pool()?
                .install(|| inputs.par_iter().map(analyze).collect::<Result<_>>())?
        } else {
            inputs.iter().map(analyze).collect::<Result<_>>()?
        };
        progress.finish();

        let mut formatter = self.formatter(&settings)?;
        for report in &reports {
            formatter.format_report(report)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} input(s)", reports.len());
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true)
                .map_err(|_| {
                    CliError::ConfigError(format!(
                        "unknown output format: {}",
                        config.output.default_format
                    ))
                })?,
        };

        let chunk_size = match self.chunk_size {
            Some(0) => {
                return Err(
                    CliError::ConfigError("chunk size must be greater than 0".into()).into(),
                )
            }
            Some(size) => Some(size),
            None => (config.analysis.chunk_size > 0).then_some(config.analysis.chunk_size),
        };

        Ok(Settings {
            format,
            pretty_json: config.output.pretty_json,
            chunk_size,
            max_window: self.max_window.unwrap_or(config.analysis.max_window),
        })
    }

    fn collect_inputs(&self) -> Result<Vec<InputText>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputText::from_text(TEXT_INPUT_NAME, text)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to analyze", files.len());
        files.iter().map(|path| FileReader::read_units(path)).collect()
    }

    fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        log::info!("Analyzing in parallel with {threads} threads");
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")
    }

    fn formatter(&self, settings: &Settings) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Run one analysis over an input, feeding the analyzer through a [`SliceSource`]
pub fn analyze_input(
    analyzer: &TextAnalyzer,
    input: &InputText,
    kind: AnalysisKind,
    chunk_size: Option<usize>,
) -> Result<AnalysisReport> {
    let source = match chunk_size {
        Some(size) => SliceSource::chunked(&input.units, size),
        None => SliceSource::from(&input.units),
    };
    let length = source.len();
    let mut sink = CollectingSink::new();

    let outcome = match kind {
        AnalysisKind::Scripts => analyzer.analyze_script(&source, 0, length, &mut sink),
        AnalysisKind::Breaks => analyzer.analyze_line_breakpoints(&source, 0, length, &mut sink),
    };
    outcome.map_err(|e| CliError::AnalysisError {
        source: input.name.clone(),
        message: format!("{:#}", anyhow::Error::from(e)),
    })?;

    let body = match kind {
        AnalysisKind::Scripts => ReportBody::Scripts(sink.runs),
        AnalysisKind::Breaks => ReportBody::Breaks(sink.breakpoints),
    };
    Ok(AnalysisReport {
        source: input.name.clone(),
        units: input.units.clone(),
        body,
    })
}
