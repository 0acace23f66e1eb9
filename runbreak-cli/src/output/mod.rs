//! Output formatting module

use anyhow::Result;
use runbreak_core::{LineBreakpoint, ScriptRun};

/// Analysis results for one input
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Input name (file path or `<text>`)
    pub source: String,
    /// Analyzed code units
    pub units: Vec<u16>,
    /// Results of the requested analysis
    pub body: ReportBody,
}

/// Results of one analysis kind
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    /// Script runs in offset order
    Scripts(Vec<ScriptRun>),
    /// One breakpoint per code unit
    Breaks(Vec<LineBreakpoint>),
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the results for one input
    fn format_report(&mut self, report: &AnalysisReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
