//! Analysis entry points over a text source
//!
//! [`TextAnalyzer`] is a configuration handle with no algorithm state; it can be
//! copied freely and shared between threads.

use log::{debug, trace};
use runbreak_core::{resolver, segmenter};

use crate::assembler::WindowAssembler;
use crate::config::AnalyzerConfig;
use crate::error::{EngineError, Result};
use crate::sink::AnalysisSink;
use crate::source::TextSource;

/// Script and line-break analyzer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Report the script runs of `[position, position + length)` to `sink`.
    ///
    /// Run offsets are absolute positions in the source. The first sink error stops
    /// the analysis.
    pub fn analyze_script<S, K>(
        &self,
        source: &S,
        position: usize,
        length: usize,
        sink: &mut K,
    ) -> Result<()>
    where
        S: TextSource + ?Sized,
        K: AnalysisSink + ?Sized,
    {
        if length == 0 {
            return Ok(());
        }

        let text = WindowAssembler::new(&self.config).assemble(source, position, length)?;
        debug!(
            "script analysis: {} units at {position} (requested {length})",
            text.len()
        );

        let mut reported = 0usize;
        segmenter::analyze_script(&text, |run| {
            reported += 1;
            sink.report_script_run(position + run.start, run.length, run.analysis)
        })
        .map_err(EngineError::Sink)?;

        trace!("reported {reported} script runs");
        Ok(())
    }

    /// Report one breakpoint per code unit of `[position, position + length)`.
    ///
    /// The sink receives the whole window in a single call, or no call at all when
    /// the source has no text at `position`.
    pub fn analyze_line_breakpoints<S, K>(
        &self,
        source: &S,
        position: usize,
        length: usize,
        sink: &mut K,
    ) -> Result<()>
    where
        S: TextSource + ?Sized,
        K: AnalysisSink + ?Sized,
    {
        if length == 0 {
            return Ok(());
        }

        let text = WindowAssembler::new(&self.config).assemble(source, position, length)?;
        debug!(
            "line-break analysis: {} units at {position} (requested {length})",
            text.len()
        );
        if text.is_empty() {
            return Ok(());
        }

        let breakpoints = resolver::analyze_line_breakpoints(&text)?;
        sink.report_breakpoints(position, &breakpoints)
            .map_err(EngineError::Sink)
    }
}

/// Script analysis with the default configuration
pub fn analyze_script<S, K>(source: &S, position: usize, length: usize, sink: &mut K) -> Result<()>
where
    S: TextSource + ?Sized,
    K: AnalysisSink + ?Sized,
{
    TextAnalyzer::new().analyze_script(source, position, length, sink)
}

/// Line-break analysis with the default configuration
pub fn analyze_line_breakpoints<S, K>(
    source: &S,
    position: usize,
    length: usize,
    sink: &mut K,
) -> Result<()>
where
    S: TextSource + ?Sized,
    K: AnalysisSink + ?Sized,
{
    TextAnalyzer::new().analyze_line_breakpoints(source, position, length, sink)
}
