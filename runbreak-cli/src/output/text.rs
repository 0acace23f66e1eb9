//! Plain text output formatter

use super::{AnalysisReport, OutputFormatter, ReportBody};
use anyhow::Result;
use runbreak_core::LineBreakpoint;
use std::io::Write;

/// Plain text formatter: a header per input, then one line per run or code unit
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn flags(bp: &LineBreakpoint) -> &'static str {
    match (bp.is_whitespace, bp.is_soft_hyphen) {
        (false, false) => "-",
        (true, false) => "ws",
        (false, true) => "shy",
        (true, true) => "ws,shy",
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &AnalysisReport) -> Result<()> {
        writeln!(
            self.writer,
            "# {} ({} code units)",
            report.source,
            report.units.len()
        )?;
        match &report.body {
            ReportBody::Scripts(runs) => {
                for run in runs {
                    writeln!(
                        self.writer,
                        "{} {} {:?} {:?}",
                        run.start, run.length, run.analysis.script, run.analysis.shapes
                    )?;
                }
            }
            ReportBody::Breaks(breakpoints) => {
                for (index, (bp, unit)) in breakpoints.iter().zip(&report.units).enumerate() {
                    writeln!(
                        self.writer,
                        "{index} U+{unit:04X} {} {} {}",
                        bp.before,
                        bp.after,
                        flags(bp)
                    )?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
