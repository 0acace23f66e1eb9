//! JSON output formatter

use super::{AnalysisReport, OutputFormatter, ReportBody};
use anyhow::Result;
use runbreak_core::{LineBreakpoint, ScriptRun};
use serde::Serialize;
use std::io::Write;

/// JSON formatter: outputs one object per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<ReportData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportData {
    /// Input name
    pub source: String,
    /// Number of UTF-16 code units analyzed
    pub length: usize,
    /// Script runs, for script analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<ScriptRun>>,
    /// Breakpoints, for line-break analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<LineBreakpoint>>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let (runs, breakpoints) = match &report.body {
            ReportBody::Scripts(runs) => (Some(runs.clone()), None),
            ReportBody::Breaks(breakpoints) => (None, Some(breakpoints.clone())),
        };
        self.reports.push(ReportData {
            source: report.source.clone(),
            length: report.units.len(),
            runs,
            breakpoints,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runbreak_core::{script_runs, Script};
    use serde_json::Value;

    #[test]
    fn test_runs_as_json() {
        let units: Vec<u16> = "a\u{3b1}".encode_utf16().collect();
        let report = AnalysisReport {
            source: "<text>".to_string(),
            body: ReportBody::Scripts(script_runs(&units)),
            units,
        };

        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_report(&report).unwrap();
        formatter.finish().unwrap();
        let value: Value = serde_json::from_slice(&formatter.into_inner()).unwrap();

        assert_eq!(value[0]["source"], "<text>");
        assert_eq!(value[0]["length"], 2);
        assert_eq!(value[0]["runs"][1]["start"], 1);
        assert_eq!(value[0]["runs"][1]["analysis"]["script"], "Greek");
        assert!(value[0].get("breakpoints").is_none());

        let runs: Vec<ScriptRun> = serde_json::from_value(value[0]["runs"].clone()).unwrap();
        assert_eq!(runs[0].script(), Script::Latin);
    }

    #[test]
    fn test_breakpoints_as_json() {
        let units: Vec<u16> = vec![0x0041];
        let report = AnalysisReport {
            source: "x".to_string(),
            body: ReportBody::Breaks(vec![LineBreakpoint::default()]),
            units,
        };

        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.format_report(&report).unwrap();
        formatter.finish().unwrap();
        let value: Value = serde_json::from_slice(&formatter.into_inner()).unwrap();

        assert_eq!(value[0]["breakpoints"][0]["before"], "CanBreak");
        assert_eq!(value[0]["breakpoints"][0]["is_whitespace"], false);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.finish().unwrap();
        assert_eq!(formatter.into_inner(), b"[]\n");
    }
}
