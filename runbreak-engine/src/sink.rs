//! Result sink contract and a collecting implementation

use runbreak_core::{LineBreakpoint, ScriptAnalysis, ScriptRun};

use crate::error::BoxError;

/// Receiver of analysis results.
///
/// Returning an error from either method aborts the running analysis.
pub trait AnalysisSink {
    /// Receive one script run; `start` is absolute in the source
    fn report_script_run(
        &mut self,
        start: usize,
        length: usize,
        analysis: ScriptAnalysis,
    ) -> Result<(), BoxError>;

    /// Receive the breakpoints of a window starting at `start`, one per code unit
    fn report_breakpoints(
        &mut self,
        start: usize,
        breakpoints: &[LineBreakpoint],
    ) -> Result<(), BoxError>;
}

impl<S: AnalysisSink + ?Sized> AnalysisSink for &mut S {
    fn report_script_run(
        &mut self,
        start: usize,
        length: usize,
        analysis: ScriptAnalysis,
    ) -> Result<(), BoxError> {
        (**self).report_script_run(start, length, analysis)
    }

    fn report_breakpoints(
        &mut self,
        start: usize,
        breakpoints: &[LineBreakpoint],
    ) -> Result<(), BoxError> {
        (**self).report_breakpoints(start, breakpoints)
    }
}

/// Sink that stores everything it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingSink {
    /// Script runs in report order, with absolute offsets
    pub runs: Vec<ScriptRun>,
    /// Offset of the first breakpoint in `breakpoints`
    pub breakpoint_start: usize,
    /// Breakpoints of the last reported window
    pub breakpoints: Vec<LineBreakpoint>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything collected so far
    pub fn clear(&mut self) {
        self.runs.clear();
        self.breakpoint_start = 0;
        self.breakpoints.clear();
    }
}

impl AnalysisSink for CollectingSink {
    fn report_script_run(
        &mut self,
        start: usize,
        length: usize,
        analysis: ScriptAnalysis,
    ) -> Result<(), BoxError> {
        self.runs.push(ScriptRun {
            start,
            length,
            analysis,
        });
        Ok(())
    }

    fn report_breakpoints(
        &mut self,
        start: usize,
        breakpoints: &[LineBreakpoint],
    ) -> Result<(), BoxError> {
        self.breakpoint_start = start;
        self.breakpoints.clear();
        self.breakpoints.try_reserve_exact(breakpoints.len())?;
        self.breakpoints.extend_from_slice(breakpoints);
        Ok(())
    }
}
