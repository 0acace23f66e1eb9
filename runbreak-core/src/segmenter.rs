//! Script-run segmentation
//!
//! Splits UTF-16 text into maximal runs of one script. `Symbol` code units are
//! transparent: they extend whatever run is open, and a leading symbol run takes
//! the script of the first non-symbol unit that follows it.

use core::convert::Infallible;

use crate::tables::{script_of, Script};
use crate::types::ScriptRun;

/// Streaming script scanner for unit-by-unit processing
#[derive(Debug, Clone, Default)]
pub struct ScriptScanner {
    /// Script of the open run, `None` before the first unit
    current: Option<Script>,
    /// Offset of the open run
    start: usize,
    /// Length of the open run
    length: usize,
}

impl ScriptScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of code units consumed so far
    pub fn position(&self) -> usize {
        self.start + self.length
    }

    /// Process one code unit, emitting the previous run when the script changes.
    ///
    /// An error returned by `emit` is passed through untouched.
    pub fn step<E>(
        &mut self,
        unit: u16,
        emit: &mut impl FnMut(ScriptRun) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut candidate = script_of(unit);

        let Some(mut current) = self.current else {
            self.current = Some(candidate);
            self.length = 1;
            return Ok(());
        };

        if current.is_transparent() {
            current = candidate;
        }
        if candidate.is_transparent() {
            candidate = current;
        }

        if candidate == current {
            self.current = Some(current);
            self.length += 1;
            return Ok(());
        }

        emit(ScriptRun::new(self.start, self.length, current))?;
        self.start += self.length;
        self.length = 1;
        self.current = Some(candidate);
        Ok(())
    }

    /// Flush the open run, if any
    pub fn finish<E>(self, emit: &mut impl FnMut(ScriptRun) -> Result<(), E>) -> Result<(), E> {
        match self.current {
            Some(script) => emit(ScriptRun::new(self.start, self.length, script)),
            None => Ok(()),
        }
    }
}

/// Segment `text` into script runs, reporting each through `emit` in offset order.
///
/// Segmentation stops at the first error from `emit`, which is returned.
pub fn analyze_script<E>(
    text: &[u16],
    mut emit: impl FnMut(ScriptRun) -> Result<(), E>,
) -> Result<(), E> {
    let mut scanner = ScriptScanner::new();
    for &unit in text {
        scanner.step(unit, &mut emit)?;
    }
    scanner.finish(&mut emit)
}

/// Segment `text` into script runs collected in a vector
pub fn script_runs(text: &[u16]) -> Vec<ScriptRun> {
    let mut runs = Vec::new();
    analyze_script(text, emit_push(&mut runs)).unwrap_or_else(|never| match never {});
    runs
}

/// Default emit function that pushes to a vector
pub fn emit_push(
    runs: &mut Vec<ScriptRun>,
) -> impl FnMut(ScriptRun) -> Result<(), Infallible> + '_ {
    move |run| {
        runs.push(run);
        Ok(())
    }
}
