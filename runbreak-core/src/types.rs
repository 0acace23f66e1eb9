//! Core types for script runs and line breakpoints

use core::fmt;

use crate::tables::Script;

/// How a script run is expected to be shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptShapes {
    /// Regular glyph shaping
    #[default]
    Default,
    /// Control characters with no visual representation
    NoVisual,
}

/// Script attribution of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptAnalysis {
    /// Script the run belongs to
    pub script: Script,
    /// Shaping kind derived from the script
    pub shapes: ScriptShapes,
}

impl ScriptAnalysis {
    /// Create the analysis for a script; control runs are marked as non-visual
    pub fn new(script: Script) -> Self {
        let shapes = if script == Script::Controls {
            ScriptShapes::NoVisual
        } else {
            ScriptShapes::Default
        };
        Self { script, shapes }
    }
}

/// A maximal run of code units sharing one script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptRun {
    /// Offset of the first code unit
    pub start: usize,
    /// Number of code units in the run
    pub length: usize,
    /// Script attribution
    pub analysis: ScriptAnalysis,
}

impl ScriptRun {
    /// Create a new run
    pub fn new(start: usize, length: usize, script: Script) -> Self {
        Self {
            start,
            length,
            analysis: ScriptAnalysis::new(script),
        }
    }

    /// Offset one past the last code unit
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Script of the run
    pub fn script(&self) -> Script {
        self.analysis.script
    }
}

/// Break condition on one side of a code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakCondition {
    /// A line break is allowed (undecided, weakest)
    #[default]
    CanBreak,
    /// A line break is forbidden
    MayNotBreak,
    /// A line break is mandatory
    MustBreak,
}

impl BreakCondition {
    /// Set-once update.
    ///
    /// Only an undecided (`CanBreak`) condition accepts a new value; once it holds
    /// anything else it is frozen. Returns `true` when the stored value changed.
    #[inline]
    pub fn try_strengthen(&mut self, condition: BreakCondition) -> bool {
        if self.is_decided() || condition == BreakCondition::CanBreak {
            return false;
        }
        *self = condition;
        true
    }

    /// Whether a rule has already decided this boundary
    #[inline]
    pub fn is_decided(self) -> bool {
        self != BreakCondition::CanBreak
    }

    /// Short lowercase label used in diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            BreakCondition::CanBreak => "can",
            BreakCondition::MayNotBreak => "no",
            BreakCondition::MustBreak => "must",
        }
    }
}

impl fmt::Display for BreakCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line-breaking properties of a single code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineBreakpoint {
    /// Condition of the boundary before this code unit
    pub before: BreakCondition,
    /// Condition of the boundary after this code unit
    pub after: BreakCondition,
    /// The code unit is white space
    pub is_whitespace: bool,
    /// The code unit is a soft hyphen
    pub is_soft_hyphen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_strengthen_is_set_once() {
        let mut condition = BreakCondition::CanBreak;
        assert!(condition.try_strengthen(BreakCondition::MustBreak));
        assert!(!condition.try_strengthen(BreakCondition::MayNotBreak));
        assert!(!condition.try_strengthen(BreakCondition::CanBreak));
        assert_eq!(condition, BreakCondition::MustBreak);
    }

    #[test]
    fn test_can_break_write_is_noop() {
        let mut condition = BreakCondition::CanBreak;
        assert!(!condition.try_strengthen(BreakCondition::CanBreak));
        assert!(!condition.is_decided());
        assert!(condition.try_strengthen(BreakCondition::MayNotBreak));
        assert!(condition.is_decided());
    }

    #[test]
    fn test_control_runs_are_not_visual() {
        assert_eq!(
            ScriptAnalysis::new(Script::Controls).shapes,
            ScriptShapes::NoVisual
        );
        assert_eq!(
            ScriptAnalysis::new(Script::Latin).shapes,
            ScriptShapes::Default
        );
        assert_eq!(
            ScriptAnalysis::new(Script::Unknown).shapes,
            ScriptShapes::Default
        );
    }

    #[test]
    fn test_script_run_end() {
        let run = ScriptRun::new(3, 4, Script::Greek);
        assert_eq!(run.end(), 7);
        assert_eq!(run.script(), Script::Greek);
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(BreakCondition::CanBreak.to_string(), "can");
        assert_eq!(BreakCondition::MayNotBreak.to_string(), "no");
        assert_eq!(BreakCondition::MustBreak.to_string(), "must");
    }
}
