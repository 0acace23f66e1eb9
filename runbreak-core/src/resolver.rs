//! Line-break opportunity resolution (UAX#14)
//!
//! Rules run as a fixed sequence of linear passes over the resolved classes. Each
//! boundary starts out as [`BreakCondition::CanBreak`] and is decided by the first
//! rule that forbids or requires a break there; later rules cannot override it.
//! Rule precedence is therefore the pass order below.

use crate::error::{try_with_capacity, Result};
use crate::tables::linebreak::LineBreakClass::{
    self, Alphabetic as AL, BreakAfter as BA, BreakBefore as BB, BreakBoth as B2,
    BreakSymbol as SY, CarriageReturn as CR, CloseParenthesis as CP, ClosePunctuation as CL,
    CombiningMark as CM, Contingent as CB, Exclamation as EX, Glue as GL, HangulLJamo as JL,
    HangulLvSyllable as H2, HangulLvtSyllable as H3, HangulTJamo as JT, HangulVJamo as JV,
    HebrewLetter as HL, Hyphen as HY, Ideographic as ID, InfixSeparator as IS,
    Inseparable as IN, LineFeed as LF, MandatoryBreak as BK, NextLine as NL, NonStarter as NS,
    Numeric as NU, OpenPunctuation as OP, Postfix as PO, Prefix as PR, Quotation as QU,
    RegionalIndicator as RI, Space as SP, WordJoiner as WJ, ZeroWidthSpace as ZW,
};
use crate::tables::{break_class_of, is_space_unit};
use crate::types::{BreakCondition, LineBreakpoint};

/// Compute one breakpoint record per UTF-16 code unit of `text`.
///
/// Fails only when the scratch buffers cannot be allocated, in which case no
/// breakpoint is produced.
pub fn analyze_line_breakpoints(text: &[u16]) -> Result<Vec<LineBreakpoint>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut classes = try_with_capacity(text.len())?;
    let mut breakpoints = try_with_capacity(text.len())?;
    for &unit in text {
        let raw = break_class_of(unit);
        breakpoints.push(LineBreakpoint {
            is_whitespace: is_whitespace_class(raw) || is_space_unit(unit),
            ..LineBreakpoint::default()
        });
        classes.push(raw.resolve());
    }

    apply_rules(&mut classes, &mut breakpoints);
    Ok(breakpoints)
}

/// Run the rule engine over already classified text.
///
/// Classes are resolved (LB1) before any rule runs, exactly as for
/// [`analyze_line_breakpoints`]. White space is flagged from the class alone.
pub fn resolve_classes(raw_classes: &[LineBreakClass]) -> Result<Vec<LineBreakpoint>> {
    if raw_classes.is_empty() {
        return Ok(Vec::new());
    }

    let mut classes = try_with_capacity(raw_classes.len())?;
    let mut breakpoints = try_with_capacity(raw_classes.len())?;
    for &raw in raw_classes {
        breakpoints.push(LineBreakpoint {
            is_whitespace: is_whitespace_class(raw),
            ..LineBreakpoint::default()
        });
        classes.push(raw.resolve());
    }

    apply_rules(&mut classes, &mut breakpoints);
    Ok(breakpoints)
}

fn is_whitespace_class(class: LineBreakClass) -> bool {
    matches!(class, BK | ZW | SP)
}

fn apply_rules(classes: &mut [LineBreakClass], breakpoints: &mut [LineBreakpoint]) {
    debug_assert_eq!(classes.len(), breakpoints.len());

    let mut boundaries = Boundaries::new(breakpoints);

    // LB2: never break at the start; LB3 (break at the end) is left to the caller
    boundaries.forbid_before(0);

    hard_breaks_and_spaces(classes, &mut boundaries);
    inherit_combining_marks(classes);
    joiners_and_punctuation(classes, &mut boundaries);
    adjacency(classes, &mut boundaries);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

/// Set-once writer keeping both records of a boundary in sync
struct Boundaries<'a> {
    points: &'a mut [LineBreakpoint],
}

impl<'a> Boundaries<'a> {
    fn new(points: &'a mut [LineBreakpoint]) -> Self {
        Self { points }
    }

    fn set(&mut self, pos: usize, side: Side, condition: BreakCondition) -> bool {
        match side {
            Side::Before => {
                if !self.points[pos].before.try_strengthen(condition) {
                    return false;
                }
                if let Some(prev) = pos.checked_sub(1) {
                    self.points[prev].after = condition;
                }
            }
            Side::After => {
                if !self.points[pos].after.try_strengthen(condition) {
                    return false;
                }
                if let Some(next) = self.points.get_mut(pos + 1) {
                    next.before = condition;
                }
            }
        }
        true
    }

    fn forbid_before(&mut self, pos: usize) {
        self.set(pos, Side::Before, BreakCondition::MayNotBreak);
    }

    fn forbid_after(&mut self, pos: usize) {
        self.set(pos, Side::After, BreakCondition::MayNotBreak);
    }

    fn require_after(&mut self, pos: usize) {
        self.set(pos, Side::After, BreakCondition::MustBreak);
    }

    // Explicit permissions only confirm the default; they never unfreeze a boundary.
    fn permit_before(&mut self, pos: usize) {
        self.set(pos, Side::Before, BreakCondition::CanBreak);
    }

    fn permit_after(&mut self, pos: usize) {
        self.set(pos, Side::After, BreakCondition::CanBreak);
    }
}

/// Index of the first non-space class at or after `from`, or `classes.len()`
fn skip_spaces_forward(classes: &[LineBreakClass], from: usize) -> usize {
    classes[from..]
        .iter()
        .position(|&class| class != SP)
        .map_or(classes.len(), |offset| from + offset)
}

/// Index of the last non-space class before `before`
fn skip_spaces_backward(classes: &[LineBreakClass], before: usize) -> Option<usize> {
    classes[..before].iter().rposition(|&class| class != SP)
}

/// LB4-LB8
fn hard_breaks_and_spaces(classes: &[LineBreakClass], boundaries: &mut Boundaries<'_>) {
    let count = classes.len();
    let mut i = 0;
    while i < count {
        match classes[i] {
            // LB5: CR x LF
            CR if classes.get(i + 1) == Some(&LF) => {
                boundaries.forbid_before(i);
                boundaries.forbid_after(i);
            }
            // LB4, LB5: break after hard breaks; LB6: not before them
            CR | LF | NL | BK => {
                boundaries.require_after(i);
                boundaries.forbid_before(i);
            }
            // LB7
            SP => boundaries.forbid_before(i),
            // LB8: ZW SP* ÷
            ZW => {
                boundaries.forbid_before(i);
                // the spaces are consumed here and do not see LB7
                while i + 1 < count && classes[i + 1] == SP {
                    i += 1;
                }
                if i + 1 < count {
                    boundaries.permit_before(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
}

/// LB9-LB10: combining marks take the class of their base
fn inherit_combining_marks(classes: &mut [LineBreakClass]) {
    for i in 0..classes.len() {
        if classes[i] != CM {
            continue;
        }
        classes[i] = match i.checked_sub(1).map(|prev| classes[prev]) {
            Some(base) if !base.is_mark_barrier() => base,
            _ => AL,
        };
    }
}

/// LB11-LB17
fn joiners_and_punctuation(classes: &[LineBreakClass], boundaries: &mut Boundaries<'_>) {
    let count = classes.len();
    for i in 0..count {
        match classes[i] {
            // LB11
            WJ => {
                boundaries.forbid_before(i);
                boundaries.forbid_after(i);
            }
            // LB12, LB12a
            GL => {
                boundaries.forbid_after(i);
                if i > 0 && !matches!(classes[i - 1], SP | BA | HY) {
                    boundaries.forbid_before(i);
                }
            }
            // LB13
            CL | CP | EX | IS | SY => boundaries.forbid_before(i),
            // LB14: OP SP* x, the boundary after the final space stays open
            OP => {
                boundaries.forbid_after(i);
                let mut j = i;
                while j + 1 < count && classes[j + 1] == SP {
                    boundaries.forbid_after(j);
                    j += 1;
                }
            }
            // LB15: QU SP* x OP
            QU if i + 1 < count => {
                let j = skip_spaces_forward(classes, i + 1);
                if j < count && classes[j] == OP {
                    for k in (i + 1..=j).rev() {
                        boundaries.forbid_before(k);
                    }
                }
            }
            // LB16: (CL | CP) SP* x NS
            NS => {
                if let Some(j) = skip_spaces_backward(classes, i) {
                    if matches!(classes[j], CL | CP) {
                        for k in j + 1..=i {
                            boundaries.forbid_before(k);
                        }
                    }
                }
            }
            // LB17: B2 SP* x B2
            B2 if i + 1 < count => {
                let j = skip_spaces_forward(classes, i + 1);
                if j < count && classes[j] == B2 {
                    for k in (i + 1..=j).rev() {
                        boundaries.forbid_before(k);
                    }
                }
            }
            _ => {}
        }
    }
}

/// LB18-LB30a
fn adjacency(classes: &[LineBreakClass], boundaries: &mut Boundaries<'_>) {
    let count = classes.len();
    let mut regional_run = 0usize;
    for i in 0..count {
        match classes[i] {
            // LB18
            SP => boundaries.permit_after(i),
            // LB19
            QU => {
                boundaries.forbid_before(i);
                boundaries.forbid_after(i);
            }
            // LB20
            CB => {
                boundaries.permit_before(i);
                boundaries.permit_after(i);
            }
            // LB21
            BA | HY | NS => boundaries.forbid_before(i),
            BB => boundaries.forbid_after(i),
            // LB21a: HL (HY | BA) x
            HL => {
                if i + 2 < count && matches!(classes[i + 1], HY | BA) {
                    boundaries.forbid_after(i + 1);
                }
            }
            // LB22
            IN => {
                if i > 0 && matches!(classes[i - 1], AL | HL | ID | IN | NU) {
                    boundaries.forbid_before(i);
                }
            }
            _ => {}
        }

        regional_run = if classes[i] == RI { regional_run + 1 } else { 0 };

        let Some(&next) = classes.get(i + 1) else {
            continue;
        };
        // LB30a: pair regional indicators from the start of their run
        let closes_flag = classes[i] == RI && next == RI && regional_run % 2 == 1;
        if closes_flag || is_glued_pair(classes[i], next) {
            boundaries.forbid_after(i);
        }
    }
}

/// LB23-LB30: pairs that may not be separated
fn is_glued_pair(left: LineBreakClass, right: LineBreakClass) -> bool {
    matches!(
        (left, right),
        // LB23
        (ID, PO) | (AL | HL, NU) | (NU, AL | HL)
        // LB24
        | (PR, ID | AL | HL) | (PO, AL | HL)
        // LB25
        | (CL | CP, PO | PR) | (NU, PO | PR) | (PO | PR, OP | NU) | (HY | IS | NU | SY, NU)
        // LB26
        | (JL, JL | JV | H2 | H3) | (JV | H2, JV | JT) | (JT | H3, JT)
        // LB27
        | (JL | JV | JT | H2 | H3, IN | PO) | (PO, JL | JV | JT | H2 | H3)
        // LB28
        | (AL | HL, AL | HL)
        // LB29
        | (IS, AL | HL)
        // LB30
        | (AL | HL | NU, OP) | (CP, AL | HL | NU)
    )
}
