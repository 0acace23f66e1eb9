//! UAX#14 line-break classes and the three-level lookup trie
//!
//! The trie is generated by `build.rs`; see there for its layout.

use core::fmt;

include!(concat!(env!("OUT_DIR"), "/linebreak_table.rs"));

/// Unicode line-breaking class.
///
/// Discriminants match the raw values stored in the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LineBreakClass {
    /// BK: cause a line break after
    MandatoryBreak = 1,
    /// CR: carriage return
    CarriageReturn,
    /// LF: line feed
    LineFeed,
    /// CM: attached to the preceding character
    CombiningMark,
    /// SG: lone surrogate code unit
    Surrogate,
    /// GL: non-breaking glue
    Glue,
    /// CB: break opportunity contingent on additional information
    Contingent,
    /// SP: space
    Space,
    /// ZW: zero width space
    ZeroWidthSpace,
    /// NL: next line
    NextLine,
    /// WJ: word joiner
    WordJoiner,
    /// JL: Hangul leading jamo
    HangulLJamo,
    /// JV: Hangul vowel jamo
    HangulVJamo,
    /// JT: Hangul trailing jamo
    HangulTJamo,
    /// H2: Hangul LV syllable
    HangulLvSyllable,
    /// H3: Hangul LVT syllable
    HangulLvtSyllable,
    /// XX: unknown or unassigned
    Unknown,
    /// OP: opening punctuation
    OpenPunctuation,
    /// CL: closing punctuation
    ClosePunctuation,
    /// CP: closing parenthesis
    CloseParenthesis,
    /// QU: ambiguous quotation
    Quotation,
    /// NS: nonstarter
    NonStarter,
    /// EX: exclamation or interrogation
    Exclamation,
    /// SY: symbols allowing a break after
    BreakSymbol,
    /// IS: infix numeric separator
    InfixSeparator,
    /// PR: prefix numeric
    Prefix,
    /// PO: postfix numeric
    Postfix,
    /// NU: numeric
    Numeric,
    /// AL: alphabetic
    Alphabetic,
    /// ID: ideographic
    Ideographic,
    /// IN: inseparable
    Inseparable,
    /// HY: hyphen
    Hyphen,
    /// BB: break before
    BreakBefore,
    /// BA: break after
    BreakAfter,
    /// SA: complex context dependent (South East Asian)
    ComplexContext,
    /// AI: ambiguous (alphabetic or ideographic)
    Ambiguous,
    /// B2: break opportunity before and after
    BreakBoth,
    /// HL: Hebrew letter
    HebrewLetter,
    /// CJ: conditional Japanese starter
    ConditionalJapaneseStarter,
    /// RI: regional indicator
    RegionalIndicator,
}

impl LineBreakClass {
    /// Every class, in numeric order
    pub const ALL: [LineBreakClass; 40] = [
        LineBreakClass::MandatoryBreak,
        LineBreakClass::CarriageReturn,
        LineBreakClass::LineFeed,
        LineBreakClass::CombiningMark,
        LineBreakClass::Surrogate,
        LineBreakClass::Glue,
        LineBreakClass::Contingent,
        LineBreakClass::Space,
        LineBreakClass::ZeroWidthSpace,
        LineBreakClass::NextLine,
        LineBreakClass::WordJoiner,
        LineBreakClass::HangulLJamo,
        LineBreakClass::HangulVJamo,
        LineBreakClass::HangulTJamo,
        LineBreakClass::HangulLvSyllable,
        LineBreakClass::HangulLvtSyllable,
        LineBreakClass::Unknown,
        LineBreakClass::OpenPunctuation,
        LineBreakClass::ClosePunctuation,
        LineBreakClass::CloseParenthesis,
        LineBreakClass::Quotation,
        LineBreakClass::NonStarter,
        LineBreakClass::Exclamation,
        LineBreakClass::BreakSymbol,
        LineBreakClass::InfixSeparator,
        LineBreakClass::Prefix,
        LineBreakClass::Postfix,
        LineBreakClass::Numeric,
        LineBreakClass::Alphabetic,
        LineBreakClass::Ideographic,
        LineBreakClass::Inseparable,
        LineBreakClass::Hyphen,
        LineBreakClass::BreakBefore,
        LineBreakClass::BreakAfter,
        LineBreakClass::ComplexContext,
        LineBreakClass::Ambiguous,
        LineBreakClass::BreakBoth,
        LineBreakClass::HebrewLetter,
        LineBreakClass::ConditionalJapaneseStarter,
        LineBreakClass::RegionalIndicator,
    ];

    /// Decode a raw trie value; anything out of range is `Unknown`
    #[inline]
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            1..=40 => Self::ALL[usize::from(raw) - 1],
            _ => LineBreakClass::Unknown,
        }
    }

    /// Raw numeric value
    #[inline]
    pub fn raw(self) -> u16 {
        self as u16
    }

    /// Resolve classes whose behaviour needs information this analysis does not
    /// have (UAX#14 LB1).
    #[inline]
    pub fn resolve(self) -> Self {
        match self {
            LineBreakClass::Ambiguous
            | LineBreakClass::ComplexContext
            | LineBreakClass::Surrogate
            | LineBreakClass::Unknown => LineBreakClass::Alphabetic,
            LineBreakClass::ConditionalJapaneseStarter => LineBreakClass::NonStarter,
            other => other,
        }
    }

    /// Classes that end a line or a space run: the predecessors that keep a
    /// combining mark from inheriting their class
    #[inline]
    pub fn is_mark_barrier(self) -> bool {
        matches!(
            self,
            LineBreakClass::Space
                | LineBreakClass::MandatoryBreak
                | LineBreakClass::CarriageReturn
                | LineBreakClass::LineFeed
                | LineBreakClass::NextLine
                | LineBreakClass::ZeroWidthSpace
        )
    }

    /// Two-letter UAX#14 abbreviation
    pub fn code(self) -> &'static str {
        match self {
            LineBreakClass::MandatoryBreak => "BK",
            LineBreakClass::CarriageReturn => "CR",
            LineBreakClass::LineFeed => "LF",
            LineBreakClass::CombiningMark => "CM",
            LineBreakClass::Surrogate => "SG",
            LineBreakClass::Glue => "GL",
            LineBreakClass::Contingent => "CB",
            LineBreakClass::Space => "SP",
            LineBreakClass::ZeroWidthSpace => "ZW",
            LineBreakClass::NextLine => "NL",
            LineBreakClass::WordJoiner => "WJ",
            LineBreakClass::HangulLJamo => "JL",
            LineBreakClass::HangulVJamo => "JV",
            LineBreakClass::HangulTJamo => "JT",
            LineBreakClass::HangulLvSyllable => "H2",
            LineBreakClass::HangulLvtSyllable => "H3",
            LineBreakClass::Unknown => "XX",
            LineBreakClass::OpenPunctuation => "OP",
            LineBreakClass::ClosePunctuation => "CL",
            LineBreakClass::CloseParenthesis => "CP",
            LineBreakClass::Quotation => "QU",
            LineBreakClass::NonStarter => "NS",
            LineBreakClass::Exclamation => "EX",
            LineBreakClass::BreakSymbol => "SY",
            LineBreakClass::InfixSeparator => "IS",
            LineBreakClass::Prefix => "PR",
            LineBreakClass::Postfix => "PO",
            LineBreakClass::Numeric => "NU",
            LineBreakClass::Alphabetic => "AL",
            LineBreakClass::Ideographic => "ID",
            LineBreakClass::Inseparable => "IN",
            LineBreakClass::Hyphen => "HY",
            LineBreakClass::BreakBefore => "BB",
            LineBreakClass::BreakAfter => "BA",
            LineBreakClass::ComplexContext => "SA",
            LineBreakClass::Ambiguous => "AI",
            LineBreakClass::BreakBoth => "B2",
            LineBreakClass::HebrewLetter => "HL",
            LineBreakClass::ConditionalJapaneseStarter => "CJ",
            LineBreakClass::RegionalIndicator => "RI",
        }
    }
}

impl fmt::Display for LineBreakClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw (unresolved) line-break class of a UTF-16 code unit
#[inline]
pub fn break_class_of(unit: u16) -> LineBreakClass {
    let page = LINEBREAK_TABLE[usize::from(unit >> 8)];
    let block = LINEBREAK_TABLE[usize::from(page) + usize::from((unit >> 4) & 0x0f)];
    LineBreakClass::from_raw(LINEBREAK_TABLE[usize::from(block) + usize::from(unit & 0x0f)])
}

/// Whether a code unit has the Unicode `White_Space` property
#[inline]
pub fn is_space_unit(unit: u16) -> bool {
    char::from_u32(u32::from(unit)).is_some_and(char::is_whitespace)
}
