//! Script identification by code-unit range
//!
//! The range table is searched in order; the first interval containing the code
//! unit wins and anything not covered is [`Script::Unknown`].

use core::fmt;

/// Writing system of a code unit.
///
/// Discriminants are the stable numeric script ids reported to shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[allow(missing_docs)]
pub enum Script {
    Arabic = 0,
    Armenian = 1,
    Balinese = 2,
    Bengali = 3,
    Buginese = 6,
    Canadian = 8,
    Cherokee = 11,
    /// C1 control characters; runs of this script carry no visual
    Controls = 12,
    Coptic = 13,
    Cyrillic = 16,
    Devanagari = 18,
    Ethiopic = 19,
    Georgian = 20,
    Glagolitic = 22,
    Greek = 23,
    Gujarati = 24,
    Gurmukhi = 25,
    Hangul = 27,
    Hebrew = 29,
    Kannada = 32,
    Khmer = 36,
    Lao = 37,
    Latin = 38,
    Lepcha = 39,
    Limbu = 40,
    Malayalam = 44,
    Mongolian = 45,
    Myanmar = 46,
    NewTaiLue = 47,
    NKo = 48,
    Ogham = 49,
    OlChiki = 50,
    Oriya = 53,
    Runic = 58,
    Sinhala = 61,
    Sundanese = 62,
    Syriac = 64,
    TaiLe = 67,
    Tamil = 68,
    Telugu = 69,
    Thaana = 70,
    Thai = 71,
    Tibetan = 72,
    Tifinagh = 73,
    /// Punctuation, digits and marks shared across scripts; transparent when segmenting
    Symbol = 77,
    /// No range matched
    Unknown = 0xffff,
}

impl Script {
    /// Every script id, in numeric order
    pub const ALL: [Script; 46] = [
        Script::Arabic,
        Script::Armenian,
        Script::Balinese,
        Script::Bengali,
        Script::Buginese,
        Script::Canadian,
        Script::Cherokee,
        Script::Controls,
        Script::Coptic,
        Script::Cyrillic,
        Script::Devanagari,
        Script::Ethiopic,
        Script::Georgian,
        Script::Glagolitic,
        Script::Greek,
        Script::Gujarati,
        Script::Gurmukhi,
        Script::Hangul,
        Script::Hebrew,
        Script::Kannada,
        Script::Khmer,
        Script::Lao,
        Script::Latin,
        Script::Lepcha,
        Script::Limbu,
        Script::Malayalam,
        Script::Mongolian,
        Script::Myanmar,
        Script::NewTaiLue,
        Script::NKo,
        Script::Ogham,
        Script::OlChiki,
        Script::Oriya,
        Script::Runic,
        Script::Sinhala,
        Script::Sundanese,
        Script::Syriac,
        Script::TaiLe,
        Script::Tamil,
        Script::Telugu,
        Script::Thaana,
        Script::Thai,
        Script::Tibetan,
        Script::Tifinagh,
        Script::Symbol,
        Script::Unknown,
    ];

    /// Numeric script id
    #[inline]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Whether the script defers to its neighbours during segmentation
    #[inline]
    pub fn is_transparent(self) -> bool {
        self == Script::Symbol
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Script::Arabic => "Arabic",
            Script::Armenian => "Armenian",
            Script::Balinese => "Balinese",
            Script::Bengali => "Bengali",
            Script::Buginese => "Buginese",
            Script::Canadian => "Canadian Aboriginal",
            Script::Cherokee => "Cherokee",
            Script::Controls => "Controls",
            Script::Coptic => "Coptic",
            Script::Cyrillic => "Cyrillic",
            Script::Devanagari => "Devanagari",
            Script::Ethiopic => "Ethiopic",
            Script::Georgian => "Georgian",
            Script::Glagolitic => "Glagolitic",
            Script::Greek => "Greek",
            Script::Gujarati => "Gujarati",
            Script::Gurmukhi => "Gurmukhi",
            Script::Hangul => "Hangul",
            Script::Hebrew => "Hebrew",
            Script::Kannada => "Kannada",
            Script::Khmer => "Khmer",
            Script::Lao => "Lao",
            Script::Latin => "Latin",
            Script::Lepcha => "Lepcha",
            Script::Limbu => "Limbu",
            Script::Malayalam => "Malayalam",
            Script::Mongolian => "Mongolian",
            Script::Myanmar => "Myanmar",
            Script::NewTaiLue => "New Tai Lue",
            Script::NKo => "N'Ko",
            Script::Ogham => "Ogham",
            Script::OlChiki => "Ol Chiki",
            Script::Oriya => "Oriya",
            Script::Runic => "Runic",
            Script::Sinhala => "Sinhala",
            Script::Sundanese => "Sundanese",
            Script::Syriac => "Syriac",
            Script::TaiLe => "Tai Le",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Thaana => "Thaana",
            Script::Thai => "Thai",
            Script::Tibetan => "Tibetan",
            Script::Tifinagh => "Tifinagh",
            Script::Symbol => "Symbol",
            Script::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive code-unit interval attributed to one script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    /// First code unit of the interval
    pub first: u16,
    /// Last code unit of the interval (inclusive)
    pub last: u16,
    /// Script of every code unit in the interval
    pub script: Script,
}

impl ScriptRange {
    const fn new(script: Script, first: u16, last: u16) -> Self {
        Self {
            first,
            last,
            script,
        }
    }

    /// Whether the interval contains `unit`
    #[inline]
    pub fn contains(&self, unit: u16) -> bool {
        self.first <= unit && unit <= self.last
    }
}

/// Ordered script intervals.
///
/// Gaps (U+0800-U+08FF, U+16F1-U+177F, U+2D80 and above...) fall through to
/// [`Script::Unknown`].
pub static SCRIPT_RANGES: &[ScriptRange] = &[
    // C0 controls, ASCII punctuation, digits, symbols
    ScriptRange::new(Script::Symbol, 0x0000, 0x0040),
    ScriptRange::new(Script::Latin, 0x0041, 0x005a),
    ScriptRange::new(Script::Symbol, 0x005b, 0x0060),
    ScriptRange::new(Script::Latin, 0x0061, 0x007a),
    // ASCII punctuation and DEL
    ScriptRange::new(Script::Symbol, 0x007b, 0x007f),
    // C1 controls
    ScriptRange::new(Script::Controls, 0x0080, 0x009f),
    // Latin-1 Supplement through Spacing Modifier Letters
    ScriptRange::new(Script::Latin, 0x00a0, 0x02ff),
    // Combining Diacritical Marks
    ScriptRange::new(Script::Symbol, 0x0300, 0x036f),
    ScriptRange::new(Script::Greek, 0x0370, 0x03e1),
    ScriptRange::new(Script::Coptic, 0x03e2, 0x03ef),
    ScriptRange::new(Script::Greek, 0x03f0, 0x03ff),
    // Cyrillic and Cyrillic Supplement
    ScriptRange::new(Script::Cyrillic, 0x0400, 0x052f),
    ScriptRange::new(Script::Armenian, 0x0530, 0x058f),
    ScriptRange::new(Script::Hebrew, 0x0590, 0x05ff),
    ScriptRange::new(Script::Arabic, 0x0600, 0x06ff),
    ScriptRange::new(Script::Syriac, 0x0700, 0x074f),
    // Arabic Supplement
    ScriptRange::new(Script::Arabic, 0x0750, 0x077f),
    ScriptRange::new(Script::Thaana, 0x0780, 0x07bf),
    ScriptRange::new(Script::NKo, 0x07c0, 0x07ff),
    ScriptRange::new(Script::Devanagari, 0x0900, 0x097f),
    ScriptRange::new(Script::Bengali, 0x0980, 0x09ff),
    ScriptRange::new(Script::Gurmukhi, 0x0a00, 0x0a7f),
    ScriptRange::new(Script::Gujarati, 0x0a80, 0x0aff),
    ScriptRange::new(Script::Oriya, 0x0b00, 0x0b7f),
    ScriptRange::new(Script::Tamil, 0x0b80, 0x0bff),
    ScriptRange::new(Script::Telugu, 0x0c00, 0x0c7f),
    ScriptRange::new(Script::Kannada, 0x0c80, 0x0cff),
    ScriptRange::new(Script::Malayalam, 0x0d00, 0x0d7f),
    ScriptRange::new(Script::Sinhala, 0x0d80, 0x0dff),
    ScriptRange::new(Script::Thai, 0x0e00, 0x0e7f),
    ScriptRange::new(Script::Lao, 0x0e80, 0x0eff),
    ScriptRange::new(Script::Tibetan, 0x0f00, 0x0fff),
    ScriptRange::new(Script::Myanmar, 0x1000, 0x109f),
    ScriptRange::new(Script::Georgian, 0x10a0, 0x10ff),
    // Hangul Jamo
    ScriptRange::new(Script::Hangul, 0x1100, 0x11ff),
    // Ethiopic and Ethiopic Supplement
    ScriptRange::new(Script::Ethiopic, 0x1200, 0x139f),
    ScriptRange::new(Script::Cherokee, 0x13a0, 0x13ff),
    ScriptRange::new(Script::Canadian, 0x1400, 0x167f),
    ScriptRange::new(Script::Ogham, 0x1680, 0x169f),
    ScriptRange::new(Script::Runic, 0x16a0, 0x16f0),
    ScriptRange::new(Script::Khmer, 0x1780, 0x17ff),
    ScriptRange::new(Script::Mongolian, 0x1800, 0x18af),
    ScriptRange::new(Script::Limbu, 0x1900, 0x194f),
    ScriptRange::new(Script::TaiLe, 0x1950, 0x197f),
    ScriptRange::new(Script::NewTaiLue, 0x1980, 0x19df),
    // Khmer Symbols
    ScriptRange::new(Script::Khmer, 0x19e0, 0x19ff),
    ScriptRange::new(Script::Buginese, 0x1a00, 0x1a1f),
    // Tai Tham has no dedicated id
    ScriptRange::new(Script::Symbol, 0x1a20, 0x1aaf),
    ScriptRange::new(Script::Balinese, 0x1b00, 0x1b7f),
    ScriptRange::new(Script::Sundanese, 0x1b80, 0x1bbf),
    // Batak has no dedicated id
    ScriptRange::new(Script::Symbol, 0x1bc0, 0x1bff),
    ScriptRange::new(Script::Lepcha, 0x1c00, 0x1c4f),
    ScriptRange::new(Script::OlChiki, 0x1c50, 0x1c7f),
    // Sundanese Supplement
    ScriptRange::new(Script::Symbol, 0x1cc0, 0x1ccf),
    // Vedic Extensions
    ScriptRange::new(Script::Devanagari, 0x1cd0, 0x1cff),
    // Phonetic Extensions
    ScriptRange::new(Script::Latin, 0x1d00, 0x1dbf),
    // Combining Diacritical Marks Supplement
    ScriptRange::new(Script::Symbol, 0x1dc0, 0x1dff),
    // Latin Extended Additional
    ScriptRange::new(Script::Latin, 0x1e00, 0x1eff),
    // Greek Extended
    ScriptRange::new(Script::Greek, 0x1f00, 0x1fff),
    // General Punctuation through Miscellaneous Symbols and Arrows
    ScriptRange::new(Script::Symbol, 0x2000, 0x2bff),
    ScriptRange::new(Script::Glagolitic, 0x2c00, 0x2c5f),
    // Latin Extended-C
    ScriptRange::new(Script::Latin, 0x2c60, 0x2c7f),
    ScriptRange::new(Script::Coptic, 0x2c80, 0x2cff),
    // Georgian Supplement
    ScriptRange::new(Script::Georgian, 0x2d00, 0x2d2f),
    ScriptRange::new(Script::Tifinagh, 0x2d30, 0x2d7f),
];

/// Script of a single UTF-16 code unit
#[inline]
pub fn script_of(unit: u16) -> Script {
    SCRIPT_RANGES
        .iter()
        .find(|range| range.contains(unit))
        .map_or(Script::Unknown, |range| range.script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classification() {
        assert_eq!(script_of(u16::from(b'a')), Script::Latin);
        assert_eq!(script_of(u16::from(b'Z')), Script::Latin);
        assert_eq!(script_of(u16::from(b'0')), Script::Symbol);
        assert_eq!(script_of(u16::from(b' ')), Script::Symbol);
        assert_eq!(script_of(u16::from(b'{')), Script::Symbol);
        assert_eq!(script_of(0x0000), Script::Symbol);
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(script_of(0x0080), Script::Controls);
        assert_eq!(script_of(0x009f), Script::Controls);
        assert_eq!(script_of(0x00a0), Script::Latin);
        assert_eq!(script_of(0x03e1), Script::Greek);
        assert_eq!(script_of(0x03e2), Script::Coptic);
        assert_eq!(script_of(0x03f0), Script::Greek);
        assert_eq!(script_of(0x2d7f), Script::Tifinagh);
    }

    #[test]
    fn test_gaps_are_unknown() {
        assert_eq!(script_of(0x0800), Script::Unknown);
        assert_eq!(script_of(0x16f1), Script::Unknown);
        assert_eq!(script_of(0x2d80), Script::Unknown);
        assert_eq!(script_of(0x4e00), Script::Unknown);
        assert_eq!(script_of(0xd800), Script::Unknown);
        assert_eq!(script_of(0xffff), Script::Unknown);
    }

    #[test]
    fn test_ranges_are_ordered_and_disjoint() {
        for pair in SCRIPT_RANGES.windows(2) {
            assert!(pair[0].first <= pair[0].last);
            assert!(pair[0].last < pair[1].first, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_ids_and_names() {
        assert_eq!(Script::Arabic.id(), 0);
        assert_eq!(Script::Latin.id(), 38);
        assert_eq!(Script::Symbol.id(), 77);
        assert_eq!(Script::Unknown.id(), 0xffff);
        assert_eq!(Script::NKo.to_string(), "N'Ko");
        assert!(Script::Symbol.is_transparent());
        assert!(!Script::Unknown.is_transparent());
    }

    #[test]
    fn test_all_is_sorted_by_id() {
        for pair in Script::ALL.windows(2) {
            assert!(pair[0].id() < pair[1].id());
        }
    }
}
