//! Integration tests for line-break opportunity resolution

use runbreak_core::{
    analyze_line_breakpoints, resolve_classes, BreakCondition, LineBreakClass, LineBreakpoint,
};

fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Offsets after which a line may or must end
fn break_offsets(breakpoints: &[LineBreakpoint]) -> Vec<usize> {
    breakpoints
        .iter()
        .enumerate()
        .filter(|(_, bp)| bp.after != BreakCondition::MayNotBreak)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_one_record_per_unit() {
    for text in ["", "a", "hello world", "\u{1f600} smile", "\r\n\r\n"] {
        let units = utf16(text);
        let breakpoints = analyze_line_breakpoints(&units).unwrap();
        assert_eq!(breakpoints.len(), units.len(), "input {text:?}");
    }
}

#[test]
fn test_first_unit_never_breaks_before() {
    for text in [" a", "\n", ")", "\u{4e00}"] {
        let breakpoints = analyze_line_breakpoints(&utf16(text)).unwrap();
        assert_eq!(breakpoints[0].before, BreakCondition::MayNotBreak);
    }
}

#[test]
fn test_english_sentence() {
    let text = utf16("The quick (brown) fox.");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    // after "The ", "quick ", "(brown) " and the final period
    assert_eq!(break_offsets(&breakpoints), vec![3, 9, 17, 21]);
}

#[test]
fn test_no_break_before_punctuation() {
    let text = utf16("wait !");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    // the space may not start a line and neither may "!"
    assert_eq!(breakpoints[4].before, BreakCondition::MayNotBreak);
    assert_eq!(breakpoints[5].before, BreakCondition::MayNotBreak);
    assert_eq!(breakpoints[5].after, BreakCondition::CanBreak);
}

#[test]
fn test_hard_breaks_are_mandatory() {
    let text = utf16("one\ntwo\r\nthree\u{2028}four");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    let mandatory: Vec<usize> = breakpoints
        .iter()
        .enumerate()
        .filter(|(_, bp)| bp.after == BreakCondition::MustBreak)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(mandatory, vec![3, 8, 14]);
    assert!(breakpoints[14].is_whitespace);
}

#[test]
fn test_japanese_text() {
    // あいう。えお: each kana may be followed by a break, the full stop may not start a line
    let text = utf16("\u{3042}\u{3044}\u{3046}\u{3002}\u{3048}\u{304a}");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    assert_eq!(breakpoints[2].after, BreakCondition::MayNotBreak);
    assert_eq!(break_offsets(&breakpoints), vec![0, 1, 3, 4, 5]);
}

#[test]
fn test_url_like_text() {
    let text = utf16("a/b");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    assert_eq!(breakpoints[1].before, BreakCondition::MayNotBreak);
}

#[test]
fn test_whitespace_flags() {
    let text = utf16("a b\u{3000}c\td");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    let flags: Vec<bool> = breakpoints.iter().map(|bp| bp.is_whitespace).collect();
    assert_eq!(flags, vec![false, true, false, true, false, true, false]);
    assert!(breakpoints.iter().all(|bp| !bp.is_soft_hyphen));
}

#[test]
fn test_soft_hyphen_is_not_flagged() {
    let text = utf16("co\u{ad}op");
    let breakpoints = analyze_line_breakpoints(&text).unwrap();
    assert!(!breakpoints[2].is_soft_hyphen);
}

#[test]
fn test_resolve_classes_matches_text_analysis() {
    let text = utf16("Price: $12 (net)");
    let classes: Vec<LineBreakClass> = text
        .iter()
        .map(|&unit| runbreak_core::break_class_of(unit))
        .collect();

    let from_text = analyze_line_breakpoints(&text).unwrap();
    let from_classes = resolve_classes(&classes).unwrap();
    for (a, b) in from_text.iter().zip(&from_classes) {
        assert_eq!(a.before, b.before);
        assert_eq!(a.after, b.after);
    }
}

#[test]
fn test_flag_sequence() {
    use LineBreakClass::RegionalIndicator as RI;
    let breakpoints = resolve_classes(&[RI, RI, RI, RI, RI]).unwrap();
    assert_eq!(break_offsets(&breakpoints), vec![1, 3, 4]);
}
