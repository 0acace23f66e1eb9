//! Generates the three-level line-break class trie for the BMP.
//!
//! Layout of the emitted `LINEBREAK_TABLE` (a single `[u16]`):
//! - `[0, 256)`: one entry per high byte, the offset of that page's block index
//! - pages: 16 entries each, the offset of a 16-unit leaf
//! - leaves: 16 raw class codes each
//!
//! Identical leaves and pages are shared, so the lookup is
//! `t[t[t[c >> 8] + ((c >> 4) & 0xf)] + (c & 0xf)]`.

use std::collections::HashMap;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use unicode_linebreak::{break_property, BreakClass};

/// Historical class numbering shared with `src/tables/linebreak.rs`.
const BK: u16 = 1;
const CR: u16 = 2;
const LF: u16 = 3;
const CM: u16 = 4;
const SG: u16 = 5;
const GL: u16 = 6;
const CB: u16 = 7;
const SP: u16 = 8;
const ZW: u16 = 9;
const NL: u16 = 10;
const WJ: u16 = 11;
const JL: u16 = 12;
const JV: u16 = 13;
const JT: u16 = 14;
const H2: u16 = 15;
const H3: u16 = 16;
const XX: u16 = 17;
const OP: u16 = 18;
const CL: u16 = 19;
const CP: u16 = 20;
const QU: u16 = 21;
const NS: u16 = 22;
const EX: u16 = 23;
const SY: u16 = 24;
const IS: u16 = 25;
const PR: u16 = 26;
const PO: u16 = 27;
const NU: u16 = 28;
const AL: u16 = 29;
const ID: u16 = 30;
const IN: u16 = 31;
const HY: u16 = 32;
const BB: u16 = 33;
const BA: u16 = 34;
const SA: u16 = 35;
const AI: u16 = 36;
const B2: u16 = 37;
const HL: u16 = 38;
const CJ: u16 = 39;
const RI: u16 = 40;

#[allow(unreachable_patterns)]
fn class_code(class: BreakClass) -> u16 {
    match class {
        BreakClass::Mandatory => BK,
        BreakClass::CarriageReturn => CR,
        BreakClass::LineFeed => LF,
        BreakClass::CombiningMark => CM,
        BreakClass::NextLine => NL,
        BreakClass::Surrogate => SG,
        BreakClass::WordJoiner => WJ,
        BreakClass::ZeroWidthSpace => ZW,
        BreakClass::NonBreakingGlue => GL,
        BreakClass::Space => SP,
        // Older UAX#14 revisions classify ZWJ as a combining mark
        BreakClass::ZeroWidthJoiner => CM,
        BreakClass::BeforeAndAfter => B2,
        BreakClass::After => BA,
        BreakClass::Before => BB,
        BreakClass::Hyphen => HY,
        BreakClass::Contingent => CB,
        BreakClass::ClosePunctuation => CL,
        BreakClass::CloseParenthesis => CP,
        BreakClass::Exclamation => EX,
        BreakClass::Inseparable => IN,
        BreakClass::NonStarter => NS,
        BreakClass::OpenPunctuation => OP,
        BreakClass::Quotation => QU,
        BreakClass::InfixSeparator => IS,
        BreakClass::Numeric => NU,
        BreakClass::Postfix => PO,
        BreakClass::Prefix => PR,
        BreakClass::Symbol => SY,
        BreakClass::Ambiguous => AI,
        BreakClass::Alphabetic => AL,
        BreakClass::ConditionalJapaneseStarter => CJ,
        BreakClass::EmojiBase => ID,
        BreakClass::EmojiModifier => ID,
        BreakClass::HangulLvSyllable => H2,
        BreakClass::HangulLvtSyllable => H3,
        BreakClass::HebrewLetter => HL,
        BreakClass::Ideographic => ID,
        BreakClass::HangulLJamo => JL,
        BreakClass::HangulVJamo => JV,
        BreakClass::HangulTJamo => JT,
        BreakClass::RegionalIndicator => RI,
        BreakClass::ComplexContext => SA,
        BreakClass::Unknown => XX,
        _ => XX,
    }
}

fn build_table() -> Vec<u16> {
    let mut leaves: Vec<[u16; 16]> = Vec::new();
    let mut leaf_ids: HashMap<[u16; 16], usize> = HashMap::new();
    let mut pages: Vec<[usize; 16]> = Vec::new();
    let mut page_ids: HashMap<[usize; 16], usize> = HashMap::new();
    let mut page_of_high = [0usize; 256];

    for (high, page_slot) in page_of_high.iter_mut().enumerate() {
        let mut page = [0usize; 16];
        for (block, leaf_slot) in page.iter_mut().enumerate() {
            let mut leaf = [0u16; 16];
            for (low, value) in leaf.iter_mut().enumerate() {
                let unit = ((high << 8) | (block << 4) | low) as u32;
                *value = class_code(break_property(unit));
            }
            *leaf_slot = *leaf_ids.entry(leaf).or_insert_with(|| {
                leaves.push(leaf);
                leaves.len() - 1
            });
        }
        *page_slot = *page_ids.entry(page).or_insert_with(|| {
            pages.push(page);
            pages.len() - 1
        });
    }

    let pages_base = 256;
    let leaves_base = pages_base + pages.len() * 16;
    let total = leaves_base + leaves.len() * 16;
    assert!(
        total <= usize::from(u16::MAX),
        "line-break trie does not fit 16-bit offsets ({total} entries)"
    );

    let mut table = Vec::with_capacity(total);
    table.extend(page_of_high.iter().map(|&page| (pages_base + page * 16) as u16));
    for page in &pages {
        table.extend(page.iter().map(|&leaf| (leaves_base + leaf * 16) as u16));
    }
    for leaf in &leaves {
        table.extend_from_slice(leaf);
    }
    table
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let table = build_table();

    let mut out = String::new();
    writeln!(out, "// @generated by build.rs from unicode-linebreak data").unwrap();
    writeln!(
        out,
        "pub(crate) static LINEBREAK_TABLE: [u16; {}] = [",
        table.len()
    )
    .unwrap();
    for row in table.chunks(16) {
        out.push_str("   ");
        for value in row {
            write!(out, " {value:#06x},").unwrap();
        }
        out.push('\n');
    }
    out.push_str("];\n");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(Path::new(&out_dir).join("linebreak_table.rs"), out)
        .expect("failed to write linebreak_table.rs");
}
