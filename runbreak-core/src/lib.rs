//! Script itemization and line-break analysis for UTF-16 text
//!
//! This crate holds the pure analysis layer: static Unicode tables, the
//! script-run segmenter and the UAX#14 break-opportunity resolver. It performs no
//! I/O; window assembly over chunked sources lives in `runbreak-engine`.
//!
//! Break classes come from the Unicode data bundled with `unicode-linebreak`, so code
//! points reassigned in recent Unicode versions may classify differently than in
//! older line-break tables.
//!
//! # Example
//!
//! ```rust
//! use runbreak_core::{analyze_line_breakpoints, script_runs, BreakCondition, Script};
//!
//! let text: Vec<u16> = "Hello, \u{3b1}\u{3b2}".encode_utf16().collect();
//!
//! let runs = script_runs(&text);
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].script(), Script::Latin);
//! assert_eq!(runs[1].script(), Script::Greek);
//!
//! let breakpoints = analyze_line_breakpoints(&text).unwrap();
//! assert_eq!(breakpoints.len(), text.len());
//! assert_eq!(breakpoints[6].after, BreakCondition::CanBreak);
//! ```

pub mod error;
pub mod resolver;
pub mod segmenter;
pub mod tables;
pub mod types;

pub use error::{CoreError, Result};
pub use resolver::{analyze_line_breakpoints, resolve_classes};
pub use segmenter::{analyze_script, emit_push, script_runs, ScriptScanner};
pub use tables::{break_class_of, script_of, LineBreakClass, Script};
pub use types::{BreakCondition, LineBreakpoint, ScriptAnalysis, ScriptRun, ScriptShapes};
