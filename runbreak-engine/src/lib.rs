//! Analysis facade over chunked UTF-16 text sources
//!
//! This crate assembles a window of text from a [`TextSource`], runs the
//! `runbreak-core` analyses over it and reports the results to an
//! [`AnalysisSink`].
//!
//! ```rust
//! use runbreak_engine::{analyze_script, CollectingSink, SliceSource};
//! use runbreak_core::Script;
//!
//! let text: Vec<u16> = "abc \u{3b1}\u{3b2}".encode_utf16().collect();
//! let source = SliceSource::chunked(&text, 2);
//! let mut sink = CollectingSink::new();
//!
//! analyze_script(&source, 0, text.len(), &mut sink).unwrap();
//! assert_eq!(sink.runs.len(), 2);
//! assert_eq!(sink.runs[1].script(), Script::Greek);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod assembler;
pub mod config;
pub mod error;
pub mod sink;
pub mod source;

// Re-export key types
pub use analyzer::{analyze_line_breakpoints, analyze_script, TextAnalyzer};
pub use assembler::WindowAssembler;
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, DEFAULT_MAX_WINDOW};
pub use error::{BoxError, EngineError, Result};
pub use sink::{AnalysisSink, CollectingSink};
pub use source::{SliceSource, TextSource};

// Re-export from core for convenience
pub use runbreak_core::{
    BreakCondition, LineBreakClass, LineBreakpoint, Script, ScriptAnalysis, ScriptRun,
    ScriptShapes,
};
