//! Static classification tables
//!
//! All tables are read-only and allocation-free during lookup.

pub mod linebreak;
pub mod script;

pub use linebreak::{break_class_of, is_space_unit, LineBreakClass};
pub use script::{script_of, Script, ScriptRange, SCRIPT_RANGES};
