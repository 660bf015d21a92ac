//! Directives — reserved `[name]` tokens recognized before normal parsing.
//!
//! A directive only counts when it is the very first token. Unrecognized
//! bracketed first tokens pass through untouched so older binaries keep
//! working when newer directives show up in input.

mod debug;

pub use debug::{attach_debugger, DebugDirectiveConfig, DEBUG_DIRECTIVE};
