//! Per-run execution state.
//!
//! One [`RunContext`] is created per invocation and threaded through every
//! stage; its [`ContextStore`] is how independently written stages share
//! typed state without coupling to each other.

mod run;
mod store;

pub use run::{AppSettings, OriginalInput, ParseResult, RunContext};
pub use store::ContextStore;
