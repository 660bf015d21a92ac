//! cmdflow — a command execution pipeline for building CLI applications.
//!
//! Raw process arguments are tokenized, threaded through an ordered chain of
//! prioritized stages, and resolved to an integer exit status:
//!
//! ```text
//! argv → Tokenize → RunContext → Stage chain (phase, priority) → exit code
//! ```
//!
//! Each stage receives the mutable [`RunContext`] and a [`Next`] continuation
//! and may pass through, post-process, short-circuit, or rewrite the token
//! stream. Independent stages share typed per-run state through the
//! [`ContextStore`] without knowing about each other.
//!
//! ```
//! use cmdflow::{CommandRunner, Next, Phase, RunContext};
//!
//! let runner = CommandRunner::default()
//!     .use_debug_directive(false)
//!     .register_stage("invoke", Phase::Invoke, 0, |ctx: &mut RunContext, next: Next<'_>| {
//!         // a real host dispatches to its command handler here
//!         let _ = ctx.tokens();
//!         next.run(ctx)
//!     });
//!
//! let code = runner.run(&["build".to_string()]).unwrap();
//! assert_eq!(code, 0);
//! ```

pub mod console;
pub mod context;
pub mod directives;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod runner;
pub mod tokens;

pub use console::{BufferedConsole, Console, StdConsole};
pub use context::{AppSettings, ContextStore, OriginalInput, ParseResult, RunContext};
pub use directives::{DebugDirectiveConfig, DEBUG_DIRECTIVE};
pub use error::{MetadataError, PipelineError};
pub use pipeline::{Next, Phase, StagePlan, StageRegistration, StageRegistry, StageResult};
pub use runner::CommandRunner;
pub use tokens::{tokenize, Token, TokenKind, TokenStream};
