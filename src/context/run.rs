//! Run context — the single mutable record threaded through the pipeline.

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::context::ContextStore;
use crate::tokens::{Token, TokenStream};

/// Static, host-supplied settings for every run of one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Program name used in user-facing output.
    pub program_name: String,
    /// Leave unknown `[name]` first tokens in the stream without warning.
    pub ignore_unrecognized_directives: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            program_name: "app".to_string(),
            ignore_unrecognized_directives: false,
        }
    }
}

/// The untouched input this run started from.
#[derive(Debug, Clone)]
pub struct OriginalInput {
    pub args: Vec<String>,
    pub tokens: TokenStream,
}

/// What the parsing stages resolved the input to.
///
/// Populated by a `ParseInput`-phase collaborator; the pipeline core only
/// carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Name of the command the input selected.
    pub command: String,
    pub operands: Vec<Token>,
    pub options: Vec<Token>,
}

/// Mutable state for exactly one invocation.
///
/// Owns the token stream, the context store, the console, and the should-exit
/// latch. Created by the runner, destroyed when the run completes; never
/// shared across invocations.
pub struct RunContext {
    original: OriginalInput,
    tokens: TokenStream,
    settings: AppSettings,
    /// Set by parse-phase collaborators, `None` until then.
    pub parse_result: Option<ParseResult>,
    store: ContextStore,
    console: Box<dyn Console>,
    exit_code: Option<i32>,
}

impl RunContext {
    pub fn new(
        args: Vec<String>,
        tokens: TokenStream,
        settings: AppSettings,
        console: Box<dyn Console>,
    ) -> Self {
        Self {
            original: OriginalInput {
                args,
                tokens: tokens.clone(),
            },
            tokens,
            settings,
            parse_result: None,
            store: ContextStore::new(),
            console,
            exit_code: None,
        }
    }

    /// Input exactly as it arrived, before any stage transformed it.
    pub fn original(&self) -> &OriginalInput {
        &self.original
    }

    /// Current token stream. Immutable; transform via [`Self::replace_tokens`].
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Swap in a transformed stream (e.g. after directive stripping).
    pub fn replace_tokens(&mut self, tokens: TokenStream) {
        self.tokens = tokens;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn store(&self) -> &ContextStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ContextStore {
        &mut self.store
    }

    pub fn console_mut(&mut self) -> &mut dyn Console {
        self.console.as_mut()
    }

    /// Latch the run's terminal exit code.
    ///
    /// Monotonic: the first call wins and the latch is never unset. Later
    /// calls are ignored so stages downstream of an exit decision cannot
    /// override it.
    pub fn request_exit(&mut self, code: i32) {
        if self.exit_code.is_none() {
            self.exit_code = Some(code);
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_code.is_some()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}
