//! Token stream — raw argv → classified lexical units.
//!
//! Tokens are classified once, up front, into directive / option / operand /
//! separator. The stream itself is immutable: stages that need to transform
//! it (e.g. directive stripping) replace the run's stream with a new one.

mod lexer;
mod stream;

pub use lexer::tokenize;
pub use stream::{Token, TokenKind, TokenStream};
