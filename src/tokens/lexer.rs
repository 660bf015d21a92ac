//! Lexer — raw argv → classified token stream.

use crate::tokens::{Token, TokenKind, TokenStream};

/// Classify raw arguments into a token stream.
///
/// Rules, in order:
/// - everything after a `--` separator is an operand, verbatim;
/// - `[name]` in first position is a directive (anywhere else it is a
///   plain operand, so later arguments can legitimately contain brackets);
/// - tokens starting with `-` are options;
/// - anything else is an operand.
pub fn tokenize(raw_args: &[String]) -> TokenStream {
    let mut tokens = Vec::with_capacity(raw_args.len());
    let mut past_separator = false;

    for (position, raw) in raw_args.iter().enumerate() {
        let kind = if past_separator {
            TokenKind::Operand
        } else if raw == "--" {
            past_separator = true;
            TokenKind::Separator
        } else if position == 0 && is_directive_shaped(raw) {
            TokenKind::Directive
        } else if raw.starts_with('-') && raw.len() > 1 {
            TokenKind::Option
        } else {
            TokenKind::Operand
        };

        tokens.push(Token {
            raw: raw.clone(),
            kind,
            position,
        });
    }

    TokenStream::new(tokens)
}

fn is_directive_shaped(raw: &str) -> bool {
    raw.len() > 2 && raw.starts_with('[') && raw.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn kinds(stream: &TokenStream) -> Vec<TokenKind> {
        stream.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn classifies_directive_options_and_operands() {
        let stream = tokenize(&raw(&["[debug]", "build", "--flag", "-v", "out.txt"]));
        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Directive,
                TokenKind::Operand,
                TokenKind::Option,
                TokenKind::Option,
                TokenKind::Operand,
            ]
        );
    }

    #[test]
    fn bracketed_token_after_first_position_is_an_operand() {
        let stream = tokenize(&raw(&["build", "[debug]", "--flag"]));
        assert_eq!(
            kinds(&stream),
            vec![TokenKind::Operand, TokenKind::Operand, TokenKind::Option]
        );
        assert_eq!(stream.directive(), None);
    }

    #[test]
    fn separator_turns_everything_after_into_operands() {
        let stream = tokenize(&raw(&["run", "--", "--not-a-flag", "[not-a-directive]"]));
        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Operand,
                TokenKind::Separator,
                TokenKind::Operand,
                TokenKind::Operand,
            ]
        );
    }

    #[test]
    fn lone_dash_is_an_operand() {
        let stream = tokenize(&raw(&["-"]));
        assert_eq!(kinds(&stream), vec![TokenKind::Operand]);
    }

    #[test]
    fn positions_match_input_order() {
        let stream = tokenize(&raw(&["a", "b", "c"]));
        let positions: Vec<usize> = stream.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_yields_empty_stream() {
        let stream = tokenize(&[]);
        assert!(stream.is_empty());
        assert_eq!(stream.directive(), None);
    }
}
