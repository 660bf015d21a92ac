//! Token value types and the immutable stream.

/// What a token means to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Reserved `[name]` token in first position (e.g. `[debug]`).
    Directive,
    /// Flag-shaped token (`--verbose`, `-v`) before the separator.
    Option,
    /// Positional value, or anything after the `--` separator.
    Operand,
    /// The literal `--` separator.
    Separator,
}

/// One lexical unit of the input. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original text, exactly as received.
    pub raw: String,
    pub kind: TokenKind,
    /// Zero-based position within the owning stream.
    pub position: usize,
}

/// Ordered, immutable sequence of tokens for one run.
///
/// Order is semantically significant: directives are only recognized in
/// first position, and operands keep their relative order. Transformations
/// produce a new stream rather than mutating tokens in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Directive name (without brackets) if the stream starts with one.
    ///
    /// Exactly one bracket pair is removed: `[[debug]]` yields the name
    /// `[debug]`, which no interceptor recognizes, so only the exact form
    /// `[name]` can trigger a directive.
    pub fn directive(&self) -> Option<&str> {
        match self.tokens.first() {
            Some(token) if token.kind == TokenKind::Directive => token
                .raw
                .strip_prefix('[')
                .and_then(|name| name.strip_suffix(']')),
            _ => None,
        }
    }

    /// New stream without the first token, positions rebased to zero.
    pub fn without_first(&self) -> TokenStream {
        let tokens = self
            .tokens
            .iter()
            .skip(1)
            .enumerate()
            .map(|(position, token)| Token {
                raw: token.raw.clone(),
                kind: token.kind,
                position,
            })
            .collect();
        TokenStream::new(tokens)
    }

    /// Raw texts in order, mostly useful for assertions and logging.
    pub fn raw_values(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.raw.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
