//! Span and token value types.

use smol_str::SmolStr;

use super::token_kind::TokenKind;

/// Half-open range of codepoint positions in the input, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// First covered position (inclusive).
    #[inline]
    pub fn start(self) -> usize {
        self.start
    }

    /// Position one past the last covered codepoint (exclusive).
    #[inline]
    pub fn end(self) -> usize {
        self.end
    }

    /// Length in codepoints.
    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A lexed token: kind, position, and the exact source slice it covers.
///
/// `source` always holds `span.len()` codepoints; concatenating the `source`
/// of every token of one lex run reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    source: SmolStr,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, source: impl Into<SmolStr>) -> Self {
        let source = source.into();
        debug_assert_eq!(source.chars().count(), span.len());
        Self { kind, span, source }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The covered source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }
}
