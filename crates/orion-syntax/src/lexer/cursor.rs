//! Low-level codepoint cursor shared by the lexer rules.

use smol_str::SmolStr;

use super::token::{Span, Token};
use super::token_kind::TokenKind;

/// Scanning state over a decoded codepoint buffer.
///
/// `start` marks the beginning of the in-progress token; `end` advances as
/// input is consumed. Both are codepoint indices with
/// `0 <= start <= end <= source.len()`.
pub(super) struct Cursor {
    source: Vec<char>,
    start: usize,
    end: usize,
}

impl Cursor {
    pub(super) fn new(source: Vec<char>) -> Self {
        Self { source, start: 0, end: 0 }
    }

    /// Current consume position, in codepoints.
    #[inline]
    pub(super) fn position(&self) -> usize {
        self.end
    }

    #[inline]
    pub(super) fn at_end(&self) -> bool {
        self.end >= self.source.len()
    }

    /// Codepoint at the consume position plus `offset`, if any.
    #[inline]
    pub(super) fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.end + offset).copied()
    }

    #[inline]
    pub(super) fn is(&self, ch: char) -> bool {
        self.peek(0) == Some(ch)
    }

    #[inline]
    pub(super) fn matches(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.peek(0).is_some_and(predicate)
    }

    #[inline]
    pub(super) fn matches_at(&self, predicate: impl Fn(char) -> bool, offset: usize) -> bool {
        self.peek(offset).is_some_and(predicate)
    }

    /// Whether the upcoming codepoints equal `literal`.
    pub(super) fn is_sequence(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(offset, ch)| self.peek(offset) == Some(ch))
    }

    /// Advance by up to `count` codepoints, stopping at the end of input.
    #[inline]
    pub(super) fn consume(&mut self, count: usize) {
        self.end = usize::min(self.end + count, self.source.len());
    }

    /// Advance while `predicate` holds.
    pub(super) fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek(0) {
            if !predicate(ch) {
                break;
            }
            self.end += 1;
        }
    }

    /// Advance over one codepoint if it is `a` or `b`.
    #[inline]
    pub(super) fn try_consume_either(&mut self, a: char, b: char) {
        if self.is(a) || self.is(b) {
            self.end += 1;
        }
    }

    /// Package `[start, end)` as a token of `kind` and begin the next one.
    pub(super) fn take_token(&mut self, kind: TokenKind) -> Token {
        let span = Span::new(self.start, self.end);
        let source: SmolStr = self.source[self.start..self.end].iter().copied().collect();
        self.start = self.end;
        Token::new(kind, span, source)
    }
}
