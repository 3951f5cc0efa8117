//! Lossless lexer for the SQL-flavored surface syntax.
//!
//! The lexer is a pull iterator over a decoded codepoint buffer: every
//! codepoint of the input comes back out as part of exactly one token,
//! whitespace and newlines included, so the token stream can rebuild the
//! input verbatim. Spans and widths are codepoint-indexed.
//!
//! ## Error handling
//!
//! Malformed literals surface as typed [`LexError`]s from the offending
//! call; the lexer never fabricates placeholder tokens. Callers that want
//! error tokens in the stream can catch the error and synthesise their own.

mod cursor;
mod error;
mod token;
mod token_kind;

#[cfg(test)]
mod lexer_tests;

pub use error::LexError;
pub use token::{Span, Token};
pub use token_kind::TokenKind;

use cursor::Cursor;

/// Codepoints above this are accepted in identifiers without classification.
const ASCII_MAX: char = '\u{7F}';

/// Pull lexer over a decoded codepoint sequence.
///
/// Construct with [`Lexer::new`] and drive with [`Lexer::try_next_token`],
/// or iterate (`Item = Result<Token, LexError>`).
pub struct Lexer {
    cursor: Cursor,
}

impl Lexer {
    /// Creates a lexer for `source`.
    ///
    /// The input is decoded up front; all spans and widths are measured in
    /// codepoints, not bytes.
    pub fn new(source: &str) -> Self {
        Self { cursor: Cursor::new(source.chars().collect()) }
    }

    /// Scans the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted; otherwise exactly one
    /// token covering the codepoints consumed by this call.
    pub fn try_next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.at_end() {
            return Ok(None);
        }

        if let Some(token) = self.whitespace() {
            return Ok(Some(token));
        }
        if let Some(token) = self.operator() {
            return Ok(Some(token));
        }
        if let Some(token) = self.boolean_literal() {
            return Ok(Some(token));
        }
        if let Some(token) = self.keyword_or_identifier() {
            return Ok(Some(token));
        }

        if self.cursor.is('.') {
            // Approximate numerics may omit the leading integer part.
            if self.cursor.matches_at(|ch| ch.is_ascii_digit(), 1) {
                return self.numeric_literal(false).map(Some);
            }
            self.cursor.consume(1);
            return Ok(Some(self.cursor.take_token(TokenKind::Dot)));
        }

        self.literal()
    }

    /// Maximal run of spaces/tabs, or of newlines.
    fn whitespace(&mut self) -> Option<Token> {
        if self.cursor.is(' ') || self.cursor.is('\t') {
            self.cursor.consume_while(|ch| ch == ' ' || ch == '\t');
            return Some(self.cursor.take_token(TokenKind::Whitespace));
        }

        if self.cursor.is('\n') {
            self.cursor.consume_while(|ch| ch == '\n');
            return Some(self.cursor.take_token(TokenKind::Newline));
        }

        None
    }

    fn operator(&mut self) -> Option<Token> {
        let kind = match self.cursor.peek(0)? {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            _ => return None,
        };

        self.cursor.consume(1);
        Some(self.cursor.take_token(kind))
    }

    /// The exact sequences `true` and `false`, anchored at the current
    /// position. Tried before the identifier rule.
    fn boolean_literal(&mut self) -> Option<Token> {
        for keyword in ["true", "false"] {
            if self.cursor.is_sequence(keyword) {
                self.cursor.consume(keyword.len());
                return Some(self.cursor.take_token(TokenKind::BooleanLiteral));
            }
        }

        None
    }

    /// Maximal identifier run. Keyword subdivision is reserved; every run
    /// currently comes out as `Identifier`.
    fn keyword_or_identifier(&mut self) -> Option<Token> {
        if !self.cursor.matches(is_identifier_start) {
            return None;
        }

        self.cursor.consume_while(is_identifier_continue);
        Some(self.cursor.take_token(TokenKind::Identifier))
    }

    fn literal(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.matches(|ch| ch.is_ascii_digit()) {
            return self.numeric_literal(true).map(Some);
        }

        if self.cursor.is('"') {
            return self.string_literal().map(Some);
        }

        Ok(None)
    }

    /// Numeric literal body and suffix classification.
    ///
    /// `consume_digits` is false when entering through the `.`-prefix rule:
    /// the integer part is absent and a fraction digit is guaranteed by the
    /// dispatcher.
    fn numeric_literal(&mut self, consume_digits: bool) -> Result<Token, LexError> {
        if consume_digits {
            self.digits()?;

            // Nothing after the integer part: the input ends the literal.
            if self.cursor.at_end() {
                return Ok(self.cursor.take_token(TokenKind::IntLiteral));
            }
        }

        let exact = if self.cursor.is('.') {
            self.cursor.consume(1);
            self.digits()?;
            self.exponent()?;
            false
        } else {
            self.exponent()?;
            true
        };

        if self.is_suffix('f') {
            return Ok(self.consume_and_take(1, TokenKind::FloatLiteral));
        }

        // The two-codepoint `BD` form must win over plain `D`.
        if self.is_suffix('b') && self.is_suffix_at('d', 1) {
            return Ok(self.consume_and_take(2, TokenKind::BigDecimalLiteral));
        }

        if self.is_suffix('d') {
            return Ok(self.consume_and_take(1, TokenKind::DoubleLit));
        }

        if self.is_suffix('l') {
            return Ok(self.consume_and_take(1, TokenKind::BigIntLiteral));
        }

        if self.is_suffix('s') {
            return Ok(self.consume_and_take(1, TokenKind::SmallIntLiteral));
        }

        if self.is_suffix('y') {
            return Ok(self.consume_and_take(1, TokenKind::TinyIntLiteral));
        }

        let kind = if exact { TokenKind::IntLiteral } else { TokenKind::FloatLiteral };
        Ok(self.cursor.take_token(kind))
    }

    /// String literal delimited by `"`, with backslash escapes
    /// `t b n r f ' " \`. The token keeps both delimiters.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.position();
        self.cursor.consume(1); // opening delimiter

        loop {
            match self.cursor.peek(0) {
                None => return Err(LexError::UnclosedString { start }),
                Some('"') => break,
                Some('\\') => {
                    self.cursor.consume(1);
                    match self.cursor.peek(0) {
                        Some('t' | 'b' | 'n' | 'r' | 'f' | '\'' | '"' | '\\') => {
                            self.cursor.consume(1);
                        }
                        Some(escape) => {
                            return Err(LexError::InvalidEscape {
                                escape,
                                offset: self.cursor.position(),
                            });
                        }
                        None => return Err(LexError::UnclosedString { start }),
                    }
                }
                Some(_) => self.cursor.consume(1),
            }
        }

        self.cursor.consume(1); // closing delimiter
        Ok(self.cursor.take_token(TokenKind::StringLiteral))
    }

    /// Grammar: `[0-9]+`.
    fn digits(&mut self) -> Result<(), LexError> {
        if !self.cursor.matches(|ch| ch.is_ascii_digit()) {
            return Err(LexError::InvalidNumeric { offset: self.cursor.position() });
        }

        self.cursor.consume_while(|ch| ch.is_ascii_digit());
        Ok(())
    }

    /// Grammar: `[Ee] [+-]? [0-9]+`, consumed only when present.
    fn exponent(&mut self) -> Result<(), LexError> {
        if !(self.cursor.is('E') || self.cursor.is('e')) {
            return Ok(());
        }

        self.cursor.consume(1);
        self.cursor.try_consume_either('+', '-');
        self.digits()
    }

    /// Case-insensitive suffix check at the consume position plus `offset`.
    #[inline]
    fn is_suffix_at(&self, suffix: char, offset: usize) -> bool {
        self.cursor
            .matches_at(|ch| ch.eq_ignore_ascii_case(&suffix), offset)
    }

    #[inline]
    fn is_suffix(&self, suffix: char) -> bool {
        self.is_suffix_at(suffix, 0)
    }

    #[inline]
    fn consume_and_take(&mut self, count: usize, kind: TokenKind) -> Token {
        self.cursor.consume(count);
        self.cursor.take_token(kind)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next_token().transpose()
    }
}

/// Tokenizes all of `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.try_next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch > ASCII_MAX
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch > ASCII_MAX
}
