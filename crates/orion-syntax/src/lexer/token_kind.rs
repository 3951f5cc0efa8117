//! Token taxonomy produced by the lexer.

/// All token kinds the lexer can produce.
///
/// Closed `u16` enumeration, append-only: new kinds go at the end, existing
/// discriminants are never reused. `Comment` and `Eof` are reserved; the
/// current rules emit neither, but parsers may synthesise an `Eof`
/// terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // --- Trivia ---
    Whitespace = 0,
    Newline,
    Comment,

    // --- Keywords (reserved) ---

    // --- Punctuation ---
    Dot,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,

    // --- Boolean literals ---
    BooleanLiteral,

    // --- String literals ---
    StringLiteral,

    // --- Exact numeric literals ---
    IntLiteral,
    BigIntLiteral,
    SmallIntLiteral,
    TinyIntLiteral,

    // --- Approximate numeric literals ---
    FloatLiteral,
    DoubleLit,
    BigDecimalLiteral,

    // --- Other ---
    Identifier,

    // --- Special ---
    Eof,
}

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment
        )
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::BooleanLiteral
                | TokenKind::StringLiteral
                | TokenKind::IntLiteral
                | TokenKind::BigIntLiteral
                | TokenKind::SmallIntLiteral
                | TokenKind::TinyIntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::DoubleLit
                | TokenKind::BigDecimalLiteral
        )
    }
}
