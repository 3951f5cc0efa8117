//! Kind space for tree elements.
//!
//! `SyntaxKind` tags every green node and token. Token kinds come first and
//! mirror [`TokenKind`]; node kinds (non-terminals) follow. The numbering is
//! append-only: new kinds go at the end, existing discriminants are never
//! reused.

use crate::lexer::TokenKind;

/// All node and token kinds of the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Tokens ---
    Whitespace = 0,
    Newline,
    Comment,

    Dot,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,

    BooleanLiteral,
    StringLiteral,
    IntLiteral,
    BigIntLiteral,
    SmallIntLiteral,
    TinyIntLiteral,
    FloatLiteral,
    DoubleLit,
    BigDecimalLiteral,

    Identifier,
    Eof,

    // --- Node kinds (non-terminals) ---
    Root,
    Literal,
    UnaryExpr,
    BinaryExpr,
    Error,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::Newline | SyntaxKind::Comment
        )
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::Newline => SyntaxKind::Newline,
            TokenKind::Comment => SyntaxKind::Comment,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::Plus => SyntaxKind::Plus,
            TokenKind::Minus => SyntaxKind::Minus,
            TokenKind::Asterisk => SyntaxKind::Asterisk,
            TokenKind::Slash => SyntaxKind::Slash,
            TokenKind::Percent => SyntaxKind::Percent,
            TokenKind::BooleanLiteral => SyntaxKind::BooleanLiteral,
            TokenKind::StringLiteral => SyntaxKind::StringLiteral,
            TokenKind::IntLiteral => SyntaxKind::IntLiteral,
            TokenKind::BigIntLiteral => SyntaxKind::BigIntLiteral,
            TokenKind::SmallIntLiteral => SyntaxKind::SmallIntLiteral,
            TokenKind::TinyIntLiteral => SyntaxKind::TinyIntLiteral,
            TokenKind::FloatLiteral => SyntaxKind::FloatLiteral,
            TokenKind::DoubleLit => SyntaxKind::DoubleLit,
            TokenKind::BigDecimalLiteral => SyntaxKind::BigDecimalLiteral,
            TokenKind::Identifier => SyntaxKind::Identifier,
            TokenKind::Eof => SyntaxKind::Eof,
        }
    }
}
