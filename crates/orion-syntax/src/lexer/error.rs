//! Lexer failure taxonomy.

/// Errors raised while scanning a single token.
///
/// Offsets are codepoint positions into the input, like every other position
/// in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// `\` followed by a character outside the permitted escape set.
    #[error("invalid escape sequence `\\{escape}` at offset {offset}")]
    InvalidEscape { escape: char, offset: usize },

    /// End of input reached inside a string literal.
    #[error("unclosed string literal starting at offset {start}")]
    UnclosedString { start: usize },

    /// A digit fragment (fraction or exponent) with no digits.
    #[error("expected at least one digit at offset {offset}")]
    InvalidNumeric { offset: usize },
}
